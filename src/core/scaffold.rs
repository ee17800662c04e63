use crate::core::{Result, Storage};
use crate::domain::model::{readme_content, DirSpec, PROJECT_LAYOUT, README_FILE};

pub struct Scaffolder<'a, S: Storage> {
    storage: &'a S,
    layout: &'a [DirSpec],
}

impl<'a, S: Storage> Scaffolder<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self {
            storage,
            layout: &PROJECT_LAYOUT,
        }
    }

    /// Creates `base_dir` and every layout directory under it, each with its `readme.md`.
    /// Existing directories are reused and existing readmes overwritten. Stops at the
    /// first error; whatever was created so far stays on disk.
    pub async fn create(&self, base_dir: &str) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(self.layout.len() + 1);

        self.storage.create_dir_all(base_dir).await?;
        let root_readme = format!("{}/{}", base_dir, README_FILE);
        self.storage
            .write_file(&root_readme, readme_content(base_dir).as_bytes())
            .await?;
        written.push(root_readme);

        for dir in self.layout {
            let dir_path = format!("{}/{}", base_dir, dir.path);
            self.storage.create_dir_all(&dir_path).await?;

            let readme = format!("{}/{}", dir_path, README_FILE);
            self.storage
                .write_file(&readme, readme_content(dir.description).as_bytes())
                .await?;
            tracing::debug!("Created {}", dir_path);
            written.push(readme);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ScaffoldError;
    use std::collections::{BTreeSet, HashMap};
    use std::path::Path;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        dirs: Arc<Mutex<BTreeSet<String>>>,
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        fail_on: Option<String>,
    }

    impl Storage for MockStorage {
        async fn create_dir_all(&self, path: &str) -> Result<()> {
            if self.fail_on.as_deref() == Some(path) {
                return Err(ScaffoldError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("cannot create {}", path),
                )));
            }
            self.dirs.lock().await.insert(path.to_string());
            Ok(())
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn write_executable(&self, path: &str, data: &[u8]) -> Result<()> {
            self.write_file(path, data).await
        }

        async fn copy_in(&self, _source: &Path, _dest: &str) -> Result<u64> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_creates_all_readmes() {
        let storage = MockStorage::default();
        let written = Scaffolder::new(&storage).create("tgs").await.unwrap();

        assert_eq!(written.len(), 14);
        let files = storage.files.lock().await;
        assert_eq!(files.len(), 14);
        assert_eq!(files["tgs/readme.md"], b"tgs\n");
        assert_eq!(
            files["tgs/config/redis/readme.md"],
            "这里是redis相关配置\n".as_bytes()
        );

        let dirs = storage.dirs.lock().await;
        assert!(dirs.contains("tgs"));
        assert!(dirs.contains("tgs/model/mysql"));
    }

    #[tokio::test]
    async fn test_stops_at_first_error() {
        let storage = MockStorage {
            fail_on: Some("tgs/data".to_string()),
            ..Default::default()
        };
        let result = Scaffolder::new(&storage).create("tgs").await;
        assert!(matches!(result, Err(ScaffoldError::IoError(_))));

        let dirs = storage.dirs.lock().await;
        assert!(dirs.contains("tgs/constant"));
        assert!(!dirs.contains("tgs/impl"));
    }
}
