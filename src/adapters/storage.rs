use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn create_dir_all(&self, path: &str) -> Result<()> {
        fs::create_dir_all(self.full_path(path)).await?;
        Ok(())
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(self.full_path(path), data).await?;
        Ok(())
    }

    async fn write_executable(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o755);

        let mut file = options.open(self.full_path(path)).await?;
        file.write_all(data).await?;
        file.flush().await?;
        Ok(())
    }

    async fn copy_in(&self, source: &Path, dest: &str) -> Result<u64> {
        let copied = fs::copy(source, self.full_path(dest)).await?;
        Ok(copied)
    }
}
