use crate::core::compiler::InterfaceCompiler;
use crate::core::entry_point::{EntryPointWriter, ENTRY_POINT_TEMPLATE};
use crate::core::scaffold::Scaffolder;
use crate::core::{CommandRunner, Result, RunConfig, RunReport, Storage};
use crate::domain::model::{EntryPointOutcome, RunPlan, PROJECT_LAYOUT};

/// Runs scaffold -> compile -> entry point for one `RunConfig`.
pub struct ScaffoldEngine<S: Storage, R: CommandRunner> {
    storage: S,
    runner: R,
    config: RunConfig,
}

impl<S: Storage, R: CommandRunner> ScaffoldEngine<S, R> {
    pub fn new(storage: S, runner: R, config: RunConfig) -> Self {
        Self {
            storage,
            runner,
            config,
        }
    }

    pub fn plan(&self) -> RunPlan {
        let mut directories = vec![self.config.relative("")];
        directories.extend(PROJECT_LAYOUT.iter().map(|dir| self.config.relative(dir.path)));

        RunPlan {
            directories,
            command: InterfaceCompiler::<R, S>::command(&self.config),
            entry_point: self.config.entry_point_path(),
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let config = &self.config;
        tracing::info!(
            "Scaffolding {} for module {}",
            config.project_root().display(),
            config.module
        );

        let readme_files = Scaffolder::new(&self.storage).create(&config.base_dir).await?;
        tracing::info!("Created {} readme files", readme_files.len());

        let compile = InterfaceCompiler::new(&self.runner, &self.storage)
            .compile(config)
            .await?;

        let entry_point = EntryPointWriter::new(&self.storage).write(config).await;
        if let EntryPointOutcome::Fallback { path, .. } = &entry_point {
            println!(
                "failed to create {}. you can paste the following code manually\n{}",
                path, ENTRY_POINT_TEMPLATE
            );
        }

        Ok(RunReport {
            base_dir: config.base_dir.clone(),
            readme_files,
            compile,
            entry_point,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CommandOutput, CommandSpec};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MemoryStorage {
        async fn create_dir_all(&self, _path: &str) -> Result<()> {
            Ok(())
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn write_executable(&self, path: &str, data: &[u8]) -> Result<()> {
            self.write_file(path, data).await
        }

        async fn copy_in(&self, _source: &Path, dest: &str) -> Result<u64> {
            self.write_file(dest, b"copied").await?;
            Ok(6)
        }
    }

    struct FixedRunner(bool);

    #[async_trait]
    impl CommandRunner for FixedRunner {
        async fn run(&self, _command: &CommandSpec) -> Result<CommandOutput> {
            Ok(CommandOutput {
                success: self.0,
                status: String::new(),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    fn config() -> RunConfig {
        RunConfig::new("github.com/org/tgs", "Hello.tars").unwrap()
    }

    #[test]
    fn test_plan() {
        let engine = ScaffoldEngine::new(MemoryStorage::default(), FixedRunner(true), config());
        let plan = engine.plan();

        assert_eq!(plan.directories.len(), PROJECT_LAYOUT.len() + 1);
        assert_eq!(plan.directories[1], "tgs/client");
        assert_eq!(plan.entry_point, "tgs/main.go");
        assert_eq!(plan.command.program, "tars2go");
        assert_eq!(plan.command.args.last().map(String::as_str), Some("Hello.tars"));
    }

    #[tokio::test]
    async fn test_run_writes_everything() {
        let storage = MemoryStorage::default();
        let engine = ScaffoldEngine::new(storage.clone(), FixedRunner(true), config());

        let report = engine.run().await.unwrap();
        assert!(report.entry_point.is_written());

        let files = storage.files.lock().await;
        assert_eq!(files.len(), 16);
        assert_eq!(files["tgs/main.go"], ENTRY_POINT_TEMPLATE.as_bytes());
        assert!(files.contains_key("tgs/protocol/Hello.tars"));
    }

    #[tokio::test]
    async fn test_compiler_failure_stops_before_entry_point() {
        let storage = MemoryStorage::default();
        let engine = ScaffoldEngine::new(storage.clone(), FixedRunner(false), config());

        assert!(engine.run().await.is_err());
        let files = storage.files.lock().await;
        assert_eq!(files.len(), 14);
        assert!(!files.contains_key("tgs/main.go"));
    }
}
