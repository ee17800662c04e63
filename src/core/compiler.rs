use crate::core::{CommandRunner, Result, RunConfig, Storage};
use crate::domain::model::{CommandSpec, CompileOutcome, PROTOCOL_DIR};
use crate::utils::error::ScaffoldError;

/// Runs the tars compiler for a run and copies the definition file next to its output.
pub struct InterfaceCompiler<'a, R: CommandRunner, S: Storage> {
    runner: &'a R,
    storage: &'a S,
}

impl<'a, R: CommandRunner, S: Storage> InterfaceCompiler<'a, R, S> {
    pub fn new(runner: &'a R, storage: &'a S) -> Self {
        Self { runner, storage }
    }

    /// `<program> -module <module> -outdir <protocol dir> [extra args] <definition file>`
    pub fn command(config: &RunConfig) -> CommandSpec {
        let mut args = vec![
            "-module".to_string(),
            config.module.clone(),
            "-outdir".to_string(),
            config.protocol_dir().to_string_lossy().into_owned(),
        ];
        args.extend(config.compiler.extra_args.iter().cloned());
        args.push(config.definition_file.to_string_lossy().into_owned());

        CommandSpec {
            program: config.compiler.program.clone(),
            args,
        }
    }

    pub async fn compile(&self, config: &RunConfig) -> Result<CompileOutcome> {
        let command = Self::command(config);
        tracing::info!("Compiling {}", config.definition_file.display());

        let output = self.runner.run(&command).await?;
        if !output.stdout.is_empty() {
            print!("{}", output.stdout);
        }
        if !output.success {
            return Err(ScaffoldError::CompilerFailedError {
                program: command.program,
                status: output.status,
                stderr: output.stderr,
            });
        }
        if !output.stderr.trim().is_empty() {
            tracing::debug!("{} stderr: {}", command.program, output.stderr.trim());
        }

        let copied_definition = if config.copy_definition {
            self.copy_definition(config).await
        } else {
            None
        };

        Ok(CompileOutcome {
            stdout: output.stdout,
            copied_definition,
        })
    }

    /// Best-effort: the bindings already exist, so a failed copy is only logged.
    async fn copy_definition(&self, config: &RunConfig) -> Option<String> {
        let Some(file_name) = config.definition_file.file_name() else {
            tracing::warn!(
                "Not copying {}: no file name",
                config.definition_file.display()
            );
            return None;
        };
        let dest = config.relative(&format!(
            "{}/{}",
            PROTOCOL_DIR,
            file_name.to_string_lossy()
        ));

        match self.storage.copy_in(&config.definition_file, &dest).await {
            Ok(_) => Some(dest),
            Err(e) => {
                tracing::warn!(
                    "Could not copy {} to {}: {}",
                    config.definition_file.display(),
                    dest,
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CommandOutput;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct ScriptedRunner {
        output: CommandOutput,
        seen: Arc<Mutex<Vec<CommandSpec>>>,
    }

    impl ScriptedRunner {
        fn new(success: bool, stdout: &str, stderr: &str) -> Self {
            Self {
                output: CommandOutput {
                    success,
                    status: if success { "exit status: 0" } else { "exit status: 1" }.to_string(),
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                },
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
            self.seen.lock().await.push(command.clone());
            Ok(self.output.clone())
        }
    }

    #[derive(Default)]
    struct CopyRecorder {
        copies: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl Storage for CopyRecorder {
        async fn create_dir_all(&self, _path: &str) -> Result<()> {
            Ok(())
        }

        async fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Ok(())
        }

        async fn write_executable(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Ok(())
        }

        async fn copy_in(&self, _source: &Path, dest: &str) -> Result<u64> {
            if self.fail {
                return Err(std::io::Error::from(std::io::ErrorKind::NotFound).into());
            }
            self.copies.lock().await.push(dest.to_string());
            Ok(42)
        }
    }

    fn config() -> RunConfig {
        RunConfig::new("github.com/org/tgs", "defs/Hello.tars").unwrap()
    }

    #[test]
    fn test_command_line() {
        let mut config = config();
        config.compiler.extra_args = vec!["-add-servant=false".to_string()];

        let command = InterfaceCompiler::<ScriptedRunner, CopyRecorder>::command(&config);
        assert_eq!(
            command.to_string(),
            "tars2go -module github.com/org/tgs -outdir tgs/protocol -add-servant=false defs/Hello.tars"
        );
    }

    #[tokio::test]
    async fn test_success_copies_definition() {
        let runner = ScriptedRunner::new(true, "generated\n", "");
        let storage = CopyRecorder::default();

        let outcome = InterfaceCompiler::new(&runner, &storage)
            .compile(&config())
            .await
            .unwrap();

        assert_eq!(outcome.stdout, "generated\n");
        assert_eq!(
            outcome.copied_definition.as_deref(),
            Some("tgs/protocol/Hello.tars")
        );
        assert_eq!(runner.seen.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_copy_failure_is_swallowed() {
        let runner = ScriptedRunner::new(true, "", "");
        let storage = CopyRecorder {
            fail: true,
            ..Default::default()
        };

        let outcome = InterfaceCompiler::new(&runner, &storage)
            .compile(&config())
            .await
            .unwrap();
        assert!(outcome.copied_definition.is_none());
    }

    #[tokio::test]
    async fn test_failure_skips_copy() {
        let runner = ScriptedRunner::new(false, "", "parse error at line 3");
        let storage = CopyRecorder::default();

        let result = InterfaceCompiler::new(&runner, &storage)
            .compile(&config())
            .await;

        match result {
            Err(ScaffoldError::CompilerFailedError { program, stderr, .. }) => {
                assert_eq!(program, "tars2go");
                assert_eq!(stderr, "parse error at line 3");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(storage.copies.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_copy_disabled() {
        let runner = ScriptedRunner::new(true, "", "");
        let storage = CopyRecorder::default();
        let mut config = config();
        config.copy_definition = false;

        let outcome = InterfaceCompiler::new(&runner, &storage)
            .compile(&config)
            .await
            .unwrap();
        assert!(outcome.copied_definition.is_none());
        assert!(storage.copies.lock().await.is_empty());
    }
}
