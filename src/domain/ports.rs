use crate::domain::model::{CommandOutput, CommandSpec};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// File-system access rooted at the output directory. Paths are relative to that root.
pub trait Storage: Send + Sync {
    fn create_dir_all(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Creates or truncates `path`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Like `write_file`, but the file is created with mode `0o755`.
    fn write_executable(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Copies a file from outside the root into `dest`.
    fn copy_in(
        &self,
        source: &Path,
        dest: &str,
    ) -> impl std::future::Future<Output = Result<u64>> + Send;
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs to completion. `Err` only when the program could not be started;
    /// a non-zero exit is reported through `CommandOutput::success`.
    async fn run(&self, command: &CommandSpec) -> Result<CommandOutput>;
}
