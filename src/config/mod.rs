pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{CompilerSettings, RunConfig};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_required_field, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use self::toml_config::ToolConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tgs")]
#[command(about = "Scaffold a TarsGo service project from a .tars file")]
pub struct CliConfig {
    /// specify go mod, eg: github.com/franklee0817/tgs
    #[arg(short = 'm', long = "module")]
    pub module: Option<String>,

    /// specify tars file, eg: test.tars
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// TOML file with compiler and project settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the project is created in (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// tars compiler to run (default: tars2go)
    #[arg(long)]
    pub compiler: Option<String>,

    /// Show what would be created without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads `--config` if given, otherwise the built-in defaults.
    pub fn tool_config(&self) -> Result<ToolConfig> {
        let tool = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                ToolConfig::from_file(path)?
            }
            None => ToolConfig::default(),
        };
        tool.validate()?;
        Ok(tool)
    }

    /// Builds the run configuration; command-line flags win over the TOML file.
    /// Performs no I/O besides what `tool` already did.
    pub fn resolve(&self, tool: &ToolConfig) -> Result<RunConfig> {
        let module = validate_required_field("-m", &self.module)?;
        let file = validate_required_field("-f", &self.file)?;
        let mut config = RunConfig::new(module, file)?;

        config.output_dir = PathBuf::from(
            self.output_dir
                .as_deref()
                .unwrap_or(&tool.project.output_dir),
        );
        config.compiler = CompilerSettings {
            program: self
                .compiler
                .clone()
                .unwrap_or_else(|| tool.compiler.program.clone()),
            extra_args: tool.compiler.args.clone(),
        };
        config.entry_point = tool.project.entry_point.clone();
        config.copy_definition = tool.project.copy_definition;

        Ok(config)
    }
}
