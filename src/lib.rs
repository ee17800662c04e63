pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LocalStorage, SystemCommandRunner};
pub use crate::config::toml_config::ToolConfig;
pub use crate::core::engine::ScaffoldEngine;
pub use crate::domain::model::{RunConfig, RunReport};
pub use crate::utils::error::{Result, ScaffoldError};
