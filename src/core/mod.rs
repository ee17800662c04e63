pub mod compiler;
pub mod engine;
pub mod entry_point;
pub mod scaffold;

pub use crate::domain::model::{RunConfig, RunReport};
pub use crate::domain::ports::{CommandRunner, Storage};
pub use crate::utils::error::Result;
