pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{MemoryConsole, StdoutConsole};
pub use crate::config::toml_config::PlaygroundConfig;
pub use crate::core::{lesson::Lesson, playground::Playground};
pub use crate::domain::model::{FormError, LoginForm, ValidLogin};
pub use crate::domain::ports::Console;
pub use crate::utils::error::{PlaygroundError, Result};
