pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ConsoleAgeHolder, ConsoleGreeter};
pub use crate::core::composite::Composite;
pub use crate::domain::model::Persona;
pub use crate::domain::ports::{AgeHolder, Greeter};
pub use crate::utils::error::{IntroError, Result};
