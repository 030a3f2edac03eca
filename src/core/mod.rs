pub mod composite;

pub use crate::domain::model::Persona;
pub use crate::domain::ports::{AgeHolder, Greeter};
pub use crate::utils::error::Result;
