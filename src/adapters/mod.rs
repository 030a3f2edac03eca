// Adapters layer: concrete collaborators for the composite.

pub mod console;

pub use console::{ConsoleAgeHolder, ConsoleGreeter};
