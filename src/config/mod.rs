pub mod persona_file;

#[cfg(feature = "cli")]
use crate::domain::model::Persona;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "persona-intro")]
#[command(about = "Build a persona from a name and an age and let it introduce itself")]
pub struct CliConfig {
    #[arg(long, help = "Name handed to the greeter")]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true, help = "Age handed to the age holder")]
    pub age: Option<f64>,

    #[arg(long, help = "TOML or JSON file with `name` and `age`")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "1", help = "How many times to introduce")]
    pub repeat: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Persona from `--config` (or the default one), with `--name` / `--age` on top.
    pub fn resolve_persona(&self) -> Result<Persona> {
        let mut persona = match &self.config {
            Some(path) => persona_file::load(path)?,
            None => Persona::default(),
        };

        if let Some(name) = &self.name {
            persona.name = name.clone();
        }
        if let Some(age) = self.age {
            persona.age = age;
        }

        Ok(persona)
    }
}
