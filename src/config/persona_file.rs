use crate::domain::model::Persona;
use crate::utils::error::{IntroError, Result};
use std::fs;
use std::path::Path;

/// Reads a persona from a `.toml` or `.json` file, picked by extension.
pub fn load(path: impl AsRef<Path>) -> Result<Persona> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let parse: fn(&str) -> Result<Persona> = match extension.as_deref() {
        Some("toml") => from_toml_str,
        Some("json") => from_json_str,
        _ => {
            return Err(IntroError::UnsupportedConfigFormat {
                path: path.display().to_string(),
            })
        }
    };

    let content = fs::read_to_string(path)?;
    let persona = parse(&content)?;
    tracing::debug!("Loaded persona from {}: {:?}", path.display(), persona);
    Ok(persona)
}

pub fn from_toml_str(content: &str) -> Result<Persona> {
    Ok(toml::from_str(content)?)
}

pub fn from_json_str(content: &str) -> Result<Persona> {
    Ok(serde_json::from_str(content)?)
}
