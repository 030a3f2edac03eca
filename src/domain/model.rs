use serde::{Deserialize, Serialize};

/// The two scalar inputs a composite is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: f64,
}

impl Persona {
    pub fn new(name: impl Into<String>, age: f64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new("", 0.0)
    }
}
