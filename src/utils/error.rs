use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntroError {
    #[error("{role} failed: {message}")]
    Collaborator { role: &'static str, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported config format: {path} (expected .toml or .json)")]
    UnsupportedConfigFormat { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl IntroError {
    pub fn collaborator(role: &'static str, message: impl Into<String>) -> Self {
        Self::Collaborator {
            role,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IntroError::UnsupportedConfigFormat { .. }
            | IntroError::TomlError(_)
            | IntroError::JsonError(_) => ErrorSeverity::Medium,
            IntroError::Collaborator { .. } => ErrorSeverity::High,
            IntroError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

/// Exit code for an error chain, using the innermost `IntroError` if there is one.
pub fn exit_code_of(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<IntroError>()
        .map_or(1, IntroError::exit_code)
}

pub type Result<T> = std::result::Result<T, IntroError>;
