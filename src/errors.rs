use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Error reading config file {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Error parsing config file {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Error writing {}: {source}", path.display())]
    Output { path: PathBuf, source: std::io::Error },
}

impl GraphError {
    /// Process exit code for the stage that failed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 1,
            Self::Parse { .. } => 2,
            Self::Output { .. } => 3,
            Self::Configuration(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
