use std::path::PathBuf;

use color_match::{MatchError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read image {}: {source}", path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid colour '{input}': {message}")]
    InvalidColor { input: String, message: String },

    #[error("{0}")]
    Match(#[from] MatchError),
}

impl AppError {
    /// Message shown to the caller in JSON output.
    ///
    /// Decode failures get a fixed wording; everything else uses the
    /// error's own description.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Match(MatchError::Decode(_)) => "Could not parse image".to_string(),
            other => other.to_string(),
        }
    }
}
