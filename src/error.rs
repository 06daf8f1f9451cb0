use crate::services::IntakeError;
use thiserror::Error;

/// Top-level error for the command-line front end
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("Logging initialisation failed: {0}")]
    Logging(String),

    #[error("Unknown seeker: {0}")]
    UnknownSeeker(String),
}
