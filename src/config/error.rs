//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Frame interval must be at least {min} ms, got {actual}")]
    FrameIntervalTooShort { min: u64, actual: u64 },

    #[error("Questionnaire catalog path is empty")]
    EmptyCatalogPath,
}
