//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `CARESENSE_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use caresense::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Capture interval: {:?}", config.capture.frame_interval());
//! ```

mod capture;
mod error;
mod questionnaire;

pub use capture::{CaptureConfig, MIN_FRAME_INTERVAL_MS};
pub use error::{ConfigError, ValidationError};
pub use questionnaire::QuestionnaireConfig;

use serde::Deserialize;

/// Root application configuration
///
/// All sections have defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Capture loop configuration (frame interval, error policy)
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Questionnaire configuration (catalog source)
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARESENSE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CARESENSE__CAPTURE__FRAME_INTERVAL_MS=500` -> `capture.frame_interval_ms = 500`
    /// - `CARESENSE__QUESTIONNAIRE__CATALOG_PATH=...` -> `questionnaire.catalog_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARESENSE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.capture.validate()?;
        self.questionnaire.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CARESENSE__CAPTURE__FRAME_INTERVAL_MS");
        env::remove_var("CARESENSE__CAPTURE__STOP_ON_SOURCE_ERROR");
        env::remove_var("CARESENSE__QUESTIONNAIRE__CATALOG_PATH");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.capture.frame_interval_ms, 1000);
        assert!(config.questionnaire.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_frame_interval() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARESENSE__CAPTURE__FRAME_INTERVAL_MS", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.capture.frame_interval_ms, 250);
    }

    #[test]
    fn test_validation_rejects_too_short_interval() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARESENSE__CAPTURE__FRAME_INTERVAL_MS", "10");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_path_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARESENSE__QUESTIONNAIRE__CATALOG_PATH", "/etc/caresense/questions.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.questionnaire.catalog_path,
            Some(std::path::PathBuf::from("/etc/caresense/questions.yaml"))
        );
    }
}
