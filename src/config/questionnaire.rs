//! Questionnaire catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::questionnaire::{default_questions, questions_from_yaml, Question, QuestionnaireError};

/// Questionnaire configuration
///
/// With no catalog path configured the built-in ten-question wellbeing
/// catalog is used.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuestionnaireConfig {
    /// Optional path to a YAML question catalog
    pub catalog_path: Option<PathBuf>,
}

impl QuestionnaireConfig {
    /// Validate questionnaire configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::EmptyCatalogPath);
            }
        }
        Ok(())
    }

    /// Load the question catalog this configuration points at
    ///
    /// Reads and parses the YAML file when `catalog_path` is set, otherwise
    /// returns the built-in catalog.
    pub fn load_questions(&self) -> Result<Vec<Question>, QuestionnaireError> {
        match &self.catalog_path {
            Some(path) => {
                let yaml = std::fs::read_to_string(path).map_err(|e| {
                    QuestionnaireError::CatalogParse(format!(
                        "failed to read {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                questions_from_yaml(&yaml)
            }
            None => Ok(default_questions()),
        }
    }
}
