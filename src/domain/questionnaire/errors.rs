//! Questionnaire-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by the questionnaire engine and catalog loading.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionnaireError {
    /// An answer arrived for a question other than the current one.
    ///
    /// This indicates a UI/state bug in the caller and is surfaced, never
    /// silently ignored.
    OutOfSequenceAnswer { expected: usize, actual: usize },
    /// All questions are already answered.
    AlreadyComplete,
    /// The selected weight has no matching option on the question.
    UnknownWeight { question_index: usize, weight: u8 },
    /// Catalog or question construction failed validation.
    ValidationFailed(String),
    /// Catalog file could not be parsed.
    CatalogParse(String),
}

impl QuestionnaireError {
    pub fn out_of_sequence(expected: usize, actual: usize) -> Self {
        QuestionnaireError::OutOfSequenceAnswer { expected, actual }
    }

    pub fn unknown_weight(question_index: usize, weight: u8) -> Self {
        QuestionnaireError::UnknownWeight {
            question_index,
            weight,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionnaireError::OutOfSequenceAnswer { .. } => ErrorCode::OutOfSequenceAnswer,
            QuestionnaireError::AlreadyComplete => ErrorCode::QuestionnaireComplete,
            QuestionnaireError::UnknownWeight { .. } => ErrorCode::ValidationFailed,
            QuestionnaireError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            QuestionnaireError::CatalogParse(_) => ErrorCode::InvalidFormat,
        }
    }

    pub fn message(&self) -> String {
        match self {
            QuestionnaireError::OutOfSequenceAnswer { expected, actual } => format!(
                "Answer out of sequence: expected question {}, got {}",
                expected, actual
            ),
            QuestionnaireError::AlreadyComplete => {
                "All questions have already been answered".to_string()
            }
            QuestionnaireError::UnknownWeight {
                question_index,
                weight,
            } => format!(
                "Question {} has no option with weight {}",
                question_index, weight
            ),
            QuestionnaireError::ValidationFailed(msg) => format!("Validation failed: {}", msg),
            QuestionnaireError::CatalogParse(msg) => format!("Catalog parse error: {}", msg),
        }
    }
}

impl std::fmt::Display for QuestionnaireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuestionnaireError {}

impl From<ValidationError> for QuestionnaireError {
    fn from(err: ValidationError) -> Self {
        QuestionnaireError::ValidationFailed(err.to_string())
    }
}

impl From<QuestionnaireError> for DomainError {
    fn from(err: QuestionnaireError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            QuestionnaireError::OutOfSequenceAnswer { expected, actual } => domain
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            _ => domain,
        }
    }
}
