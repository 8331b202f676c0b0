//! Assessment-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::questionnaire::QuestionnaireError;

/// Errors raised by the assessment session and its handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentError {
    /// Session was not found in the store.
    NotFound(SessionId),
    /// A questionnaire operation failed.
    Questionnaire(QuestionnaireError),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error (store, event bus).
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: SessionId) -> Self {
        AssessmentError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::SessionNotFound,
            AssessmentError::Questionnaire(inner) => inner.code(),
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(id) => format!("Assessment session not found: {}", id),
            AssessmentError::Questionnaire(inner) => inner.message(),
            AssessmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<QuestionnaireError> for AssessmentError {
    fn from(err: QuestionnaireError) -> Self {
        AssessmentError::Questionnaire(err)
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => AssessmentError::Infrastructure(err.to_string()),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => AssessmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_errors_keep_their_code() {
        let err: AssessmentError = QuestionnaireError::out_of_sequence(1, 4).into();
        assert_eq!(err.code(), ErrorCode::OutOfSequenceAnswer);
    }

    #[test]
    fn not_found_mentions_the_session() {
        let id = SessionId::new();
        let err = AssessmentError::not_found(id);
        assert!(err.message().contains(&id.to_string()));
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
    }
}
