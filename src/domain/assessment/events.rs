//! Assessment domain events.
//!
//! Events published as the assessment lifecycle progresses:
//! - `AssessmentStarted` - New session created
//! - `AnswerRecorded` - One questionnaire answer recorded
//! - `CaptureStopped` - Facial capture halted (user action or source failure)
//! - `AssessmentCompleted` - Report assembled

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, SessionId, Timestamp};

use super::SeverityTier;

/// Published when a new assessment session begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentStarted {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the new session.
    pub session_id: SessionId,

    /// Number of questions in the questionnaire.
    pub question_count: usize,

    /// When the session was created.
    pub started_at: Timestamp,
}

domain_event!(
    AssessmentStarted,
    event_type = "assessment.started",
    aggregate_id = session_id,
    aggregate_type = "AssessmentSession",
    occurred_at = started_at,
    event_id = event_id
);

/// Published when one questionnaire answer is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecorded {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the session.
    pub session_id: SessionId,

    /// Index of the answered question.
    pub question_index: usize,

    /// Selected weight.
    pub weight: u8,

    /// True when this was the final question.
    pub questionnaire_complete: bool,

    /// When the answer was recorded.
    pub answered_at: Timestamp,
}

domain_event!(
    AnswerRecorded,
    event_type = "assessment.answer_recorded",
    aggregate_id = session_id,
    aggregate_type = "AssessmentSession",
    occurred_at = answered_at,
    event_id = event_id
);

/// Published when facial capture halts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureStopped {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the session.
    pub session_id: SessionId,

    /// Frames accumulated before the stop.
    pub frame_count: usize,

    /// True when the stop was caused by a frame-source failure.
    pub source_failed: bool,

    /// When capture stopped.
    pub stopped_at: Timestamp,
}

domain_event!(
    CaptureStopped,
    event_type = "assessment.capture_stopped",
    aggregate_id = session_id,
    aggregate_type = "AssessmentSession",
    occurred_at = stopped_at,
    event_id = event_id
);

/// Published when the final report is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentCompleted {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the session.
    pub session_id: SessionId,

    /// Total questionnaire score.
    pub total_score: u32,

    /// Classified severity tier.
    pub severity: SeverityTier,

    /// When the report was assembled.
    pub completed_at: Timestamp,
}

domain_event!(
    AssessmentCompleted,
    event_type = "assessment.completed",
    aggregate_id = session_id,
    aggregate_type = "AssessmentSession",
    occurred_at = completed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn started_event_converts_to_envelope() {
        let session_id = SessionId::new();
        let event = AssessmentStarted {
            event_id: EventId::new(),
            session_id,
            question_count: 10,
            started_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        assert_eq!(envelope.event_type, "assessment.started");
        assert_eq!(envelope.aggregate_id, session_id.to_string());
        assert_eq!(envelope.aggregate_type, "AssessmentSession");
        assert_eq!(envelope.payload["question_count"], 10);
    }

    #[test]
    fn completed_event_carries_score_and_severity() {
        let event = AssessmentCompleted {
            event_id: EventId::new(),
            session_id: SessionId::new(),
            total_score: 12,
            severity: SeverityTier::Moderate,
            completed_at: Timestamp::now(),
        };

        assert_eq!(event.event_type(), "assessment.completed");
        let envelope = event.to_envelope();
        assert_eq!(envelope.payload["severity"], "moderate");
    }
}
