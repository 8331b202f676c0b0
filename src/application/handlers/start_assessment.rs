//! StartAssessmentHandler - Command handler for starting a new assessment.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, AssessmentSession, AssessmentStarted};
use crate::domain::foundation::{EventId, SerializableDomainEvent, SessionId};
use crate::domain::questionnaire::Question;
use crate::ports::{EventPublisher, SessionStore};

/// Command to start a new assessment session.
#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    /// Ordered questionnaire to run; callers usually pass the catalog.
    pub questions: Vec<Question>,
}

/// Result of successfully starting an assessment.
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub session: AssessmentSession,
    pub event: AssessmentStarted,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    store: Arc<dyn SessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartAssessmentCommand,
    ) -> Result<StartAssessmentResult, AssessmentError> {
        let session_id = SessionId::new();
        let session = AssessmentSession::new(session_id, cmd.questions)?;

        self.store.save(&session).await?;

        let event = AssessmentStarted {
            event_id: EventId::new(),
            session_id,
            question_count: session.questions().len(),
            started_at: *session.created_at(),
        };

        self.event_publisher.publish(event.to_envelope()).await?;

        tracing::info!(session_id = %session_id, "assessment started");

        Ok(StartAssessmentResult { session, event })
    }
}
