//! CompleteAssessmentHandler - Command handler for finalizing an assessment.

use std::sync::{Arc, Mutex};

use crate::domain::assessment::{AssessmentCompleted, AssessmentError, CaptureStopped, Report};
use crate::domain::foundation::{EventId, SerializableDomainEvent, SessionId, Timestamp};
use crate::ports::{EventPublisher, SessionStore};

/// Command to finalize an assessment and assemble its report.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub session_id: SessionId,
}

/// Result of completing an assessment.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentResult {
    pub report: Report,
    pub event: AssessmentCompleted,
}

/// Handler for completing assessments.
///
/// Completion always succeeds once the session exists: a session with no
/// frames (capture denied or never started) still yields a coherent
/// neutral-fallback report.
pub struct CompleteAssessmentHandler {
    store: Arc<dyn SessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CompleteAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteAssessmentCommand,
    ) -> Result<CompleteAssessmentResult, AssessmentError> {
        // Stop and assemble under the store's atomic update so a frame
        // landing mid-completion is neither lost nor half-reported.
        let report_slot = Arc::new(Mutex::new(None));
        let slot = report_slot.clone();
        let session = self
            .store
            .update(
                &cmd.session_id,
                Box::new(move |session| {
                    let was_recording = session.is_recording();
                    session.stop_capture();
                    *slot.lock().expect("report slot lock poisoned") =
                        Some((was_recording, session.assemble_report()));
                }),
            )
            .await?
            .ok_or(AssessmentError::NotFound(cmd.session_id))?;

        let (was_recording, report) = report_slot
            .lock()
            .expect("report slot lock poisoned")
            .take()
            .ok_or(AssessmentError::NotFound(cmd.session_id))?;

        let event = AssessmentCompleted {
            event_id: EventId::new(),
            session_id: cmd.session_id,
            total_score: report.total_score(),
            severity: report.severity(),
            completed_at: Timestamp::now(),
        };

        let mut envelopes = Vec::with_capacity(2);
        if was_recording {
            let stopped = CaptureStopped {
                event_id: EventId::new(),
                session_id: cmd.session_id,
                frame_count: session.history().len(),
                source_failed: session.frame_source_failed(),
                stopped_at: Timestamp::now(),
            };
            envelopes.push(stopped.to_envelope());
        }
        envelopes.push(event.to_envelope());
        self.event_publisher.publish_all(envelopes).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            total_score = report.total_score(),
            severity = %report.severity(),
            "assessment completed"
        );

        Ok(CompleteAssessmentResult { report, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, InMemorySessionStore};
    use crate::domain::assessment::{AssessmentSession, SeverityTier};
    use crate::domain::emotion::{EmotionLabel, EmotionVector};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::questionnaire::{default_questions, AnswerWeight};

    async fn setup(
        session: &AssessmentSession,
    ) -> (CompleteAssessmentHandler, Arc<InMemoryEventBus>) {
        let store = Arc::new(InMemorySessionStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        store.save(session).await.unwrap();
        (CompleteAssessmentHandler::new(store, bus.clone()), bus)
    }

    #[tokio::test]
    async fn completion_stops_capture_and_reports() {
        let mut session =
            AssessmentSession::new(SessionId::new(), default_questions()).unwrap();
        session.ingest_frame(&EmotionVector::zero().with(EmotionLabel::Happy, 1.0));
        let (handler, bus) = setup(&session).await;

        let result = handler
            .handle(CompleteAssessmentCommand {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(result.report.dominant_emotion(), EmotionLabel::Happy);
        // Capture was still running, so the stop is announced first.
        assert!(bus.has_event("assessment.capture_stopped"));
        assert!(bus.has_event("assessment.completed"));
    }

    #[tokio::test]
    async fn completion_with_no_frames_yields_neutral_report() {
        let mut session =
            AssessmentSession::new(SessionId::new(), default_questions()).unwrap();
        for i in 0..10 {
            session.answer(i, AnswerWeight::try_new(1).unwrap()).unwrap();
        }
        let (handler, _) = setup(&session).await;

        let result = handler
            .handle(CompleteAssessmentCommand {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        let report = &result.report;
        assert_eq!(report.total_score(), 10);
        assert_eq!(report.severity(), SeverityTier::Mild);
        assert_eq!(report.dominant_emotion(), EmotionLabel::Neutral);
        assert!(!report.recommendations().is_empty());
    }

    #[tokio::test]
    async fn missing_session_is_reported() {
        let session =
            AssessmentSession::new(SessionId::new(), default_questions()).unwrap();
        let (handler, _) = setup(&session).await;

        let result = handler
            .handle(CompleteAssessmentCommand {
                session_id: SessionId::new(),
            })
            .await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::SessionNotFound);
    }
}
