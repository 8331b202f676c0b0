//! RecordAnswerHandler - Command handler for answering a question.

use std::sync::{Arc, Mutex};

use crate::domain::assessment::{AnswerRecorded, AssessmentError};
use crate::domain::foundation::{EventId, SerializableDomainEvent, SessionId, Timestamp};
use crate::domain::questionnaire::{AnswerOutcome, AnswerWeight};
use crate::ports::{EventPublisher, SessionStore};

/// Command to record one questionnaire answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub session_id: SessionId,
    pub question_index: usize,
    pub weight: AnswerWeight,
}

/// Result of successfully recording an answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    pub outcome: AnswerOutcome,
    pub event: AnswerRecorded,
}

/// Handler for recording answers.
///
/// Out-of-sequence answers are surfaced to the caller: they indicate a UI
/// state bug, not a condition to paper over.
pub struct RecordAnswerHandler {
    store: Arc<dyn SessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RecordAnswerHandler {
    pub fn new(store: Arc<dyn SessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordAnswerCommand,
    ) -> Result<RecordAnswerResult, AssessmentError> {
        // Mutate through the store's atomic update so a concurrently
        // captured frame cannot overwrite the answer with a stale session.
        let answer_slot = Arc::new(Mutex::new(None));
        let slot = answer_slot.clone();
        let question_index = cmd.question_index;
        let weight = cmd.weight;
        self.store
            .update(
                &cmd.session_id,
                Box::new(move |session| {
                    let result = session.answer(question_index, weight);
                    *slot.lock().expect("answer slot lock poisoned") = Some(result);
                }),
            )
            .await?;

        let outcome = match answer_slot
            .lock()
            .expect("answer slot lock poisoned")
            .take()
        {
            Some(result) => result?,
            // The mutation never ran: no session under this ID.
            None => return Err(AssessmentError::NotFound(cmd.session_id)),
        };

        let event = AnswerRecorded {
            event_id: EventId::new(),
            session_id: cmd.session_id,
            question_index: cmd.question_index,
            weight: cmd.weight.value(),
            questionnaire_complete: outcome.done,
            answered_at: Timestamp::now(),
        };

        self.event_publisher.publish(event.to_envelope()).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            question_index = cmd.question_index,
            done = outcome.done,
            "answer recorded"
        );

        Ok(RecordAnswerResult { outcome, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, InMemorySessionStore};
    use crate::domain::assessment::AssessmentSession;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::questionnaire::default_questions;

    struct Fixture {
        handler: RecordAnswerHandler,
        store: Arc<InMemorySessionStore>,
        bus: Arc<InMemoryEventBus>,
        session_id: SessionId,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(InMemorySessionStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let session = AssessmentSession::new(SessionId::new(), default_questions()).unwrap();
        let session_id = *session.id();
        store.save(&session).await.unwrap();

        Fixture {
            handler: RecordAnswerHandler::new(store.clone(), bus.clone()),
            store,
            bus,
            session_id,
        }
    }

    fn w(value: u8) -> AnswerWeight {
        AnswerWeight::try_new(value).unwrap()
    }

    #[tokio::test]
    async fn records_answer_and_publishes_event() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(RecordAnswerCommand {
                session_id: f.session_id,
                question_index: 0,
                weight: w(2),
            })
            .await
            .unwrap();

        assert!(!result.outcome.done);
        assert_eq!(result.outcome.next_index, Some(1));
        assert!(f.bus.has_event("assessment.answer_recorded"));

        let stored = f.store.find(&f.session_id).await.unwrap().unwrap();
        assert_eq!(stored.total_score(), 2);
    }

    #[tokio::test]
    async fn out_of_sequence_answer_surfaces_and_saves_nothing() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(RecordAnswerCommand {
                session_id: f.session_id,
                question_index: 4,
                weight: w(1),
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.code(), ErrorCode::OutOfSequenceAnswer);

        let stored = f.store.find(&f.session_id).await.unwrap().unwrap();
        assert!(stored.answers().is_empty());
        assert_eq!(f.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn missing_session_is_reported() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(RecordAnswerCommand {
                session_id: SessionId::new(),
                question_index: 0,
                weight: w(0),
            })
            .await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn final_answer_marks_completion() {
        let f = fixture().await;

        for index in 0..10 {
            let result = f
                .handler
                .handle(RecordAnswerCommand {
                    session_id: f.session_id,
                    question_index: index,
                    weight: w(1),
                })
                .await
                .unwrap();
            assert_eq!(result.outcome.done, index == 9);
        }

        let stored = f.store.find(&f.session_id).await.unwrap().unwrap();
        assert!(stored.is_complete());
        assert!(!stored.is_recording());
    }
}
