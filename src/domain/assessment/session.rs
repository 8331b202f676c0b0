//! Assessment session aggregate.
//!
//! The session is the aggregate root of one assessment run. It owns the
//! emotion aggregator and the questionnaire engine, and gates the two
//! producer paths that feed them: the fixed-interval frame path and the
//! user answer path. Both run on ordinary run-to-completion event-loop
//! semantics; no locking beyond that is assumed here.

use serde::{Deserialize, Serialize};

use crate::domain::emotion::{EmotionAggregator, EmotionHistoryEntry, EmotionVector};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::questionnaire::{
    AnswerOutcome, AnswerWeight, Question, QuestionAnswer, QuestionnaireEngine,
};

use super::{AssessmentError, Report, ReportAssembler};

/// Aggregate root for one assessment run.
///
/// # Invariants
///
/// - `current_estimate()` is always a valid distribution
/// - Frames are only accepted while `recording` is true; a frame arriving
///   afterwards is a no-op, never an error
/// - Answers must arrive in question order
/// - Stopping capture retains already-accumulated history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    id: SessionId,
    aggregator: EmotionAggregator,
    engine: QuestionnaireEngine,
    recording: bool,
    /// Set once the frame source reported an unrecoverable error.
    frame_source_failed: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Creates a new session with recording enabled.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the question list is empty
    pub fn new(id: SessionId, questions: Vec<Question>) -> Result<Self, AssessmentError> {
        let engine = QuestionnaireEngine::new(questions)?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            aggregator: EmotionAggregator::new(),
            engine,
            recording: true,
            frame_source_failed: false,
            created_at: now,
            updated_at: now,
        })
    }

    // ============================================================
    // Accessors
    // ============================================================

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// True while new frames are accepted.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// True once the frame source reported a failure.
    pub fn frame_source_failed(&self) -> bool {
        self.frame_source_failed
    }

    /// The smoothed running emotion estimate (always defined).
    pub fn current_estimate(&self) -> &EmotionVector {
        self.aggregator.current_estimate()
    }

    /// The raw frame history.
    pub fn history(&self) -> &[EmotionHistoryEntry] {
        self.aggregator.history()
    }

    /// The recorded answers, in question order.
    pub fn answers(&self) -> &[QuestionAnswer] {
        self.engine.answers()
    }

    /// The ordered question list.
    pub fn questions(&self) -> &[Question] {
        self.engine.questions()
    }

    /// Index of the question awaiting an answer.
    pub fn current_question_index(&self) -> Option<usize> {
        self.engine.current_index()
    }

    /// True when every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    /// Sum of all recorded answer weights.
    pub fn total_score(&self) -> u32 {
        self.engine.total_score()
    }

    /// Mean total-variation between consecutive frames.
    pub fn emotional_variability(&self) -> f64 {
        self.aggregator.variability()
    }

    /// Per-label mean over the raw history (neutral fallback when empty).
    pub fn average_emotions(&self) -> EmotionVector {
        self.aggregator.average()
    }

    /// When the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// When the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ============================================================
    // Frame path
    // ============================================================

    /// Ingests one frame from the frame source.
    ///
    /// Returns `true` if the frame was accepted. A frame arriving while
    /// recording is off is a deliberate no-op so timer ticks racing a stop
    /// are harmless.
    pub fn ingest_frame(&mut self, frame: &EmotionVector) -> bool {
        if !self.recording {
            return false;
        }
        self.aggregator.ingest(frame, self.engine.current_index());
        self.updated_at = Timestamp::now();
        true
    }

    /// Stops facial capture.
    ///
    /// Idempotent; already-accumulated history is retained.
    pub fn stop_capture(&mut self) {
        if self.recording {
            self.recording = false;
            self.updated_at = Timestamp::now();
        }
    }

    /// Applies the frame-source failure recovery.
    ///
    /// When no frame was ever accepted, a single synthetic neutral frame is
    /// injected so the downstream pipeline still produces a coherent (if
    /// uninformative) report. Capture is disabled either way. Real frames
    /// already captured are kept as-is.
    pub fn mark_frame_source_failed(&mut self) {
        if self.frame_source_failed {
            return;
        }
        if self.recording && self.aggregator.frame_count() == 0 {
            self.aggregator
                .ingest(&EmotionVector::neutral(), self.engine.current_index());
        }
        self.frame_source_failed = true;
        self.recording = false;
        self.updated_at = Timestamp::now();
    }

    // ============================================================
    // Answer path
    // ============================================================

    /// Records the answer for the question at `index`.
    ///
    /// The aggregator's current estimate is captured with the answer. When
    /// the last question is answered, capture stops and the session is
    /// finalized.
    ///
    /// # Errors
    ///
    /// - `OutOfSequenceAnswer` if `index` is not the current question;
    ///   nothing is recorded
    /// - `QuestionnaireComplete` if all questions are already answered
    pub fn answer(
        &mut self,
        index: usize,
        weight: AnswerWeight,
    ) -> Result<AnswerOutcome, AssessmentError> {
        let estimate = *self.aggregator.current_estimate();
        let outcome = self.engine.answer(index, weight, estimate)?;
        if outcome.done {
            self.recording = false;
        }
        self.updated_at = Timestamp::now();
        Ok(outcome)
    }

    // ============================================================
    // Lifecycle
    // ============================================================

    /// Starts the assessment over: empty history, zero score, recording on.
    ///
    /// No state crosses the reset boundary.
    pub fn reset(&mut self) {
        self.aggregator.reset();
        self.engine.reset();
        self.recording = true;
        self.frame_source_failed = false;
        self.updated_at = Timestamp::now();
    }

    /// Assembles the report from current state.
    ///
    /// Read-only: may be called speculatively (e.g., a live preview) without
    /// side effects, even before the questionnaire completes.
    pub fn assemble_report(&self) -> Report {
        ReportAssembler::assemble(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionLabel;
    use crate::domain::questionnaire::default_questions;

    fn session() -> AssessmentSession {
        AssessmentSession::new(SessionId::new(), default_questions()).unwrap()
    }

    fn unit(label: EmotionLabel) -> EmotionVector {
        EmotionVector::zero().with(label, 1.0)
    }

    fn w(value: u8) -> AnswerWeight {
        AnswerWeight::try_new(value).unwrap()
    }

    #[test]
    fn new_session_is_recording_with_empty_state() {
        let s = session();
        assert!(s.is_recording());
        assert!(s.history().is_empty());
        assert_eq!(s.total_score(), 0);
        assert_eq!(*s.current_estimate(), EmotionVector::neutral());
    }

    #[test]
    fn new_session_rejects_empty_questions() {
        assert!(AssessmentSession::new(SessionId::new(), Vec::new()).is_err());
    }

    #[test]
    fn frames_are_tagged_with_the_active_question() {
        let mut s = session();
        s.ingest_frame(&unit(EmotionLabel::Happy));
        s.answer(0, w(1)).unwrap();
        s.ingest_frame(&unit(EmotionLabel::Sad));

        assert_eq!(s.history()[0].question_index(), Some(0));
        assert_eq!(s.history()[1].question_index(), Some(1));
    }

    #[test]
    fn frames_after_stop_are_ignored_without_error() {
        let mut s = session();
        s.ingest_frame(&unit(EmotionLabel::Happy));
        s.stop_capture();

        assert!(!s.ingest_frame(&unit(EmotionLabel::Sad)));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn stop_capture_is_idempotent_and_keeps_history() {
        let mut s = session();
        s.ingest_frame(&unit(EmotionLabel::Happy));
        s.stop_capture();
        s.stop_capture();

        assert!(!s.is_recording());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn answering_last_question_stops_recording() {
        let mut s = session();
        let count = s.questions().len();
        for i in 0..count {
            s.answer(i, w(0)).unwrap();
        }

        assert!(s.is_complete());
        assert!(!s.is_recording());
    }

    #[test]
    fn answer_captures_current_estimate() {
        let mut s = session();
        s.ingest_frame(&unit(EmotionLabel::Happy));
        s.answer(0, w(2)).unwrap();

        let answer = &s.answers()[0];
        assert!((answer.emotions_at_answer().get(EmotionLabel::Happy) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_sequence_answer_leaves_state_untouched() {
        let mut s = session();
        s.answer(0, w(1)).unwrap();

        let result = s.answer(3, w(1));
        assert!(result.is_err());
        assert_eq!(s.answers().len(), 1);
        assert_eq!(s.current_question_index(), Some(1));
    }

    #[test]
    fn frame_source_failure_on_empty_history_injects_neutral() {
        let mut s = session();
        s.mark_frame_source_failed();

        assert!(!s.is_recording());
        assert!(s.frame_source_failed());
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].emotions(), &EmotionVector::neutral());
    }

    #[test]
    fn frame_source_failure_after_real_frames_keeps_them_unskewed() {
        let mut s = session();
        s.ingest_frame(&unit(EmotionLabel::Happy));
        s.mark_frame_source_failed();

        assert_eq!(s.history().len(), 1);
        assert_eq!(s.average_emotions().dominant(), EmotionLabel::Happy);
    }

    #[test]
    fn frame_source_failure_is_idempotent() {
        let mut s = session();
        s.mark_frame_source_failed();
        s.mark_frame_source_failed();
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn reset_starts_a_fresh_run() {
        let mut s = session();
        s.ingest_frame(&unit(EmotionLabel::Sad));
        s.answer(0, w(3)).unwrap();
        s.mark_frame_source_failed();

        s.reset();

        assert!(s.is_recording());
        assert!(!s.frame_source_failed());
        assert!(s.history().is_empty());
        assert!(s.answers().is_empty());
        assert_eq!(s.total_score(), 0);
    }

    #[test]
    fn assemble_report_is_side_effect_free() {
        let mut s = session();
        s.ingest_frame(&unit(EmotionLabel::Happy));
        let before = s.clone();

        let _preview = s.assemble_report();
        let _again = s.assemble_report();

        assert_eq!(s, before);
    }
}
