//! Per-frame emotion history entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::EmotionVector;

/// One accepted frame, stored verbatim (raw, un-smoothed).
///
/// The history sequence is what variability analysis consumes; the smoothed
/// running estimate is derived state and never written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionHistoryEntry {
    recorded_at: Timestamp,
    /// Index of the question on screen when the frame arrived, if any.
    question_index: Option<usize>,
    emotions: EmotionVector,
}

impl EmotionHistoryEntry {
    /// Creates a history entry for an accepted frame.
    pub fn new(recorded_at: Timestamp, question_index: Option<usize>, emotions: EmotionVector) -> Self {
        Self {
            recorded_at,
            question_index,
            emotions,
        }
    }

    /// Returns when the frame was recorded.
    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }

    /// Returns the question index active at ingest time.
    pub fn question_index(&self) -> Option<usize> {
        self.question_index
    }

    /// Returns the raw frame vector.
    pub fn emotions(&self) -> &EmotionVector {
        &self.emotions
    }
}
