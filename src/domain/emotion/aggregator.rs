//! Running aggregation of per-frame emotion vectors.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{EmotionHistoryEntry, EmotionVector};

/// Weight given to the newest frame in the exponential average.
///
/// 30% to the newest observation, 70% retained from history: responsive to
/// expression changes while damping per-frame classifier noise.
pub const SMOOTHING_ALPHA: f64 = 0.3;

/// Exponentially-smoothed running estimate plus full raw history.
///
/// The aggregator is synchronous and knows nothing about timers or the
/// recording gate; the session decides whether a frame reaches `ingest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionAggregator {
    estimate: EmotionVector,
    history: Vec<EmotionHistoryEntry>,
}

impl EmotionAggregator {
    /// Creates an empty aggregator with the neutral default estimate.
    pub fn new() -> Self {
        Self {
            estimate: EmotionVector::neutral(),
            history: Vec::new(),
        }
    }

    /// Ingests one frame.
    ///
    /// The first frame sets the estimate to the normalized frame; each
    /// subsequent frame is folded in with [`SMOOTHING_ALPHA`]. The raw frame
    /// is appended verbatim to history, tagged with the active question
    /// index.
    pub fn ingest(&mut self, frame: &EmotionVector, question_index: Option<usize>) {
        let normalized = frame.normalized();
        self.estimate = if self.history.is_empty() {
            normalized
        } else {
            self.estimate.blend(&normalized, SMOOTHING_ALPHA)
        };
        self.history
            .push(EmotionHistoryEntry::new(Timestamp::now(), question_index, *frame));
    }

    /// The smoothed running estimate.
    ///
    /// Always a valid distribution; neutral before any frame.
    pub fn current_estimate(&self) -> &EmotionVector {
        &self.estimate
    }

    /// The raw frame history, in ingest order.
    pub fn history(&self) -> &[EmotionHistoryEntry] {
        &self.history
    }

    /// Number of accepted frames.
    pub fn frame_count(&self) -> usize {
        self.history.len()
    }

    /// Per-label mean over all raw history entries.
    ///
    /// Neutral fallback when no frame was ever accepted, so downstream
    /// report assembly always has a defined vector.
    pub fn average(&self) -> EmotionVector {
        if self.history.is_empty() {
            return EmotionVector::neutral();
        }
        let sum = self
            .history
            .iter()
            .fold(EmotionVector::zero(), |acc, entry| acc.plus(entry.emotions()));
        sum.scaled(1.0 / self.history.len() as f64)
    }

    /// Mean total-variation between consecutive history entries.
    ///
    /// Defined as 0 for histories shorter than two entries.
    pub fn variability(&self) -> f64 {
        if self.history.len() < 2 {
            return 0.0;
        }
        let total: f64 = self
            .history
            .windows(2)
            .map(|pair| pair[0].emotions().total_variation(pair[1].emotions()))
            .sum();
        total / (self.history.len() - 1) as f64
    }

    /// Clears history and restores the neutral default estimate.
    pub fn reset(&mut self) {
        self.estimate = EmotionVector::neutral();
        self.history.clear();
    }
}

impl Default for EmotionAggregator {
    fn default() -> Self {
        Self::new()
    }
}
