//! Emotion module - labels, probability vectors, and the smoothing aggregator.

mod aggregator;
mod history;
mod label;
mod vector;

pub use aggregator::{EmotionAggregator, SMOOTHING_ALPHA};
pub use history::EmotionHistoryEntry;
pub use label::EmotionLabel;
pub use vector::{EmotionVector, NORMALIZATION_TOLERANCE};
