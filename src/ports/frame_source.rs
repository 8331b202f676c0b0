//! FrameSource port - Interface for the facial-expression classifier.
//!
//! The face-landmark model is a black box that yields a per-frame emotion
//! probability vector. Production adapters wrap a camera plus classifier;
//! test adapters replay scripted sequences. A source error is recovered
//! locally by the session (neutral fallback + capture disabled), never
//! surfaced as fatal to the report consumer.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::emotion::EmotionVector;

/// Port for pulling per-frame emotion vectors.
///
/// The capture loop calls `next_frame` on a fixed cadence while capture is
/// active. Returned vectors are raw classifier output and need not sum
/// to 1; the aggregator normalizes.
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Produces the emotion vector for the current camera frame.
    async fn next_frame(&self) -> Result<EmotionVector, FrameSourceError>;
}

/// Errors a frame source may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameSourceError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Expression model not loaded: {0}")]
    ModelNotLoaded(String),

    #[error("Frame source has no more frames")]
    Exhausted,
}
