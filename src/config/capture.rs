//! Frame capture configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Shortest interval at which frame ingestion is allowed to run.
pub const MIN_FRAME_INTERVAL_MS: u64 = 100;

/// Capture loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Milliseconds between frame pulls
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Stop the capture loop permanently when the frame source errors
    #[serde(default = "default_stop_on_source_error")]
    pub stop_on_source_error: bool,
}

impl CaptureConfig {
    /// Tick period as a [`Duration`]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Validate capture configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frame_interval_ms < MIN_FRAME_INTERVAL_MS {
            return Err(ValidationError::FrameIntervalTooShort {
                min: MIN_FRAME_INTERVAL_MS,
                actual: self.frame_interval_ms,
            });
        }
        Ok(())
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            stop_on_source_error: default_stop_on_source_error(),
        }
    }
}

fn default_frame_interval_ms() -> u64 {
    1000
}

fn default_stop_on_source_error() -> bool {
    true
}
