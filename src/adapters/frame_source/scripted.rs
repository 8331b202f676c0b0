//! Scripted frame source for testing and demos.
//!
//! Replays a pre-configured sequence of frames and injected errors,
//! allowing the pipeline to run without a camera or expression model.
//!
//! # Example
//!
//! ```ignore
//! let source = ScriptedFrameSource::new()
//!     .with_frame(EmotionVector::zero().with(EmotionLabel::Happy, 1.0))
//!     .with_error(FrameSourceError::CameraUnavailable("gone".into()));
//!
//! let frame = source.next_frame().await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::emotion::EmotionVector;
use crate::ports::{FrameSource, FrameSourceError};

/// Scripted implementation of the FrameSource port.
///
/// Responses are consumed in order; once the script runs out, every
/// subsequent call yields `Exhausted` (or an optional repeating frame).
#[derive(Debug, Clone)]
pub struct ScriptedFrameSource {
    script: Arc<Mutex<VecDeque<Result<EmotionVector, FrameSourceError>>>>,
    /// Frame repeated forever after the script is exhausted, if set.
    fallback: Option<EmotionVector>,
    /// Simulated classifier latency per call.
    delay: Duration,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedFrameSource {
    /// Creates an empty scripted source.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: None,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Appends a frame to the script.
    pub fn with_frame(self, frame: EmotionVector) -> Self {
        self.script
            .lock()
            .expect("ScriptedFrameSource: script lock poisoned")
            .push_back(Ok(frame));
        self
    }

    /// Appends several copies of a frame to the script.
    pub fn with_frames(self, frame: EmotionVector, count: usize) -> Self {
        {
            let mut script = self
                .script
                .lock()
                .expect("ScriptedFrameSource: script lock poisoned");
            for _ in 0..count {
                script.push_back(Ok(frame));
            }
        }
        self
    }

    /// Appends an error to the script.
    pub fn with_error(self, error: FrameSourceError) -> Self {
        self.script
            .lock()
            .expect("ScriptedFrameSource: script lock poisoned")
            .push_back(Err(error));
        self
    }

    /// Repeats `frame` forever once the script is exhausted.
    pub fn with_repeating(mut self, frame: EmotionVector) -> Self {
        self.fallback = Some(frame);
        self
    }

    /// Adds simulated latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of `next_frame` calls so far.
    pub fn call_count(&self) -> usize {
        *self
            .calls
            .lock()
            .expect("ScriptedFrameSource: calls lock poisoned")
    }

    /// Remaining scripted responses.
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .expect("ScriptedFrameSource: script lock poisoned")
            .len()
    }
}

impl Default for ScriptedFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameSource for ScriptedFrameSource {
    async fn next_frame(&self) -> Result<EmotionVector, FrameSourceError> {
        // Counted at entry so callers can observe an in-flight pull while
        // the simulated latency elapses.
        *self
            .calls
            .lock()
            .expect("ScriptedFrameSource: calls lock poisoned") += 1;

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self
            .script
            .lock()
            .expect("ScriptedFrameSource: script lock poisoned")
            .pop_front();

        match next {
            Some(response) => response,
            None => match self.fallback {
                Some(frame) => Ok(frame),
                None => Err(FrameSourceError::Exhausted),
            },
        }
    }
}
