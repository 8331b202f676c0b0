//! Fixed-interval frame capture loop.
//!
//! Separates scheduling from aggregation: the loop's only job is to pull a
//! frame from the [`FrameSource`] on each tick and hand it to the stored
//! session. The aggregator stays synchronous and testable without timers.
//!
//! A frame-source error triggers the local recovery path (neutral fallback,
//! capture disabled) and ends the loop; it is never fatal to the pipeline.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::CaptureConfig;
use crate::domain::assessment::CaptureStopped;
use crate::domain::foundation::{EventId, SerializableDomainEvent, SessionId, Timestamp};
use crate::ports::{EventPublisher, FrameSource, SessionStore};

/// Default tick period, matching the reference capture cadence.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_secs(1);

/// Cancellable periodic ticker feeding frames into a session.
pub struct CaptureLoop {
    source: Arc<dyn FrameSource>,
    store: Arc<dyn SessionStore>,
    events: Arc<dyn EventPublisher>,
    interval: Duration,
    stop_on_source_error: bool,
}

/// Handle to a running capture loop.
pub struct CaptureHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl CaptureHandle {
    /// Stops the loop and waits for it to finish.
    ///
    /// Already-accumulated history is untouched; only further ingestion
    /// halts.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }

    /// True once the loop has exited on its own.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl CaptureLoop {
    /// Creates a loop with the default one-second cadence.
    pub fn new(
        source: Arc<dyn FrameSource>,
        store: Arc<dyn SessionStore>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            source,
            store,
            events,
            interval: DEFAULT_FRAME_INTERVAL,
            stop_on_source_error: true,
        }
    }

    /// Overrides the tick period.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Applies the configured cadence and error policy.
    pub fn with_config(mut self, config: &CaptureConfig) -> Self {
        self.interval = config.frame_interval();
        self.stop_on_source_error = config.stop_on_source_error;
        self
    }

    /// Spawns the loop for `session_id`.
    ///
    /// The loop exits when: the session stops recording (last answer or
    /// manual stop), the frame source fails, the session disappears from
    /// the store, or the handle is stopped.
    pub fn spawn(self, session_id: SessionId) -> CaptureHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let Self {
            source,
            store,
            events,
            interval,
            stop_on_source_error,
        } = self;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so frames arrive on
            // the cadence, not at spawn time.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = shutdown_rx.changed() => {
                        tracing::debug!(session_id = %session_id, "capture loop stopped");
                        return;
                    }
                }

                // Cheap pre-check so a finished session never polls the source.
                match store.find(&session_id).await {
                    Ok(Some(session)) if session.is_recording() => {}
                    Ok(Some(_)) => {
                        tracing::debug!(session_id = %session_id, "recording off, capture loop exiting");
                        return;
                    }
                    Ok(None) => {
                        tracing::warn!(session_id = %session_id, "session gone, capture loop exiting");
                        return;
                    }
                    Err(err) => {
                        tracing::error!(session_id = %session_id, error = %err, "session store error");
                        return;
                    }
                }

                match source.next_frame().await {
                    Ok(frame) => {
                        // Atomic update: an answer recorded while the frame was
                        // in flight must survive this write.
                        let applied = store
                            .update(
                                &session_id,
                                Box::new(move |session| {
                                    session.ingest_frame(&frame);
                                }),
                            )
                            .await;
                        match applied {
                            Ok(Some(_)) => {}
                            Ok(None) => {
                                tracing::warn!(session_id = %session_id, "session gone, capture loop exiting");
                                return;
                            }
                            Err(err) => {
                                tracing::error!(session_id = %session_id, error = %err, "failed to save session");
                                return;
                            }
                        }
                    }
                    Err(err) => {
                        if !stop_on_source_error {
                            tracing::warn!(
                                session_id = %session_id,
                                error = %err,
                                "frame source error, skipping tick"
                            );
                            continue;
                        }
                        tracing::warn!(
                            session_id = %session_id,
                            error = %err,
                            "frame source failed, applying neutral fallback"
                        );
                        let updated = match store
                            .update(
                                &session_id,
                                Box::new(|session| session.mark_frame_source_failed()),
                            )
                            .await
                        {
                            Ok(updated) => updated,
                            Err(err) => {
                                tracing::error!(session_id = %session_id, error = %err, "failed to save session");
                                None
                            }
                        };
                        let frame_count = updated.map(|s| s.history().len()).unwrap_or(0);
                        let stopped = CaptureStopped {
                            event_id: EventId::new(),
                            session_id,
                            frame_count,
                            source_failed: true,
                            stopped_at: Timestamp::now(),
                        };
                        if let Err(err) = events.publish(stopped.to_envelope()).await {
                            tracing::error!(session_id = %session_id, error = %err, "failed to publish capture stop");
                        }
                        return;
                    }
                }
            }
        });

        CaptureHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}
