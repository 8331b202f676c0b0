//! Application layer - Commands, Handlers, and the capture loop.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate session state; the capture loop drives the
//! fixed-interval frame path.

mod capture;
pub mod handlers;

pub use capture::{CaptureHandle, CaptureLoop, DEFAULT_FRAME_INTERVAL};
pub use handlers::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult, StartAssessmentCommand,
    StartAssessmentHandler, StartAssessmentResult,
};
