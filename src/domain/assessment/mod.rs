//! Assessment module - the session aggregate and report pipeline.
//!
//! - `session` - AssessmentSession aggregate (frame ingest + answer paths)
//! - `severity` - total-score to severity tier classification
//! - `recommendation` - deterministic recommendation generation
//! - `report` - read-only report assembly
//! - `events` - assessment lifecycle domain events

mod errors;
mod events;
mod recommendation;
mod report;
mod session;
mod severity;

pub use errors::AssessmentError;
pub use events::{AnswerRecorded, AssessmentCompleted, AssessmentStarted, CaptureStopped};
pub use recommendation::{
    RecommendationGenerator, HIGH_VARIABILITY_THRESHOLD, LOW_VARIABILITY_THRESHOLD,
};
pub use report::{Report, ReportAssembler};
pub use session::AssessmentSession;
pub use severity::SeverityTier;
