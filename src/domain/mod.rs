//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `emotion` - Emotion labels, probability vectors, and the smoothing aggregator
//! - `questionnaire` - Symptom questions, the answering engine, and the catalog
//! - `assessment` - Assessment session aggregate, severity, recommendations, report

pub mod assessment;
pub mod emotion;
pub mod foundation;
pub mod questionnaire;
