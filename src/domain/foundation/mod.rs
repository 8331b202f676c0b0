//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and the event
//! infrastructure that form the vocabulary of the CareSense domain.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{QuestionId, SessionId};
pub use timestamp::Timestamp;
