//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FrameSource` - the facial-expression classifier capability
//! - `SessionStore` - holder for in-flight assessment sessions
//! - `EventPublisher` - publishing of assessment domain events
//! - `ReportRenderer` - rendering a report into a portable textual form

mod event_publisher;
mod frame_source;
mod report_renderer;
mod session_store;

pub use event_publisher::EventPublisher;
pub use frame_source::{FrameSource, FrameSourceError};
pub use report_renderer::{RenderError, ReportRenderer};
pub use session_store::{SessionMutation, SessionStore};
