//! Adapters - implementations of the ports.
//!
//! - `frame_source` - scripted frame source for tests and demos
//! - `store` - in-memory session store
//! - `events` - in-memory event bus for tests
//! - `export` - markdown and JSON report renderers

pub mod events;
pub mod export;
pub mod frame_source;
pub mod store;

pub use events::InMemoryEventBus;
pub use export::{JsonReportRenderer, MarkdownReportRenderer};
pub use frame_source::ScriptedFrameSource;
pub use store::InMemorySessionStore;
