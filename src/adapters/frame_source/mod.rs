//! Frame source adapters.

mod scripted;

pub use scripted::ScriptedFrameSource;
