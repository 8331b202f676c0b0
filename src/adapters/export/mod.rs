//! Report rendering adapters.

mod json;
mod markdown;

pub use json::JsonReportRenderer;
pub use markdown::MarkdownReportRenderer;
