//! ReportRenderer port - rendering a report into a portable textual form.
//!
//! The pipeline itself exposes no file or network format; rasterizing to a
//! document format (e.g., PDF) stays the caller's concern. This port covers
//! the textual step callers feed into such exporters.

use thiserror::Error;

use crate::domain::assessment::Report;

/// Port for rendering a finalized report.
pub trait ReportRenderer: Send + Sync {
    /// Renders the report to its textual representation.
    fn render(&self, report: &Report) -> Result<String, RenderError>;
}

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rendering failed: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ReportRenderer) {}
}
