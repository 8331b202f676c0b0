//! JSON report renderer.

use crate::domain::assessment::Report;
use crate::ports::{RenderError, ReportRenderer};

/// Pretty-printed JSON implementation of the ReportRenderer port.
#[derive(Debug, Clone, Default)]
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    /// Creates a new JSON renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &Report) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AssessmentSession;
    use crate::domain::foundation::SessionId;
    use crate::domain::questionnaire::default_questions;

    #[test]
    fn renders_parseable_json() {
        let session = AssessmentSession::new(SessionId::new(), default_questions()).unwrap();
        let report = session.assemble_report();

        let json = JsonReportRenderer::new().render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["severity"], "minimal");
        assert_eq!(value["dominant_emotion"], "neutral");
    }
}
