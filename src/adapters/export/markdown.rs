//! Template-based markdown report renderer.
//!
//! Produces the textual document a caller hands to a PDF/print exporter.
//! Uses a fixed section structure mirroring the on-screen report.

use crate::domain::assessment::Report;
use crate::domain::emotion::EmotionLabel;
use crate::ports::{RenderError, ReportRenderer};

/// Markdown implementation of the ReportRenderer port.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    /// Creates a new markdown renderer.
    pub fn new() -> Self {
        Self
    }

    fn emotion_table(report: &Report) -> String {
        let mut section = String::from("| Emotion | Average |\n|---|---|\n");
        for label in EmotionLabel::ALL {
            let value = report.average_emotions().get(label);
            section.push_str(&format!("| {} | {:.3} |\n", label, value));
        }
        section
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let mut doc = String::from("# Wellbeing Assessment Report\n\n");

        doc.push_str(&format!("Session: `{}`\n\n", report.session_id()));
        doc.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at().as_datetime().to_rfc3339()
        ));

        doc.push_str("## Summary\n\n");
        doc.push_str(&format!(
            "- Severity: **{}** (total score {})\n",
            report.severity(),
            report.total_score()
        ));
        doc.push_str(&format!(
            "- Dominant emotion: **{}**\n",
            report.dominant_emotion()
        ));
        doc.push_str(&format!(
            "- Emotional variability: {:.3}\n\n",
            report.emotional_variability()
        ));

        doc.push_str("## Average Emotions\n\n");
        doc.push_str(&Self::emotion_table(report));
        doc.push('\n');

        doc.push_str("## Recommendations\n\n");
        for recommendation in report.recommendations() {
            doc.push_str(&format!("- {}\n", recommendation));
        }

        Ok(doc)
    }
}
