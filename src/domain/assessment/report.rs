//! Final assessment report and its assembler.

use serde::{Deserialize, Serialize};

use crate::domain::emotion::{EmotionLabel, EmotionVector};
use crate::domain::foundation::{SessionId, Timestamp};

use super::{AssessmentSession, RecommendationGenerator, SeverityTier};

/// Immutable final report for one assessment run.
///
/// The only entity intended for export or persistence by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    session_id: SessionId,
    average_emotions: EmotionVector,
    dominant_emotion: EmotionLabel,
    emotional_variability: f64,
    total_score: u32,
    severity: SeverityTier,
    recommendations: Vec<String>,
    generated_at: Timestamp,
}

impl Report {
    /// Returns the originating session's ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Per-label mean over the frame history.
    pub fn average_emotions(&self) -> &EmotionVector {
        &self.average_emotions
    }

    /// Label with the maximum averaged value.
    pub fn dominant_emotion(&self) -> EmotionLabel {
        self.dominant_emotion
    }

    /// Mean frame-to-frame total variation.
    pub fn emotional_variability(&self) -> f64 {
        self.emotional_variability
    }

    /// Sum of all answered weights.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Severity tier classified from the total score.
    pub fn severity(&self) -> SeverityTier {
        self.severity
    }

    /// Ordered, human-readable recommendations.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// When the report was assembled.
    pub fn generated_at(&self) -> &Timestamp {
        &self.generated_at
    }
}

/// Read-only assembler from session state to a final report.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Assembles a report from the session's current state.
    ///
    /// Never mutates the session; an empty frame history is a defined
    /// degenerate case (neutral fallback), not an error. The severity
    /// narrative sentence is appended as the final recommendation entry.
    pub fn assemble(session: &AssessmentSession) -> Report {
        let average_emotions = session.average_emotions();
        let dominant_emotion = average_emotions.dominant();
        let emotional_variability = session.emotional_variability();
        let total_score = session.total_score();
        let severity = SeverityTier::from_score(total_score);

        let mut recommendations = RecommendationGenerator::generate(
            dominant_emotion,
            emotional_variability,
            severity,
        );
        recommendations.push(severity.narrative().to_string());

        Report {
            session_id: *session.id(),
            average_emotions,
            dominant_emotion,
            emotional_variability,
            total_score,
            severity,
            recommendations,
            generated_at: Timestamp::now(),
        }
    }
}
