//! Severity tier classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete severity tiers, ordered from least to most severe.
///
/// Derived deterministically from the total questionnaire score via fixed
/// integer breakpoints; boundary values belong to the lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityTier {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl SeverityTier {
    /// Classifies a total questionnaire score.
    ///
    /// Total over all scores; no error cases.
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            0..=5 => SeverityTier::Minimal,
            6..=10 => SeverityTier::Mild,
            11..=15 => SeverityTier::Moderate,
            16..=20 => SeverityTier::ModeratelySevere,
            _ => SeverityTier::Severe,
        }
    }

    /// Returns the display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Minimal => "minimal",
            SeverityTier::Mild => "mild",
            SeverityTier::Moderate => "moderate",
            SeverityTier::ModeratelySevere => "moderately-severe",
            SeverityTier::Severe => "severe",
        }
    }

    /// Human-readable narrative sentence for the report.
    pub fn narrative(&self) -> &'static str {
        match self {
            SeverityTier::Minimal => {
                "Your responses suggest minimal symptoms. Keep up your current routines and stay connected with the people around you."
            }
            SeverityTier::Mild => {
                "Your responses suggest mild symptoms. Gentle daily activity and regular social contact can help; consider mentioning this at your next check-up."
            }
            SeverityTier::Moderate => {
                "Your responses suggest moderate symptoms. We encourage you to discuss how you have been feeling with your doctor or a counselor."
            }
            SeverityTier::ModeratelySevere => {
                "Your responses suggest moderately severe symptoms. Please reach out to a healthcare professional soon to talk through these results."
            }
            SeverityTier::Severe => {
                "Your responses suggest severe symptoms. Please contact a healthcare professional promptly, or ask a family member or caregiver to help you arrange a visit."
            }
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
