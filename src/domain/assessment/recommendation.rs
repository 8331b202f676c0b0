//! Deterministic recommendation generation.

use crate::domain::emotion::EmotionLabel;

use super::SeverityTier;

/// Variability above this appends mood-tracking guidance.
pub const HIGH_VARIABILITY_THRESHOLD: f64 = 0.3;

/// Variability below this appends expressive-activity guidance.
pub const LOW_VARIABILITY_THRESHOLD: f64 = 0.1;

/// Pure generator: same inputs, same ordered output, no I/O.
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Base recommendations for a dominant emotion.
    ///
    /// Every label maps to at least one entry, so the output is never empty
    /// even in the neutral-fallback (no frames) case.
    fn base_for(dominant: EmotionLabel) -> &'static [&'static str] {
        match dominant {
            EmotionLabel::Happy => &[
                "Continue activities that bring you joy, such as hobbies and visits with loved ones",
                "Share your good moments with family or friends",
            ],
            EmotionLabel::Sad => &[
                "Reach out to a family member, friend, or caregiver for a chat",
                "A short daily walk outdoors can gently lift your mood",
                "Consider joining a social activity in your community",
            ],
            EmotionLabel::Angry => &[
                "Try slow breathing: in for four counts, out for six",
                "Step away from frustrating situations and return to them later",
            ],
            EmotionLabel::Fearful => &[
                "Grounding exercises can help: name five things you can see around you",
                "Talk about your worries with someone you trust",
            ],
            EmotionLabel::Disgusted => &[
                "A change of scenery or a pleasant activity can help reset your mood",
                "Note what triggered the feeling so you can discuss it later",
            ],
            EmotionLabel::Surprised => &[
                "Take a moment to settle before making any decisions",
                "A familiar routine can help you feel steady again",
            ],
            EmotionLabel::Neutral => &[
                "Maintain your daily routine and regular sleep schedule",
                "Stay socially connected with family and friends",
            ],
        }
    }

    /// Generates the ordered recommendation list.
    ///
    /// Emotion-based entries first, then variability appendices. Severity
    /// does not gate the emotion entries; its narrative sentence is added by
    /// the report assembler.
    pub fn generate(
        dominant: EmotionLabel,
        variability: f64,
        _severity: SeverityTier,
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = Self::base_for(dominant)
            .iter()
            .map(|s| s.to_string())
            .collect();

        if variability > HIGH_VARIABILITY_THRESHOLD {
            recommendations.push(
                "Your emotions varied quite a bit during the assessment; keeping a simple daily mood diary can help you and your doctor spot patterns"
                    .to_string(),
            );
        } else if variability < LOW_VARIABILITY_THRESHOLD {
            recommendations.push(
                "Your expression stayed very steady; expressive activities such as music, reminiscing over photos, or conversation can be energizing"
                    .to_string(),
            );
        }

        recommendations
    }
}
