//! Emotion probability vector value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::EmotionLabel;

/// Tolerance used when checking that a vector sums to 1.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// A non-negative value per emotion label.
///
/// Raw classifier output need not sum to 1; `normalized()` rescales it.
/// The label set is closed, so a missing or extra label is a compile
/// error rather than a silently partial map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionVector {
    #[serde(default)]
    pub happy: f64,
    #[serde(default)]
    pub sad: f64,
    #[serde(default)]
    pub angry: f64,
    #[serde(default)]
    pub fearful: f64,
    #[serde(default)]
    pub disgusted: f64,
    #[serde(default)]
    pub surprised: f64,
    #[serde(default)]
    pub neutral: f64,
}

impl EmotionVector {
    /// The fallback vector: all weight on `neutral`.
    pub fn neutral() -> Self {
        Self {
            neutral: 1.0,
            ..Self::zero()
        }
    }

    /// The all-zero vector.
    pub fn zero() -> Self {
        Self {
            happy: 0.0,
            sad: 0.0,
            angry: 0.0,
            fearful: 0.0,
            disgusted: 0.0,
            surprised: 0.0,
            neutral: 0.0,
        }
    }

    /// Builder-style setter for a single label's value.
    pub fn with(mut self, label: EmotionLabel, value: f64) -> Self {
        *self.get_mut(label) = value;
        self
    }

    /// Returns the value for a label.
    pub fn get(&self, label: EmotionLabel) -> f64 {
        match label {
            EmotionLabel::Happy => self.happy,
            EmotionLabel::Sad => self.sad,
            EmotionLabel::Angry => self.angry,
            EmotionLabel::Fearful => self.fearful,
            EmotionLabel::Disgusted => self.disgusted,
            EmotionLabel::Surprised => self.surprised,
            EmotionLabel::Neutral => self.neutral,
        }
    }

    fn get_mut(&mut self, label: EmotionLabel) -> &mut f64 {
        match label {
            EmotionLabel::Happy => &mut self.happy,
            EmotionLabel::Sad => &mut self.sad,
            EmotionLabel::Angry => &mut self.angry,
            EmotionLabel::Fearful => &mut self.fearful,
            EmotionLabel::Disgusted => &mut self.disgusted,
            EmotionLabel::Surprised => &mut self.surprised,
            EmotionLabel::Neutral => &mut self.neutral,
        }
    }

    /// Validates that every value is finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for label in EmotionLabel::ALL {
            let value = self.get(label);
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::out_of_range(
                    label.as_str(),
                    0.0,
                    f64::INFINITY,
                    value,
                ));
            }
        }
        Ok(())
    }

    /// Sum of all label values.
    pub fn sum(&self) -> f64 {
        EmotionLabel::ALL.iter().map(|&l| self.get(l)).sum()
    }

    /// Rescales so that values sum to 1.
    ///
    /// An all-zero (or degenerate) vector normalizes to the neutral
    /// fallback so the result is always a valid distribution.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total <= NORMALIZATION_TOLERANCE {
            return Self::neutral();
        }
        self.scaled(1.0 / total)
    }

    /// Checks that the vector is non-negative and sums to 1 within tolerance.
    pub fn is_distribution(&self, tolerance: f64) -> bool {
        EmotionLabel::ALL.iter().all(|&l| self.get(l) >= 0.0)
            && (self.sum() - 1.0).abs() <= tolerance
    }

    /// Per-label weighted blend: `self * (1 - alpha) + newer * alpha`.
    pub fn blend(&self, newer: &Self, alpha: f64) -> Self {
        let mut out = Self::zero();
        for label in EmotionLabel::ALL {
            *out.get_mut(label) = self.get(label) * (1.0 - alpha) + newer.get(label) * alpha;
        }
        out
    }

    /// Per-label scaling.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = Self::zero();
        for label in EmotionLabel::ALL {
            *out.get_mut(label) = self.get(label) * factor;
        }
        out
    }

    /// Per-label sum.
    pub fn plus(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        for label in EmotionLabel::ALL {
            *out.get_mut(label) = self.get(label) + other.get(label);
        }
        out
    }

    /// Total-variation distance: sum over labels of `|a - b|`.
    ///
    /// Measures how much the full distribution moves between two frames.
    pub fn total_variation(&self, other: &Self) -> f64 {
        EmotionLabel::ALL
            .iter()
            .map(|&l| (self.get(l) - other.get(l)).abs())
            .sum()
    }

    /// Label with the maximum value.
    ///
    /// Exact ties resolve to the earlier label in declaration order, so the
    /// result is deterministic regardless of how the vector was built.
    pub fn dominant(&self) -> EmotionLabel {
        let mut best = EmotionLabel::ALL[0];
        let mut best_value = self.get(best);
        for &label in EmotionLabel::ALL.iter().skip(1) {
            let value = self.get(label);
            if value > best_value {
                best = label;
                best_value = value;
            }
        }
        best
    }
}
