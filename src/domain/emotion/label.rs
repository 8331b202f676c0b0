//! Closed set of facial emotion labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The fixed set of emotion labels emitted by the frame classifier.
///
/// Declaration order doubles as the dominant-emotion tie-break priority:
/// when two labels carry the same averaged value, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgusted,
    Surprised,
    Neutral,
}

impl EmotionLabel {
    /// All labels in tie-break priority order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Fearful,
        EmotionLabel::Disgusted,
        EmotionLabel::Surprised,
        EmotionLabel::Neutral,
    ];

    /// Number of labels in the closed set.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the lowercase wire name for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Fearful => "fearful",
            EmotionLabel::Disgusted => "disgusted",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(EmotionLabel::Happy),
            "sad" => Ok(EmotionLabel::Sad),
            "angry" => Ok(EmotionLabel::Angry),
            "fearful" => Ok(EmotionLabel::Fearful),
            "disgusted" => Ok(EmotionLabel::Disgusted),
            "surprised" => Ok(EmotionLabel::Surprised),
            "neutral" => Ok(EmotionLabel::Neutral),
            other => Err(ValidationError::invalid_format(
                "emotion_label",
                format!("unknown label '{}'", other),
            )),
        }
    }
}
