//! Question and answer-option value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{QuestionId, ValidationError};

/// Maximum weight an answer option may carry.
pub const MAX_ANSWER_WEIGHT: u8 = 3;

/// Integer answer weight, constrained to 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerWeight(u8);

impl AnswerWeight {
    /// Zero weight ("not at all").
    pub const ZERO: Self = Self(0);

    /// Maximum weight ("nearly every day").
    pub const MAX: Self = Self(MAX_ANSWER_WEIGHT);

    /// Creates a weight, rejecting values above the maximum.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > MAX_ANSWER_WEIGHT {
            return Err(ValidationError::out_of_range(
                "weight",
                0.0,
                f64::from(MAX_ANSWER_WEIGHT),
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for AnswerWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable answer with its display text and weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    text: String,
    weight: AnswerWeight,
}

impl AnswerOption {
    /// Creates an option, rejecting empty text.
    pub fn new(text: impl Into<String>, weight: AnswerWeight) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("option_text"));
        }
        Ok(Self { text, weight })
    }

    /// Returns the display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the weight.
    pub fn weight(&self) -> AnswerWeight {
        self.weight
    }
}

/// A symptom question: prompt plus a fixed ordered list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the prompt is empty
    /// - `InvalidFormat` if fewer than two options are supplied
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        if options.len() < 2 {
            return Err(ValidationError::invalid_format(
                "options",
                "a question needs at least two answer options",
            ));
        }
        Ok(Self { id, prompt, options })
    }

    /// Returns the question ID.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Returns the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the ordered answer options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Checks whether any option carries the given weight.
    pub fn has_option_with_weight(&self, weight: AnswerWeight) -> bool {
        self.options.iter().any(|o| o.weight() == weight)
    }
}
