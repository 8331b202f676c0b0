//! Questionnaire answering engine.

use serde::{Deserialize, Serialize};

use crate::domain::emotion::EmotionVector;
use crate::domain::foundation::{QuestionId, Timestamp};

use super::{AnswerWeight, Question, QuestionnaireError};

/// One recorded answer, immutable once created.
///
/// Captures the aggregator's smoothed estimate at the moment of the answer,
/// tying the facial stream to the questionnaire timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    question_id: QuestionId,
    question_index: usize,
    weight: AnswerWeight,
    emotions_at_answer: EmotionVector,
    answered_at: Timestamp,
}

impl QuestionAnswer {
    /// Returns the answered question's ID.
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    /// Returns the answered question's position.
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Returns the selected weight.
    pub fn weight(&self) -> AnswerWeight {
        self.weight
    }

    /// Returns the smoothed emotion estimate at answer time.
    pub fn emotions_at_answer(&self) -> &EmotionVector {
        &self.emotions_at_answer
    }

    /// Returns when the answer was recorded.
    pub fn answered_at(&self) -> &Timestamp {
        &self.answered_at
    }
}

/// Result of a successful `answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// True when the last question was just answered.
    pub done: bool,
    /// Index of the next question, or None when done.
    pub next_index: Option<usize>,
}

/// Fixed ordered question sequence with a strict answer cursor.
///
/// The engine only accumulates weights; mapping the total score to a
/// severity tier is the classifier's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireEngine {
    questions: Vec<Question>,
    cursor: usize,
    answers: Vec<QuestionAnswer>,
}

impl QuestionnaireEngine {
    /// Creates an engine over an ordered question list.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the list is empty
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        if questions.is_empty() {
            return Err(QuestionnaireError::ValidationFailed(
                "questionnaire needs at least one question".to_string(),
            ));
        }
        Ok(Self {
            questions,
            cursor: 0,
            answers: Vec::new(),
        })
    }

    /// Records an answer for the question at `index`.
    ///
    /// # Errors
    ///
    /// - `OutOfSequenceAnswer` if `index` is not the current cursor; nothing
    ///   is recorded
    /// - `AlreadyComplete` if every question is answered
    /// - `UnknownWeight` if no option on the question carries `weight`
    pub fn answer(
        &mut self,
        index: usize,
        weight: AnswerWeight,
        emotions_at_answer: EmotionVector,
    ) -> Result<AnswerOutcome, QuestionnaireError> {
        if self.is_complete() {
            return Err(QuestionnaireError::AlreadyComplete);
        }
        if index != self.cursor {
            return Err(QuestionnaireError::out_of_sequence(self.cursor, index));
        }

        let question = &self.questions[index];
        if !question.has_option_with_weight(weight) {
            return Err(QuestionnaireError::unknown_weight(index, weight.value()));
        }

        self.answers.push(QuestionAnswer {
            question_id: question.id().clone(),
            question_index: index,
            weight,
            emotions_at_answer,
            answered_at: Timestamp::now(),
        });
        self.cursor += 1;

        let done = self.cursor == self.questions.len();
        Ok(AnswerOutcome {
            done,
            next_index: if done { None } else { Some(self.cursor) },
        })
    }

    /// Returns the ordered question list.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns all recorded answers, in question order.
    pub fn answers(&self) -> &[QuestionAnswer] {
        &self.answers
    }

    /// Index of the question awaiting an answer, or None when complete.
    pub fn current_index(&self) -> Option<usize> {
        if self.is_complete() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// True when every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.questions.len()
    }

    /// Sum of all recorded answer weights.
    pub fn total_score(&self) -> u32 {
        self.answers.iter().map(|a| u32::from(a.weight().value())).sum()
    }

    /// Discards all answers and rewinds the cursor.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.answers.clear();
    }
}
