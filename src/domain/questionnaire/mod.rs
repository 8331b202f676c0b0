//! Questionnaire module - symptom questions and the answering engine.

mod catalog;
mod engine;
mod errors;
mod question;

pub use catalog::{default_questions, questions_from_yaml};
pub use engine::{AnswerOutcome, QuestionAnswer, QuestionnaireEngine};
pub use errors::QuestionnaireError;
pub use question::{AnswerOption, AnswerWeight, Question};
