//! Command handlers for the assessment lifecycle.

mod complete_assessment;
mod record_answer;
mod start_assessment;

pub use complete_assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use start_assessment::{
    StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
};
