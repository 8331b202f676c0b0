//! Built-in symptom question catalog and YAML loading.
//!
//! The questionnaire definition is configuration, not computation: callers
//! either take the built-in ten-question set or supply their own catalog as
//! YAML. Both paths produce validated [`Question`] values.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::domain::foundation::QuestionId;

use super::{AnswerOption, AnswerWeight, Question, QuestionnaireError};

/// The standard frequency options used by every built-in question.
const STANDARD_OPTIONS: [(&str, u8); 4] = [
    ("Not at all", 0),
    ("Several days", 1),
    ("More than half the days", 2),
    ("Nearly every day", 3),
];

/// The built-in question prompts, in presentation order.
const DEFAULT_PROMPTS: [(&str, &str); 10] = [
    ("q01-interest", "Little interest or pleasure in doing things?"),
    ("q02-mood", "Feeling down, depressed, or hopeless?"),
    ("q03-sleep", "Trouble falling or staying asleep, or sleeping too much?"),
    ("q04-energy", "Feeling tired or having little energy?"),
    ("q05-appetite", "Poor appetite or overeating?"),
    ("q06-self-worth", "Feeling bad about yourself, or that you are a failure?"),
    ("q07-concentration", "Trouble concentrating on things like reading or television?"),
    ("q08-restlessness", "Moving or speaking noticeably slower, or being fidgety and restless?"),
    ("q09-isolation", "Avoiding company or feeling cut off from family and friends?"),
    ("q10-worry", "Feeling nervous, anxious, or constantly worried?"),
];

static DEFAULT_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    DEFAULT_PROMPTS
        .iter()
        .map(|(id, prompt)| {
            let options = STANDARD_OPTIONS
                .iter()
                .map(|(text, weight)| {
                    AnswerOption::new(
                        *text,
                        AnswerWeight::try_new(*weight).expect("built-in weight in range"),
                    )
                    .expect("built-in option text is non-empty")
                })
                .collect();
            Question::new(
                QuestionId::new(*id).expect("built-in id is non-empty"),
                *prompt,
                options,
            )
            .expect("built-in question is valid")
        })
        .collect()
});

/// Returns the built-in ten-question symptom catalog.
pub fn default_questions() -> Vec<Question> {
    DEFAULT_QUESTIONS.clone()
}

/// Raw YAML shape for a catalog entry.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    id: String,
    prompt: String,
    options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    text: String,
    weight: u8,
}

/// Parses and validates a question catalog from YAML.
///
/// Expected shape:
///
/// ```yaml
/// - id: q01-interest
///   prompt: "Little interest or pleasure in doing things?"
///   options:
///     - { text: "Not at all", weight: 0 }
///     - { text: "Nearly every day", weight: 3 }
/// ```
///
/// # Errors
///
/// - `CatalogParse` if the YAML is malformed
/// - `ValidationFailed` if any entry fails question validation
pub fn questions_from_yaml(yaml: &str) -> Result<Vec<Question>, QuestionnaireError> {
    let raw: Vec<RawQuestion> =
        serde_yaml::from_str(yaml).map_err(|e| QuestionnaireError::CatalogParse(e.to_string()))?;

    if raw.is_empty() {
        return Err(QuestionnaireError::ValidationFailed(
            "catalog contains no questions".to_string(),
        ));
    }

    raw.into_iter()
        .map(|q| {
            let options = q
                .options
                .into_iter()
                .map(|o| Ok(AnswerOption::new(o.text, AnswerWeight::try_new(o.weight)?)?))
                .collect::<Result<Vec<_>, QuestionnaireError>>()?;
            Ok(Question::new(QuestionId::new(q.id)?, q.prompt, options)?)
        })
        .collect()
}
