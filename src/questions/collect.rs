//! Ask each question in turn and fold the answers into one text block.

use std::fmt;

use tracing::{debug, warn};

use super::input::{normalize, QuestionBatch, RawQuestionInput};
use crate::error::Result;
use crate::prompt::{PromptReply, Prompter};

/// Marker written in place of an answer the operator did not give.
pub const NO_ANSWER: &str = "(no answer)";

/// Display prefix used when only a single question is asked.
const SINGLE_QUESTION_PREFIX: &str = "[Agent] ";

/// The operator's response to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Given(String),
    /// The prompt was interrupted or input was closed.
    NotObtained,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Given(text) => f.write_str(text),
            Self::NotObtained => f.write_str(NO_ANSWER),
        }
    }
}

/// One question paired with its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: Answer,
}

impl AnswerRecord {
    fn render(&self) -> String {
        format!("{}\n{}\n", self.question, self.answer)
    }
}

/// Ask every question in order, blocking on each.
///
/// An interrupted prompt yields [`Answer::NotObtained`] for that question and
/// collection moves on. Console I/O failures abort the batch.
pub fn collect_answers(
    batch: &QuestionBatch,
    prompter: &dyn Prompter,
) -> Result<Vec<AnswerRecord>> {
    let single = batch.len() == 1;
    let mut records = Vec::with_capacity(batch.len());

    for (index, question) in batch.iter().enumerate() {
        let shown = if single {
            format!("{SINGLE_QUESTION_PREFIX}{question}")
        } else {
            question.clone()
        };

        let answer = match prompter.ask(&shown)? {
            PromptReply::Answered(text) => Answer::Given(text),
            PromptReply::Interrupted => {
                warn!(index, question = %question, "prompt interrupted, recording no answer");
                Answer::NotObtained
            }
        };
        records.push(AnswerRecord {
            question: question.clone(),
            answer,
        });
    }

    debug!(count = records.len(), "answers collected");
    Ok(records)
}

/// Render records as `"<question>\n<answer>\n"` blocks joined by newlines, trimmed.
pub fn format_answers(records: &[AnswerRecord]) -> String {
    records
        .iter()
        .map(AnswerRecord::render)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Normalize `input`, ask each question, and return the formatted answers.
pub fn extract_and_collect(
    input: impl Into<RawQuestionInput>,
    prompter: &dyn Prompter,
) -> Result<String> {
    let batch = normalize(input.into())?;
    let records = collect_answers(&batch, prompter)?;
    Ok(format_answers(&records))
}

/// Hand-off marker: returns the gathered objective and preferences unchanged.
///
/// Calling this is the signal; the data passes through untouched.
pub fn finalize(objective_and_preferences: String) -> String {
    objective_and_preferences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn single_question_gets_agent_prefix() {
        let prompter = ScriptedPrompter::new(["aisle"]);
        let batch = QuestionBatch::new(["Window or aisle seat?"]).unwrap();

        collect_answers(&batch, &prompter).unwrap();

        assert_eq!(prompter.asked(), vec!["[Agent] Window or aisle seat?"]);
    }

    #[test]
    fn multiple_questions_are_shown_verbatim() {
        let prompter = ScriptedPrompter::new(["a", "b"]);
        let batch = QuestionBatch::new(["One?", "Two?"]).unwrap();

        collect_answers(&batch, &prompter).unwrap();

        assert_eq!(prompter.asked(), vec!["One?", "Two?"]);
    }

    #[test]
    fn format_joins_with_blank_line() {
        let records = vec![
            AnswerRecord {
                question: "Q1".into(),
                answer: Answer::Given("A1".into()),
            },
            AnswerRecord {
                question: "Q2".into(),
                answer: Answer::NotObtained,
            },
        ];
        assert_eq!(format_answers(&records), "Q1\nA1\n\nQ2\n(no answer)");
    }

    #[test]
    fn finalize_is_identity() {
        let text = "## Objective\nTwo days in Munich".to_string();
        assert_eq!(finalize(text.clone()), text);
    }
}
