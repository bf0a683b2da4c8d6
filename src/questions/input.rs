//! Raw question input and its normalization into a [`QuestionBatch`].

use serde::Serialize;
use serde_json::{Map, Value};

use super::parser::{parse_questions, questions_field};
use crate::error::{ItineraError, Result};

/// Unparsed question input as handed over by an agent.
#[derive(Debug, Clone, PartialEq)]
pub enum RawQuestionInput {
    /// Free text: numbered list, fenced JSON, or one question per line.
    Text(String),
    /// An already-structured mapping, normally `{"questions": [...]}`.
    Mapping(Map<String, Value>),
    /// An already-split list of questions.
    Sequence(Vec<Value>),
}

impl From<Value> for RawQuestionInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Mapping(map),
            Value::Array(items) => Self::Sequence(items),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<String> for RawQuestionInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawQuestionInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for RawQuestionInput {
    fn from(questions: Vec<String>) -> Self {
        Self::Sequence(questions.into_iter().map(Value::String).collect())
    }
}

/// Ordered, non-empty list of trimmed, non-empty questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBatch(Vec<String>);

impl QuestionBatch {
    /// Build a batch, trimming entries and dropping blank ones.
    ///
    /// Fails with [`ItineraError::InvalidInput`] if nothing is left.
    pub fn new<I, S>(questions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let questions: Vec<String> = questions
            .into_iter()
            .map(|q| q.as_ref().trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();
        if questions.is_empty() {
            return Err(ItineraError::InvalidInput(
                "no question text could be recovered".into(),
            ));
        }
        Ok(Self(questions))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a QuestionBatch {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reduce any input shape to a [`QuestionBatch`].
pub fn normalize(input: RawQuestionInput) -> Result<QuestionBatch> {
    match input {
        RawQuestionInput::Text(text) => QuestionBatch::new(parse_questions(&text)),
        RawQuestionInput::Mapping(map) => match questions_field(&map) {
            Some(questions) => QuestionBatch::new(questions),
            // Unrecognized mapping: ask about the whole thing rather than fail.
            None => QuestionBatch::new([Value::Object(map).to_string()]),
        },
        RawQuestionInput::Sequence(items) => QuestionBatch::new(items.iter().map(render_item)),
    }
}

fn render_item(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
