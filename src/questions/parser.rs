//! Recover individual questions from free-form model output.
//!
//! Strategies run most-specific first and each either produces a list or
//! declines:
//!
//! 1. a fenced block, if any, narrows the text used for step 2;
//! 2. structured data with a `questions` array;
//! 3. a numbered list (`1. ...`, `2. ...`) in the original text;
//! 4. one question per non-empty line.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::lenient::parse_lenient;

/// Field that holds the question list in structured payloads.
pub const QUESTIONS_KEY: &str = "questions";

const FENCE: &str = "```";

static NUMBER_MARKER: OnceLock<Regex> = OnceLock::new();

fn number_marker() -> &'static Regex {
    NUMBER_MARKER.get_or_init(|| Regex::new(r"\d+\.\s+").expect("static regex is valid"))
}

/// Split `text` into questions, in source order.
///
/// Never fails: an empty vector means no strategy found any question text.
pub fn parse_questions(text: &str) -> Vec<String> {
    let working = strip_fence(text).unwrap_or(text);

    if let Some(questions) = structured_questions(working) {
        debug!(count = questions.len(), "questions parsed from structured data");
        return questions;
    }
    if let Some(questions) = numbered_questions(text) {
        debug!(count = questions.len(), "questions parsed from numbered list");
        return questions;
    }
    let questions = line_questions(text);
    debug!(count = questions.len(), "questions parsed line by line");
    questions
}

/// Return the interior of the first fenced block, if the text has one.
///
/// The opening fence may carry a tag (` ```json `); the tag line is dropped.
/// An unterminated fence counts as no fence.
pub fn strip_fence(text: &str) -> Option<&str> {
    let start = text.find(FENCE)?;
    let after = &text[start + FENCE.len()..];

    let body_start = match after.find('\n') {
        Some(newline) if is_fence_tag(&after[..newline]) => newline + 1,
        _ => 0,
    };
    let body = &after[body_start..];
    let end = body.find(FENCE)?;
    Some(body[..end].trim())
}

fn is_fence_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Read `{"questions": [...]}` from `text`, tolerating sloppy JSON.
pub fn structured_questions(text: &str) -> Option<Vec<String>> {
    let value = parse_lenient(text)?;
    questions_field(value.as_object()?)
}

/// Pull a non-empty all-string `questions` array out of a mapping.
pub(crate) fn questions_field(map: &serde_json::Map<String, Value>) -> Option<Vec<String>> {
    let items = map.get(QUESTIONS_KEY)?.as_array()?;
    if items.is_empty() {
        return None;
    }

    let mut questions = Vec::with_capacity(items.len());
    for item in items {
        let question = item.as_str()?.trim();
        if !question.is_empty() {
            questions.push(question.to_string());
        }
    }
    non_empty(questions)
}

/// Extract `<n>. <question>` entries; each runs until the next marker.
pub fn numbered_questions(text: &str) -> Option<Vec<String>> {
    let markers: Vec<_> = number_marker().find_iter(text).collect();
    if markers.is_empty() {
        return None;
    }

    let questions = markers
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            let end = markers
                .get(index + 1)
                .map_or(text.len(), |next| next.start());
            text[marker.end()..end].trim()
        })
        .filter(|question| !question.is_empty())
        .map(str::to_string)
        .collect();
    non_empty(questions)
}

/// One question per non-blank line.
pub fn line_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(questions: Vec<String>) -> Option<Vec<String>> {
    if questions.is_empty() {
        None
    } else {
        Some(questions)
    }
}
