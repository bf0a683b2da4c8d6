//! Clarification questions: parsing agent output and collecting operator answers.

pub mod collect;
pub mod input;
pub mod lenient;
pub mod parser;

pub use collect::{
    collect_answers, extract_and_collect, finalize, format_answers, Answer, AnswerRecord,
    NO_ANSWER,
};
pub use input::{normalize, QuestionBatch, RawQuestionInput};
pub use parser::{parse_questions, QUESTIONS_KEY};
