//! Operator prompts.
//!
//! [`Prompter`] is the seam between question collection and whoever answers:
//! an interactive terminal ([`ConsolePrompter`]), any line-oriented
//! reader/writer pair ([`LinePrompter`]), or a fixed script
//! ([`ScriptedPrompter`]).

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{ItineraError, Result};

/// Outcome of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Answered(String),
    /// The operator interrupted the prompt or closed input.
    Interrupted,
}

/// Something that can put a question to a human and wait for the reply.
pub trait Prompter: Send + Sync {
    /// Show `question` and block until a reply (or interruption) arrives.
    fn ask(&self, question: &str) -> Result<PromptReply>;
}

/// Interactive terminal prompter.
///
/// Line editing runs in raw mode, so Ctrl-C and Ctrl-D arrive as keys rather
/// than signals. Either one leaves the current question unanswered and the
/// next question is asked as usual.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn ask(&self, question: &str) -> Result<PromptReply> {
        let mut editor = DefaultEditor::new().map_err(readline_error)?;
        let mut out = io::stdout();
        writeln!(out, "? {question}")?;
        out.flush()?;
        readline_reply(editor.readline("> "))
    }
}

/// Map one line-editor read onto a prompt outcome.
fn readline_reply(line: rustyline::Result<String>) -> Result<PromptReply> {
    match line {
        Ok(line) => Ok(PromptReply::Answered(line.trim().to_string())),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(PromptReply::Interrupted),
        Err(e) => Err(readline_error(e)),
    }
}

fn readline_error(err: ReadlineError) -> ItineraError {
    match err {
        ReadlineError::Io(e) => ItineraError::Io(e),
        other => ItineraError::Io(io::Error::other(other.to_string())),
    }
}

/// Line-oriented prompter over a reader/writer pair, for piped input.
///
/// Only end of input counts as an interruption.
pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl<R, W> LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Recover the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        match self.io.into_inner() {
            Ok(io) => io,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl LinePrompter<BufReader<Stdin>, Stdout> {
    /// Prompt over the process's own stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Prompter for LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask(&self, question: &str) -> Result<PromptReply> {
        let mut guard = self
            .io
            .lock()
            .map_err(|_| ItineraError::Io(io::Error::other("prompt lock poisoned")))?;
        let (reader, writer) = &mut *guard;

        writeln!(writer, "? {question}")?;
        write!(writer, "> ")?;
        writer.flush()?;

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                writeln!(writer)?;
                Ok(PromptReply::Interrupted)
            }
            Ok(_) => Ok(PromptReply::Answered(line.trim().to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

impl<R, W> std::fmt::Debug for LinePrompter<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinePrompter").finish_non_exhaustive()
    }
}

/// Replies from a fixed script; interrupts once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: Mutex<VecDeque<PromptReply>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    /// Script that answers each prompt with the next string.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_replies(answers.into_iter().map(|a| PromptReply::Answered(a.into())))
    }

    pub fn from_replies(replies: impl IntoIterator<Item = PromptReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .map(|asked| asked.clone())
            .unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &str) -> Result<PromptReply> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(question.to_string());
        }
        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front());
        Ok(reply.unwrap_or(PromptReply::Interrupted))
    }
}
