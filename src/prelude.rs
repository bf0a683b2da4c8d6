//! Convenience re-exports for common use.

pub use crate::agent::AgentProfile;
pub use crate::config::ItineraConfig;
pub use crate::error::{ItineraError, Result};
pub use crate::prompt::{ConsolePrompter, LinePrompter, PromptReply, Prompter, ScriptedPrompter};
pub use crate::questions::{
    extract_and_collect, finalize, normalize, Answer, QuestionBatch, RawQuestionInput,
};
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolArguments, Toolset};
