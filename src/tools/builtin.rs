//! Built-in clarification tools.
//!
//! - `human_in_loop_tool` asks the operator the agent's clarification
//!   questions and returns the answers as one text block.
//! - `hand_off_to_next_tool` returns its input unchanged; calling it tells
//!   the orchestrating loop that clarification is finished.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use itinera::prompt::ConsolePrompter;
//! use itinera::tools::builtin::clarification_tools;
//!
//! let tools = clarification_tools(Arc::new(ConsolePrompter));
//! assert_eq!(tools.len(), 2);
//! ```

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::ItineraError;
use crate::prompt::Prompter;
use crate::questions::{extract_and_collect, finalize, RawQuestionInput};
use crate::tools::tool::{AgentTool, Tool, ToolExecutionContext};
use crate::tools::toolset::Toolset;
use crate::tools::types::AgentToolParameters;

pub const HUMAN_IN_LOOP_TOOL: &str = "human_in_loop_tool";
pub const HAND_OFF_TOOL: &str = "hand_off_to_next_tool";

const HAND_OFF_DESCRIPTION: &str =
    "Collected objective and preferences to be passed to the next tool as formatted markdown";

/// Create the `human_in_loop_tool`.
///
/// The `question` argument may be free text, a `{"questions": [...]}` object,
/// or a list of strings. Collection blocks on the operator, so it runs on
/// tokio's blocking pool.
pub fn human_in_loop_tool(prompter: Arc<dyn Prompter>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        HUMAN_IN_LOOP_TOOL,
        "Ask one or more questions to the user and return their answers as a combined string.",
        AgentToolParameters::object()
            .any_of_types(
                "question",
                "One or more clarifying questions separated by newlines or numbers.",
                &["string", "object", "array"],
                true,
            )
            .build(),
        move |args, ctx: ToolExecutionContext| {
            let prompter = Arc::clone(&prompter);
            async move {
                let raw = args.get("question").cloned().ok_or_else(|| {
                    ItineraError::InvalidArgument("missing argument 'question'".into())
                })?;
                let input = RawQuestionInput::from(raw);
                debug!(agent = ?ctx.agent, "handing questions to the operator");

                let answers = tokio::task::spawn_blocking(move || {
                    extract_and_collect(input, prompter.as_ref())
                })
                .await
                .map_err(|e| ItineraError::tool(HUMAN_IN_LOOP_TOOL, e.to_string()))??;

                Ok(Value::String(answers))
            }
        },
    ))
}

/// Create the `hand_off_to_next_tool`.
pub fn hand_off_to_next_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        HAND_OFF_TOOL,
        HAND_OFF_DESCRIPTION,
        AgentToolParameters::object()
            .string("objective_and_preferences", HAND_OFF_DESCRIPTION, true)
            .build(),
        |args, _ctx: ToolExecutionContext| async move {
            let text = args.get_str("objective_and_preferences")?;
            Ok(Value::String(finalize(text.to_string())))
        },
    ))
}

/// Both clarification tools, human-in-the-loop first.
pub fn clarification_tools(prompter: Arc<dyn Prompter>) -> Toolset {
    Toolset::new()
        .with_tool(human_in_loop_tool(prompter))
        .with_tool(hand_off_to_next_tool())
}
