//! Tool system for agent function calling.

pub mod arguments;
pub mod builtin;
pub mod tool;
pub mod toolset;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use tool::{AgentTool, Tool, ToolExecutionContext};
pub use toolset::Toolset;
pub use types::AgentToolParameters;
