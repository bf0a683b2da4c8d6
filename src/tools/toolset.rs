//! Named, ordered collections of tools handed to an agent.

use std::ops::Add;
use std::sync::Arc;

use tracing::debug;

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolExecutionContext};
use super::validation::validate_arguments;
use crate::error::{ItineraError, Result};

/// An ordered set of tools, unique by name.
#[derive(Clone, Default)]
pub struct Toolset {
    tools: Vec<Arc<dyn Tool>>,
}

impl Toolset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool. A tool with the same name is replaced in place.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(index) => self.tools[index] = tool,
            None => self.tools.push(tool),
        }
        self
    }

    /// Append every tool of `other`, keeping this set's order first.
    pub fn extend(self, other: Toolset) -> Self {
        other.tools.into_iter().fold(self, Toolset::with_tool)
    }

    /// Keep only the named tools, in this set's order. Unknown names are ignored.
    pub fn filtered<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let tools = self
            .tools
            .iter()
            .filter(|tool| names.iter().any(|name| name.as_ref() == tool.name()))
            .cloned()
            .collect();
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Function-calling declarations for every tool.
    pub fn schemas(&self) -> Vec<serde_json::Value> {
        self.tools.iter().map(|tool| tool.declaration()).collect()
    }

    /// Validate arguments and run the named tool.
    pub async fn execute(
        &self,
        name: &str,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Result<serde_json::Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| ItineraError::ToolNotFound(name.to_string()))?;

        validate_arguments(args.raw(), &tool.parameters().schema)
            .map_err(|message| ItineraError::InvalidArgument(format!("{name}: {message}")))?;

        debug!(tool = name, agent = ?ctx.agent, call_id = ?ctx.call_id, "executing tool");
        tool.execute(args, ctx).await
    }
}

impl Add for Toolset {
    type Output = Toolset;

    fn add(self, rhs: Toolset) -> Toolset {
        self.extend(rhs)
    }
}

impl FromIterator<Arc<dyn Tool>> for Toolset {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Tool>>>(iter: I) -> Self {
        iter.into_iter().fold(Toolset::new(), Toolset::with_tool)
    }
}

impl std::fmt::Debug for Toolset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolset").field("tools", &self.names()).finish()
    }
}
