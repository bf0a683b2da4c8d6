//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::arguments::ToolArguments;
use super::types::AgentToolParameters;
use crate::error::Result;

/// Who issued a tool call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolExecutionContext {
    /// Agent profile the call came from.
    pub agent: Option<String>,
    /// Model-assigned id of the call, if the runner tracks one.
    pub call_id: Option<String>,
}

impl ToolExecutionContext {
    pub fn for_agent(agent: impl Into<String>) -> Self {
        Self {
            agent: Some(agent.into()),
            call_id: None,
        }
    }

    pub fn with_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.call_id = Some(call_id.into());
        self
    }
}

/// An operation an agent can call by name.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model calls the tool by.
    fn name(&self) -> &str;

    /// Description shown to the model.
    fn description(&self) -> &str;

    /// JSON Schema of the arguments.
    fn parameters(&self) -> &AgentToolParameters;

    /// Function-calling declaration handed to the model.
    fn declaration(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "parameters": self.parameters().schema,
        })
    }

    async fn execute(&self, args: &ToolArguments, ctx: &ToolExecutionContext) -> Result<Value>;
}

type BoxedReply = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

type ToolHandler = dyn Fn(ToolArguments, ToolExecutionContext) -> BoxedReply + Send + Sync;

/// Tool backed by an async closure.
pub struct AgentTool {
    name: String,
    description: String,
    parameters: AgentToolParameters,
    handler: Arc<ToolHandler>,
}

impl AgentTool {
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: AgentToolParameters,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolArguments, ToolExecutionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Arc::new(move |args, ctx| Box::pin(handler(args, ctx))),
        }
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &AgentToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: &ToolArguments, ctx: &ToolExecutionContext) -> Result<Value> {
        (self.handler)(args.clone(), ctx.clone()).await
    }
}

impl std::fmt::Debug for AgentTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTool").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_records_agent_and_call() {
        let ctx = ToolExecutionContext::for_agent("objective_clarifier").with_call_id("call_7");
        assert_eq!(ctx.agent.as_deref(), Some("objective_clarifier"));
        assert_eq!(ctx.call_id.as_deref(), Some("call_7"));
    }

    #[tokio::test]
    async fn handler_sees_the_calling_agent() {
        let tool = AgentTool::new(
            "whoami",
            "Report the caller",
            AgentToolParameters::object().build(),
            |_args, ctx: ToolExecutionContext| async move { Ok(json!(ctx.agent)) },
        );

        let reply = tool
            .execute(&ToolArguments::default(), &ToolExecutionContext::for_agent("lodging"))
            .await
            .unwrap();

        assert_eq!(reply, json!("lodging"));
        assert_eq!(tool.declaration()["name"], "whoami");
    }
}
