//! Declarative wiring of the itinerary agent variants.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{load_system_prompt, ItineraConfig, ToolsetEndpoint};
use crate::error::{ItineraError, Result};
use crate::prompt::Prompter;
use crate::tools::builtin::{clarification_tools, HAND_OFF_TOOL, HUMAN_IN_LOOP_TOOL};
use crate::tools::Toolset;

pub const ITINERARY: &str = "itinerary";
pub const MACRO_PLANNER: &str = "macro";
pub const DAY_PLANNER: &str = "day_planner";
pub const LODGING: &str = "lodging";
pub const OBJECTIVE_CLARIFIER: &str = "objective_clarifier";

/// Every profile name accepted by [`AgentProfile::by_name`].
pub const PROFILE_NAMES: [&str; 5] = [
    ITINERARY,
    MACRO_PLANNER,
    DAY_PLANNER,
    LODGING,
    OBJECTIVE_CLARIFIER,
];

/// What one agent gets: model, prompt, remote toolsets, local tools, and
/// the sub-agents it may delegate to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentProfile {
    pub name: String,
    pub model: String,
    pub system_prompt_path: PathBuf,
    pub toolsets: Vec<ToolsetEndpoint>,
    pub local_tools: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_agents: Vec<AgentProfile>,
}

impl AgentProfile {
    /// Empty profile using the configured model and system prompt.
    pub fn new(name: impl Into<String>, config: &ItineraConfig) -> Self {
        Self {
            name: name.into(),
            model: config.model.clone(),
            system_prompt_path: config.system_prompt_path.clone(),
            toolsets: Vec::new(),
            local_tools: Vec::new(),
            sub_agents: Vec::new(),
        }
    }

    /// Use `<name>_prompt.txt` next to the configured system prompt.
    fn with_own_prompt(mut self) -> Self {
        let file = format!("{}_prompt.txt", self.name);
        self.system_prompt_path = match self.system_prompt_path.parent() {
            Some(dir) => dir.join(file),
            None => PathBuf::from(file),
        };
        self
    }

    /// Attach configured toolsets by name; names absent from the config are skipped.
    pub fn with_toolsets(mut self, config: &ItineraConfig, names: &[&str]) -> Self {
        self.toolsets
            .extend(names.iter().filter_map(|name| config.toolset(name)).cloned());
        self
    }

    pub fn with_local_tool(mut self, name: impl Into<String>) -> Self {
        self.local_tools.push(name.into());
        self
    }

    pub fn with_sub_agent(mut self, agent: AgentProfile) -> Self {
        self.sub_agents.push(agent);
        self
    }

    /// Single agent with every configured toolset.
    pub fn itinerary(config: &ItineraConfig) -> Self {
        let mut profile = Self::new(ITINERARY, config);
        profile.toolsets = config.toolsets.clone();
        profile
    }

    pub fn day_planner(config: &ItineraConfig) -> Self {
        Self::new(DAY_PLANNER, config)
            .with_own_prompt()
            .with_toolsets(config, &["maps", "weather", "brave_search"])
    }

    pub fn lodging(config: &ItineraConfig) -> Self {
        Self::new(LODGING, config)
            .with_own_prompt()
            .with_toolsets(config, &["maps", "brave_search", "preferences"])
    }

    /// Talks to the traveller until the objective is clear, then hands off.
    pub fn objective_clarifier(config: &ItineraConfig) -> Self {
        Self::new(OBJECTIVE_CLARIFIER, config)
            .with_own_prompt()
            .with_toolsets(config, &["preferences"])
            .with_local_tool(HUMAN_IN_LOOP_TOOL)
            .with_local_tool(HAND_OFF_TOOL)
    }

    /// Top-level planner that delegates to the clarifier, day and lodging agents.
    pub fn macro_planner(config: &ItineraConfig) -> Self {
        Self::new(MACRO_PLANNER, config)
            .with_sub_agent(Self::objective_clarifier(config))
            .with_sub_agent(Self::day_planner(config))
            .with_sub_agent(Self::lodging(config))
    }

    pub fn by_name(name: &str, config: &ItineraConfig) -> Result<Self> {
        match name {
            ITINERARY => Ok(Self::itinerary(config)),
            MACRO_PLANNER => Ok(Self::macro_planner(config)),
            DAY_PLANNER => Ok(Self::day_planner(config)),
            LODGING => Ok(Self::lodging(config)),
            OBJECTIVE_CLARIFIER => Ok(Self::objective_clarifier(config)),
            other => Err(ItineraError::InvalidArgument(format!(
                "unknown agent profile '{other}' (expected one of: {})",
                PROFILE_NAMES.join(", ")
            ))),
        }
    }

    /// The local tools this profile names, bound to `prompter`.
    pub fn local_toolset(&self, prompter: Arc<dyn Prompter>) -> Toolset {
        clarification_tools(prompter).filtered(self.local_tools.as_slice())
    }

    pub fn load_system_prompt(&self) -> Result<String> {
        load_system_prompt(&self.system_prompt_path)
    }
}
