//! Configuration system (layered: defaults < config file < environment).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ItineraError, Result};

const DEFAULT_MODEL: &str = "openai:gpt-4.1";
const DEFAULT_SYSTEM_PROMPT: &str = "system_prompt.txt";
const DEFAULT_TRACING_NAME: &str = "Agent itinerary";

/// Credentials that switch the tracing connector on.
const TRACING_ENV_VARS: [&str; 2] = ["LANGFUSE_PUBLIC_KEY", "LANGFUSE_SECRET_KEY"];

/// A remote tool server and the subset of its tools an agent may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsetEndpoint {
    pub name: String,
    pub base_url: String,
    /// Tool names to expose; `None` exposes everything the server offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_names: Option<Vec<String>>,
}

impl ToolsetEndpoint {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            tool_names: None,
        }
    }

    pub fn with_tools(mut self, names: &[&str]) -> Self {
        self.tool_names = Some(names.iter().map(|n| (*n).to_string()).collect());
        self
    }

    fn env_key(&self) -> String {
        let name: String = self
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();
        format!("ITINERA_TOOLSET_{name}_URL")
    }
}

/// Settings for the itinerary agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraConfig {
    /// Chat model, `provider:model`.
    pub model: String,
    /// File holding the top-level agent's system prompt.
    pub system_prompt_path: PathBuf,
    /// Trace name reported when tracing credentials are present.
    pub tracing_name: String,
    pub toolsets: Vec<ToolsetEndpoint>,
}

impl Default for ItineraConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt_path: PathBuf::from(DEFAULT_SYSTEM_PROMPT),
            tracing_name: DEFAULT_TRACING_NAME.to_string(),
            toolsets: default_toolsets(),
        }
    }
}

fn default_toolsets() -> Vec<ToolsetEndpoint> {
    vec![
        ToolsetEndpoint::new("maps", "http://localhost:8100").with_tools(&[
            "maps_geocode",
            "maps_search_places",
            "maps_place_details",
        ]),
        ToolsetEndpoint::new("weather", "http://localhost:8101")
            .with_tools(&["get_weather_forecast"]),
        ToolsetEndpoint::new("preferences", "http://localhost:8102"),
        ToolsetEndpoint::new("brave_search", "http://localhost:8103")
            .with_tools(&["brave_web_search"]),
    ]
}

impl ItineraConfig {
    /// Read a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ItineraError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// Full resolution: defaults, then the file (explicit path, or
    /// `~/.itinera/config.toml` if it exists), then the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let file = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(default_config_path()).filter(|p| p.is_file()),
        };

        let mut config = match file {
            Some(file) => {
                debug!(path = %file.display(), "loading config file");
                Self::load(&file)?
            }
            None => Self::default(),
        };
        config.apply_overrides(std::env::vars());
        Ok(config)
    }

    /// Apply `ITINERA_*` overrides from a set of variables.
    pub fn apply_overrides<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let key = key.as_ref();
            match key {
                "ITINERA_MODEL" => self.model = value.into(),
                "ITINERA_SYSTEM_PROMPT" => self.system_prompt_path = PathBuf::from(value.into()),
                "ITINERA_TRACING_NAME" => self.tracing_name = value.into(),
                _ if key.starts_with("ITINERA_TOOLSET_") => {
                    if let Some(toolset) = self.toolsets.iter_mut().find(|t| t.env_key() == key) {
                        toolset.base_url = value.into();
                    }
                }
                _ => {}
            }
        }
    }

    pub fn toolset(&self, name: &str) -> Option<&ToolsetEndpoint> {
        self.toolsets.iter().find(|t| t.name == name)
    }

    /// Tracing is active only when its credentials are in the environment.
    pub fn tracing_enabled(&self) -> bool {
        TRACING_ENV_VARS
            .iter()
            .all(|var| std::env::var(var).is_ok_and(|v| !v.is_empty()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ItineraError::Configuration(e.to_string()))
    }
}

/// Default location of the user config file.
pub fn default_config_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".itinera"))
        .unwrap_or_else(|| PathBuf::from(".itinera"))
        .join("config.toml")
}

/// Read a system prompt file. Missing or blank files are configuration errors.
pub fn load_system_prompt(path: &Path) -> Result<String> {
    let prompt = fs::read_to_string(path).map_err(|e| {
        ItineraError::Configuration(format!("cannot read system prompt {}: {e}", path.display()))
    })?;
    if prompt.trim().is_empty() {
        return Err(ItineraError::Configuration(format!(
            "system prompt {} is empty",
            path.display()
        )));
    }
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_tool_servers() {
        let config = ItineraConfig::default();
        assert_eq!(config.model, "openai:gpt-4.1");
        assert_eq!(
            config.toolsets.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["maps", "weather", "preferences", "brave_search"]
        );
        assert_eq!(config.toolset("weather").unwrap().base_url, "http://localhost:8101");
    }

    #[test]
    fn only_preferences_is_unfiltered() {
        let config = ItineraConfig::default();
        assert_eq!(config.toolset("preferences").unwrap().tool_names, None);
        assert_eq!(
            config.toolset("weather").unwrap().tool_names,
            Some(vec!["get_weather_forecast".to_string()])
        );
    }

    #[test]
    fn overrides_apply_by_key() {
        let mut config = ItineraConfig::default();
        config.apply_overrides([
            ("ITINERA_MODEL", "anthropic:claude-sonnet"),
            ("ITINERA_TOOLSET_BRAVE_SEARCH_URL", "http://search:9000"),
            ("ITINERA_TOOLSET_UNKNOWN_URL", "http://ignored"),
            ("HOME", "/root"),
        ]);

        assert_eq!(config.model, "anthropic:claude-sonnet");
        assert_eq!(config.toolset("brave_search").unwrap().base_url, "http://search:9000");
        assert_eq!(config.toolsets.len(), 4);
    }

    #[test]
    fn env_key_is_upper_snake() {
        let endpoint = ToolsetEndpoint::new("brave-search", "http://x");
        assert_eq!(endpoint.env_key(), "ITINERA_TOOLSET_BRAVE_SEARCH_URL");
    }

    #[test]
    fn rendered_toml_lists_toolsets() {
        let rendered = ItineraConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[[toolsets]]"));
        assert!(rendered.contains("brave_web_search"));
    }
}
