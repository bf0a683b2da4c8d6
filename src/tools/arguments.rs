//! Typed access to the JSON arguments of a tool call.

use serde::de::DeserializeOwned;

use crate::error::ItineraError;

/// Arguments passed by the model when it calls a tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    raw: serde_json::Value,
}

impl ToolArguments {
    pub fn new(raw: serde_json::Value) -> Self {
        Self { raw }
    }

    /// Raw argument value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.raw
    }

    /// Get an argument of any type.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.raw.get(name)
    }

    /// Get a required string argument.
    pub fn get_str(&self, name: &str) -> Result<&str, ItineraError> {
        self.get(name)
            .ok_or_else(|| ItineraError::InvalidArgument(format!("missing argument '{name}'")))?
            .as_str()
            .ok_or_else(|| {
                ItineraError::InvalidArgument(format!("argument '{name}' must be a string"))
            })
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_str())
    }

    /// Deserialize all arguments into a typed struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ItineraError> {
        Ok(serde_json::from_value(self.raw.clone())?)
    }
}

impl From<serde_json::Value> for ToolArguments {
    fn from(raw: serde_json::Value) -> Self {
        Self::new(raw)
    }
}
