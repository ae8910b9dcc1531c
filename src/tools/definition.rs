//! Tool definitions with strict parameter schemas
//!
//! Every tool renders to a closed JSON schema: all declared parameters are
//! required and no other properties are accepted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::llm::ToolDefinition;

/// Primitive JSON type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Integer,
    String,
}

impl ParamType {
    /// JSON schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

/// A single named parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: String,
}

/// A routable tool: name, description, ordered parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (e.g., "get_ticket_status")
    pub name: String,
    /// Human-readable description for the model
    pub description: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ToolParam>,
}

impl Tool {
    /// Create a new tool with no parameters
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Add an integer parameter
    pub fn integer(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.with_param(name, ParamType::Integer, description)
    }

    /// Add a string parameter
    pub fn string(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.with_param(name, ParamType::String, description)
    }

    fn with_param(mut self, name: impl Into<String>, param_type: ParamType, description: impl Into<String>) -> Self {
        self.params.push(ToolParam {
            name: name.into(),
            param_type,
            description: description.into(),
        });
        self
    }

    /// Names of all parameters, in order. All of them are required.
    pub fn required(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    /// Render the strict JSON schema for the parameters
    pub fn parameter_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.params {
            properties.insert(
                param.name.clone(),
                json!({
                    "type": param.param_type.as_str(),
                    "description": param.description,
                }),
            );
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required(),
            "additionalProperties": false
        })
    }

    /// Convert to the wire definition sent with every completion request
    pub fn to_llm_definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name.clone(), self.description.clone(), self.parameter_schema(), true)
    }
}

/// Check that a rendered schema is closed and requires exactly its declared properties
pub fn is_strict_schema(schema: &Value) -> bool {
    let Some(properties) = schema["properties"].as_object() else {
        return false;
    };
    let Some(required) = schema["required"].as_array() else {
        return false;
    };
    if schema["additionalProperties"] != Value::Bool(false) {
        return false;
    }

    let mut required_names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
    if required_names.len() != required.len() {
        return false;
    }
    required_names.sort_unstable();
    required_names.dedup();

    let mut property_names: Vec<&str> = properties.keys().map(String::as_str).collect();
    property_names.sort_unstable();

    required_names.len() == required.len() && required_names == property_names
}
