//! Wire types for OpenAI-compatible chat completions
//!
//! Requests are serialized as-is; responses tolerate unknown fields and
//! missing optional sections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Function schema inside a tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    #[serde(default)]
    pub strict: bool,
}

/// Tool definition in the `tools` array of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

impl ToolDefinition {
    /// Create a function tool definition
    pub fn function(name: impl Into<String>, description: impl Into<String>, parameters: Value, strict: bool) -> Self {
        Self {
            kind: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
                strict,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// How the model may use the supplied tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    #[default]
    Auto,
    None,
    /// The model must call at least one tool instead of answering in text
    Required,
}

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

impl CompletionRequest {
    /// Create a new completion request for a model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            tools: Vec::new(),
            tool_choice: None,
        }
    }

    /// Add a user message
    pub fn with_user_message(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Add tools to the request
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Set the tool choice directive
    pub fn with_tool_choice(mut self, choice: ToolChoice) -> Self {
        self.tool_choice = Some(choice);
        self
    }
}

/// The function half of a tool call. `arguments` is JSON text as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// A tool call emitted by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default = "default_call_type")]
    pub kind: String,
    pub function: FunctionCall,
}

fn default_call_type() -> String {
    "function".to_string()
}

impl ToolCall {
    /// Create a new function tool call
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: default_call_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// Assistant message inside a choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tool_calls: Vec<ToolCall>,
}

// Some providers send `"tool_calls": null` rather than omitting the field.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<ToolCall>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ToolCall>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: AssistantMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
}

impl Usage {
    pub fn total(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// Response body from `POST /chat/completions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    /// Build a response with one choice carrying the given tool calls
    pub fn with_tool_calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            choices: vec![Choice {
                index: 0,
                message: AssistantMessage {
                    content: None,
                    tool_calls,
                },
                finish_reason: Some("tool_calls".to_string()),
            }],
            usage: None,
        }
    }

    /// First tool call of the first choice, if any
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.choices.first().and_then(|c| c.message.tool_calls.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn test_tool_choice_serialization() {
        assert_eq!(serde_json::to_string(&ToolChoice::Required).unwrap(), "\"required\"");
        assert_eq!(serde_json::to_string(&ToolChoice::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&ToolChoice::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_tool_definition_wire_shape() {
        let def = ToolDefinition::function(
            "get_ticket_status",
            "Retrieves the status of an IT support ticket",
            json!({"type": "object"}),
            true,
        );
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "get_ticket_status");
        assert_eq!(value["function"]["strict"], true);
        assert_eq!(def.name(), "get_ticket_status");
    }

    #[test]
    fn test_completion_request_builder() {
        let req = CompletionRequest::new("openai/gpt-4o-mini")
            .with_user_message("Hello")
            .with_tool_choice(ToolChoice::Required);

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["model"], "openai/gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Hello");
        assert_eq!(value["tool_choice"], "required");
        // empty tools are omitted entirely
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn test_response_parses_openai_payload() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "get_ticket_status",
                            "arguments": "{\"ticket_id\":4521}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 18, "total_tokens": 138}
        });

        let resp: CompletionResponse = serde_json::from_value(body).unwrap();
        let call = resp.first_tool_call().unwrap();
        assert_eq!(call.id, "call_abc");
        assert_eq!(call.function.name, "get_ticket_status");
        assert_eq!(call.function.arguments, "{\"ticket_id\":4521}");
        assert_eq!(resp.usage.unwrap().total(), 138);
    }

    #[test]
    fn test_response_null_tool_calls() {
        let body = json!({
            "choices": [{
                "message": {"role": "assistant", "content": "Sure!", "tool_calls": null}
            }]
        });
        let resp: CompletionResponse = serde_json::from_value(body).unwrap();
        assert!(resp.first_tool_call().is_none());
        assert_eq!(resp.choices[0].message.content.as_deref(), Some("Sure!"));
    }

    #[test]
    fn test_tool_call_without_arguments_fails_to_decode() {
        let body = json!({
            "choices": [{
                "message": {
                    "tool_calls": [{
                        "id": "c",
                        "type": "function",
                        "function": {"name": "get_ticket_status"}
                    }]
                }
            }]
        });
        assert!(serde_json::from_value::<CompletionResponse>(body).is_err());
    }

    #[test]
    fn test_response_without_choices() {
        let resp: CompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.choices.is_empty());
        assert!(resp.first_tool_call().is_none());
    }

    #[test]
    fn test_with_tool_calls_helper() {
        let resp = CompletionResponse::with_tool_calls(vec![ToolCall::new("c1", "schedule_meeting", "{}")]);
        assert_eq!(resp.choices.len(), 1);
        assert_eq!(resp.first_tool_call().unwrap().function.name, "schedule_meeting");
    }
}
