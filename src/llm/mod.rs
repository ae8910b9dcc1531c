//! LLM Client Layer - OpenAI-compatible chat completions with tool calling
//!
//! This module provides:
//! - Wire types for chat-completion requests and responses
//! - LlmClient trait for API abstraction
//! - OpenAiClient implementation
//! - MockLlmClient for tests

pub mod client;
pub mod openai;
pub mod types;

pub use client::{LlmClient, MockLlmClient};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use types::{
    AssistantMessage, Choice, CompletionRequest, CompletionResponse, FunctionCall, FunctionDefinition, Message, Role,
    ToolCall, ToolChoice, ToolDefinition, Usage,
};
