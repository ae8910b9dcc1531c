//! Query routing
//!
//! Sends a free-text query to the model with the full catalog and mandatory
//! tool use, and returns the one tool call it picked.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouterError};
use crate::llm::{CompletionRequest, LlmClient, ToolChoice};
use crate::tools::ToolCatalog;

/// The tool the model selected. `arguments` is the model's JSON text, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecision {
    pub name: String,
    pub arguments: String,
}

/// Routes queries to a single tool call
pub struct Router<C: LlmClient> {
    client: Arc<C>,
    catalog: Arc<ToolCatalog>,
}

impl<C: LlmClient> Router<C> {
    pub fn new(client: Arc<C>, catalog: Arc<ToolCatalog>) -> Self {
        Self { client, catalog }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Build the single-turn request for a query
    pub fn build_request(&self, query: &str) -> CompletionRequest {
        CompletionRequest::new(self.client.model())
            .with_user_message(query)
            .with_tools(self.catalog.to_llm_definitions())
            .with_tool_choice(ToolChoice::Required)
    }

    /// Ask the model which tool applies to `query`
    pub async fn route(&self, query: &str) -> Result<RouteDecision> {
        let request = self.build_request(query);
        let response = self.client.complete(request).await?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| RouterError::NoDecision("response contained no choices".to_string()))?;

        let calls = &choice.message.tool_calls;
        let call = calls
            .first()
            .ok_or_else(|| RouterError::NoDecision("model replied without a tool call".to_string()))?;

        if calls.len() > 1 {
            tracing::debug!(
                selected = %call.function.name,
                ignored = calls.len() - 1,
                "Model returned multiple tool calls, using the first"
            );
        }
        if !self.catalog.contains(&call.function.name) {
            tracing::warn!(tool = %call.function.name, "Model selected a tool outside the catalog");
        }

        tracing::info!(tool = %call.function.name, "Routed query");
        Ok(RouteDecision {
            name: call.function.name.clone(),
            arguments: call.function.arguments.clone(),
        })
    }
}
