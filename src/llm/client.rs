//! Core LLM client trait and a scripted mock

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, RouterError};
use crate::llm::types::{CompletionRequest, CompletionResponse};

/// Stateless LLM client - each call is independent
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single completion request
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Model identifier sent with every request
    fn model(&self) -> &str;
}

/// Mock client returning scripted results in FIFO order.
///
/// Every request is recorded so tests can inspect what was sent upstream.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    model: String,
    responses: Mutex<VecDeque<Result<CompletionResponse>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new(responses: Vec<CompletionResponse>) -> Self {
        Self {
            model: "mock-model".to_string(),
            responses: Mutex::new(responses.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a failure to be returned by the next call
    pub fn with_error(self, error: RouterError) -> Self {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(Err(error));
        }
        self
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.responses
            .lock()
            .map_err(|_| RouterError::Upstream("mock state poisoned".to_string()))?
            .pop_front()
            .unwrap_or_else(|| Err(RouterError::Upstream("no scripted response left".to_string())))
    }

    fn model(&self) -> &str {
        &self.model
    }
}
