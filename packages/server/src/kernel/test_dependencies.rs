// TestDependencies - mock implementations for testing
//
// Provides a mock AI service that can be injected into ServerDeps (or used
// directly against domain effects) in tests.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{OpenAIError, ToolDefinition};
use std::sync::{Arc, Mutex};

use super::BaseAI;

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a structured generation call
#[derive(Debug, Clone)]
pub struct StructuredCallArgs {
    pub system_prompt: String,
    pub user_prompt: String,
    pub tool_name: String,
    pub schema: serde_json::Value,
}

/// Queued outcome for the next mock call
enum MockOutcome {
    Reply(String),
    Fail(OpenAIError),
}

/// Mock AI service with queued responses and recorded calls.
///
/// Responses are consumed in FIFO order; when the queue is empty the mock
/// returns an empty JSON object so tests that don't care about AI output
/// keep working.
pub struct MockAI {
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    structured_calls: Arc<Mutex<Vec<StructuredCallArgs>>>,
    complete_calls: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            structured_calls: Arc::new(Mutex::new(Vec::new())),
            complete_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful response (raw JSON or text)
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Reply(response.into()));
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: OpenAIError) -> Self {
        self.outcomes.lock().unwrap().push(MockOutcome::Fail(error));
        self
    }

    /// All structured generation calls made so far
    pub fn structured_calls(&self) -> Vec<StructuredCallArgs> {
        self.structured_calls.lock().unwrap().clone()
    }

    /// All plain completion prompts made so far
    pub fn complete_calls(&self) -> Vec<String> {
        self.complete_calls.lock().unwrap().clone()
    }

    fn next_outcome(&self) -> Result<String> {
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok("{}".to_string());
        }
        match outcomes.remove(0) {
            MockOutcome::Reply(reply) => Ok(reply),
            MockOutcome::Fail(error) => Err(anyhow::Error::new(error)),
        }
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_calls.lock().unwrap().push(prompt.to_string());
        self.next_outcome()
    }

    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        tool: &ToolDefinition,
    ) -> Result<String> {
        self.structured_calls.lock().unwrap().push(StructuredCallArgs {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            tool_name: tool.name.clone(),
            schema: tool.parameters.clone(),
        });
        self.next_outcome()
    }
}
