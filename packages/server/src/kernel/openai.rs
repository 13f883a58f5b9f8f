// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatRequest, FunctionRequest, Message, OpenAIClient, ToolDefinition,
};
use std::sync::Arc;

use super::BaseAI;

/// Default model when `OPENAI_MODEL` is not configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// OpenAI-backed implementation of AI capabilities.
///
/// Wraps the pure API client with the model selection configured for this
/// deployment. Errors keep their `OpenAIError` source so callers can
/// distinguish rate-limit/quota failures from generic ones via downcast.
#[derive(Clone)]
pub struct OpenAiBridge {
    client: Arc<OpenAIClient>,
    model: String,
}

impl OpenAiBridge {
    pub fn new(client: Arc<OpenAIClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl BaseAI for OpenAiBridge {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model).message(Message::user(prompt));

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(anyhow::Error::new)?;

        Ok(response.content)
    }

    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        tool: &ToolDefinition,
    ) -> Result<String> {
        let request = FunctionRequest::new(
            &self.model,
            vec![Message::system(system_prompt), Message::user(user_prompt)],
        )
        .tool(tool.to_openai_format())
        .force_tool(&tool.name);

        let response = self
            .client
            .function_calling(request)
            .await
            .map_err(anyhow::Error::new)?;

        // Prefer the structured tool-call arguments; models occasionally
        // answer in plain content despite a forced tool choice.
        if let Some(call) = response.tool_calls().into_iter().next() {
            tracing::debug!(tool = %call.name, "Model answered via tool call");
            return Ok(call.arguments);
        }

        if let Some(content) = response.content() {
            tracing::debug!("Model answered via content despite forced tool");
            return Ok(content.to_string());
        }

        Err(anyhow::Error::new(openai_client::OpenAIError::Parse(
            "assistant message had neither tool calls nor content".into(),
        )))
    }
}
