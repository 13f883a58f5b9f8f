// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (what to prompt for, how to interpret the answer) lives in
// domain layers.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use anyhow::Result;
use async_trait::async_trait;
use openai_client::ToolDefinition;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Generate structured output through a single forced tool call.
    ///
    /// Returns the raw JSON string the model produced: the tool-call
    /// arguments when the model used the tool, otherwise the assistant
    /// message content (which the caller must treat as best-effort JSON).
    /// Parse with serde_json in calling code.
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        tool: &ToolDefinition,
    ) -> Result<String>;
}
