//! LLM provider trait definition

use crate::{ChatRequest, ChatResponse, Result};
use async_trait::async_trait;

/// Trait for LLM providers
///
/// Implementations of this trait provide access to different LLM services
/// (e.g., OpenAI, local OpenAI-compatible deployments).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion from the LLM
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
