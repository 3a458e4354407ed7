//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait (request `{ model, prompt }` → reply text, or failure) and an
//! OpenAI-compatible implementation. No retry, streaming or timeout policy lives here; callers
//! treat the call as one opaque fallible remote step.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

pub mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use openai_llm::OpenAILlmClient;

/// Text-generation capability.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for a single prompt. The text is returned as-is (untrimmed).
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
