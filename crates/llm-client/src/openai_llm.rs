//! LlmClient backed by openai-client: one user message per request, optional system message first.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient};
use crate::config::LlmConfig;

#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            system_prompt: None,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            system_prompt: None,
        }
    }

    /// Builds a client from any [`LlmConfig`] (key, base URL, optional system prompt).
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_system_prompt_opt(config.system_prompt().map(str::to_string))
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn messages_for(&self, prompt: &str) -> Vec<ChatMessage> {
        prompt::build_messages(self.system_prompt.as_deref(), prompt)
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String> {
        let openai_messages = self
            .messages_for(prompt)
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        self.client.chat_completion(model, openai_messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt::MessageRole;

    #[test]
    fn messages_without_system_prompt() {
        let client = OpenAILlmClient::new("dummy_key".to_string());
        let messages = client.messages_for("hello");
        assert_eq!(messages, vec![ChatMessage::user("hello")]);
    }

    #[test]
    fn messages_with_system_prompt() {
        let client = OpenAILlmClient::new("dummy_key".to_string()).with_system_prompt("Be brief.");
        let messages = client.messages_for("hello");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1], ChatMessage::user("hello"));
    }
}
