//! LLM configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// Gemini's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

/// Model used for title synthesis unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn model(&self) -> &str {
        &self.model
    }
    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from environment variables.
    ///
    /// `API_KEY` (or `GEMINI_API_KEY`, then `OPENAI_API_KEY`) is required; `LLM_BASE_URL`,
    /// `MODEL` and `LLM_SYSTEM_PROMPT` are optional.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("API_KEY not set (also checked GEMINI_API_KEY, OPENAI_API_KEY)"))?;
        let base_url = env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            api_key,
            base_url,
            model,
            system_prompt,
        })
    }
}
