//! Full config for processing runs: base + LLM.

use anyhow::Result;
use llm_client::{EnvLlmConfig, LlmConfig};

use super::base::BaseConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub llm: EnvLlmConfig,
}

impl AppConfig {
    /// Load from environment variables. Fails when no API key is set.
    pub fn load() -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(),
            llm: EnvLlmConfig::from_env()?,
        })
    }

    /// Validate config (base URL must parse, model must be non-empty).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(self.llm.base_url()).is_err() {
            anyhow::bail!("LLM_BASE_URL is not a valid URL: {}", self.llm.base_url());
        }
        if self.llm.model().trim().is_empty() {
            anyhow::bail!("MODEL is set but empty");
        }
        Ok(())
    }

    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
}
