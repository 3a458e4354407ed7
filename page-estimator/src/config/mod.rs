//! App configuration: BaseConfig (storage + log) + LLM config. Loaded from env.

mod app_config;
mod base;

#[cfg(test)]
mod tests;

pub use app_config::AppConfig;
pub use base::BaseConfig;
