//! Config tests.

use crate::config::{AppConfig, BaseConfig};
use serial_test::serial;
use std::env;

fn clear_env() {
    for key in [
        "DATABASE_URL",
        "LOG_FILE",
        "API_KEY",
        "GEMINI_API_KEY",
        "OPENAI_API_KEY",
        "LLM_BASE_URL",
        "MODEL",
        "LLM_SYSTEM_PROMPT",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_base_config_defaults() {
    clear_env();

    let config = BaseConfig::load();

    assert_eq!(config.database_url, "./hwp_pages.db");
    assert_eq!(config.log_file, "logs/hwp-pages.log");
}

#[test]
#[serial]
fn test_app_config_with_custom_values() {
    clear_env();
    env::set_var("DATABASE_URL", "/tmp/stats.db");
    env::set_var("LOG_FILE", "/tmp/hwp.log");
    env::set_var("API_KEY", "custom_key");
    env::set_var("MODEL", "gemini-2.0-flash");

    let config = AppConfig::load().unwrap();

    assert_eq!(config.database_url(), "/tmp/stats.db");
    assert_eq!(config.log_file(), "/tmp/hwp.log");
    assert_eq!(config.llm.api_key, "custom_key");
    assert_eq!(config.llm.model, "gemini-2.0-flash");
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_app_config_requires_api_key() {
    clear_env();
    assert!(AppConfig::load().is_err());
}

#[test]
#[serial]
fn test_validate_rejects_bad_base_url() {
    clear_env();
    env::set_var("API_KEY", "k");
    env::set_var("LLM_BASE_URL", "not a url");

    let config = AppConfig::load().unwrap();

    assert!(config.validate().is_err());
    clear_env();
}
