//! Base config: statistics database and logging. Loaded from env.

use std::env;

pub const DEFAULT_DATABASE_URL: &str = "./hwp_pages.db";
pub const DEFAULT_LOG_FILE: &str = "logs/hwp-pages.log";

/// Base config: storage and logging only; no API key needed.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// DATABASE_URL: statistics store (SQLite file path or `sqlite:` URL)
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    pub fn load() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Self {
            database_url,
            log_file,
        }
    }
}
