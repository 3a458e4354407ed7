//! Authentication token: a self-reported, unsigned summary of one completed run.
//!
//! Format: `{TAG}/{cumulative_days}/{title}/1/{total_pages}/{reading_minutes}`.
//! Carries no cryptographic guarantee; it is formatted text for manual verification.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Fixed tag that opens every token.
pub const TOKEN_TAG: &str = "푸코";

pub const TOKEN_DELIMITER: &str = "/";

/// Assumed reading speed.
pub const MINUTES_PER_PAGE: u64 = 3;

const SESSION_MARKER: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticationToken {
    pub cumulative_days: u64,
    pub title: String,
    pub total_pages: u64,
}

impl AuthenticationToken {
    pub fn new(cumulative_days: u64, title: impl Into<String>, total_pages: u64) -> Self {
        Self {
            cumulative_days,
            title: title.into(),
            total_pages,
        }
    }

    pub fn reading_time_minutes(&self) -> u64 {
        self.total_pages * MINUTES_PER_PAGE
    }
}

impl fmt::Display for AuthenticationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            TOKEN_TAG.to_string(),
            self.cumulative_days.to_string(),
            self.title.clone(),
            SESSION_MARKER.to_string(),
            self.total_pages.to_string(),
            self.reading_time_minutes().to_string(),
        ];
        f.write_str(&parts.join(TOKEN_DELIMITER))
    }
}

/// Serializes the parts together with the rendered `text`, so JSON consumers get the exact token.
impl Serialize for AuthenticationToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AuthenticationToken", 5)?;
        state.serialize_field("cumulative_days", &self.cumulative_days)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("total_pages", &self.total_pages)?;
        state.serialize_field("reading_time_minutes", &self.reading_time_minutes())?;
        state.serialize_field("text", &self.to_string())?;
        state.end()
    }
}
