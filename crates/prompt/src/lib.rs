//! # Prompt
//!
//! Builds the natural-language instruction sent to the text-generation model.
//!
//! ## Format
//!
//! `Here is a list of document titles: "<t1>", "<t2>". Generate a single, concise, and
//! overarching title ... Respond with only the generated title.`
//!
//! Titles are quoted and joined with `", "` exactly as entered; no escaping is applied.
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to LLM APIs (Gemini via its OpenAI-compatible endpoint, OpenAI, etc.).

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Text placed before the quoted title list.
pub const TITLE_LIST_PREFIX: &str = "Here is a list of document titles: ";

/// Instruction placed after the quoted title list.
pub const TITLE_INSTRUCTION: &str = "Generate a single, concise, and overarching title that summarizes all of them. The new title should capture the core theme of all the provided titles. Respond with only the generated title.";

/// Builds the single-prompt instruction asking for one overarching title.
///
/// # Arguments
///
/// * `titles` - Non-blank document titles in document order
///
/// # Returns
///
/// The prompt string. Callers skip the model entirely when `titles` is empty.
pub fn build_title_prompt<I, T>(titles: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let titles: Vec<String> = titles
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect();
    let mut out = String::from(TITLE_LIST_PREFIX);
    out.push('"');
    out.push_str(&titles.join("\", \""));
    out.push_str("\". ");
    out.push_str(TITLE_INSTRUCTION);
    out
}

/// Wraps a prompt as a message list: optional system message first, then one User message.
pub fn build_messages(system_message: Option<&str>, prompt: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);
    if let Some(msg) = system_message {
        messages.push(ChatMessage::system(msg));
    }
    messages.push(ChatMessage::user(prompt));
    messages
}
