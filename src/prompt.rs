//! The prompt module assembles the ordered chat messages sent to the model.

use serde::Serialize;

use crate::constants::{SYSTEM_PROMPT, USER_PROMPT_PREFIX};

/// Message origin understood by chat-completion backends.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Behavioral instructions for the model.
    System,
    /// Content supplied on behalf of the user.
    User,
}

/// A single role-tagged entry of a chat-completion request.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Builds the request messages for one page: the fixed system instruction
/// first, then a user message with the page content appended to the prompt
/// prefix. Backends treat the first system entry specially, so the order is
/// fixed.
pub fn build_messages(content: &str) -> Vec<Message> {
    vec![
        Message {
            role: Role::System,
            content: SYSTEM_PROMPT.to_string(),
        },
        Message {
            role: Role::User,
            content: format!("{USER_PROMPT_PREFIX}{content}"),
        },
    ]
}
