//! The pagebrief library fetches web pages, extracts their readable text,
//! and generates short markdown summaries through a locally hosted
//! chat-completion endpoint.

pub mod client;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod prompt;
pub mod summarize;

use std::time::Duration;

/// Enum representing the text extraction method.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum TextBy {
    /// Use dom_smoothie for text extraction
    #[default]
    DomSmoothie,
    /// Use fast_html2md for text extraction
    FastHtml2Md,
}

impl std::str::FromStr for TextBy {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "dom_smoothie" => Ok(TextBy::DomSmoothie),
            "fast_html2md" => Ok(TextBy::FastHtml2Md),
            _ => Err(format!("Invalid text extraction method: {}", input)),
        }
    }
}

/// Immutable run configuration, resolved once at startup and passed
/// explicitly to whatever needs it.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the chat-completion endpoint.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Credential forwarded as a bearer token; local backends ignore it.
    pub api_key: String,
    /// Timeout applied to every HTTP request.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            model: constants::DEFAULT_MODEL.to_string(),
            api_key: constants::PLACEHOLDER_API_KEY.to_string(),
            request_timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub use client::{ChatProvider, InferenceClient};
pub use fetch::{HttpFetcher, PageFetcher, extract_article};
pub use prompt::{Message, Role, build_messages};
pub use summarize::{run_urls, summarize_url};
