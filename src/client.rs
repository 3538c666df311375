//! The client module holds the configured handle to the chat-completion
//! endpoint and the wire types of its request and response bodies.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Config;
use crate::error::{ConnectionError, TransportError};
use crate::prompt::Message;

/// A backend able to answer a single chat-completion request.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the ordered messages and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the endpoint is unreachable, responds
    /// with a non-success status, returns a body the client cannot decode,
    /// or returns no choices.
    async fn complete(&self, messages: &[Message]) -> Result<String, TransportError>;
}

/// Request body of the chat-completion call.
#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

/// Response body of the chat-completion call, limited to the fields read here.
#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: GeneratedMessage,
}

#[derive(Deserialize, Debug)]
pub struct GeneratedMessage {
    pub content: String,
}

/// Configured handle to an OpenAI-compatible chat-completion endpoint.
pub struct InferenceClient {
    http: reqwest::Client,
    completions_url: Url,
    model: String,
    api_key: String,
}

impl InferenceClient {
    /// Builds a client for the endpoint described by `config`. Construction
    /// is local; nothing is sent until [`ChatProvider::complete`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectionError`] if the endpoint is not a valid URL or
    /// the HTTP client cannot be built.
    pub fn connect(config: &Config) -> Result<Self, ConnectionError> {
        let completions_url = Url::parse(&format!(
            "{}/chat/completions",
            config.endpoint.trim_end_matches('/')
        ))?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            completions_url,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatProvider for InferenceClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, TransportError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(self.completions_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::Status { status, body });
        }

        debug!("Completion response: {body}");
        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(TransportError::NoChoices)
    }
}
