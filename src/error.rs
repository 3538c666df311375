//! Error types for the startup, fetch, and inference paths.

use thiserror::Error;

/// Failure to construct an HTTP handle at startup. Fatal for the whole run.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure to retrieve or extract one page's content.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("{url} is not a text resource ({content_type})")]
    NotText { url: String, content_type: String },
    #[error("failed to extract readable text: {0}")]
    Extract(String),
}

/// Failure while talking to the inference endpoint.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to inference endpoint failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("inference endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed completion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("completion response contained no choices")]
    NoChoices,
}

/// Per-URL failure. Reported with the offending URL, never aborts the run.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
