use std::sync::Mutex;

use async_trait::async_trait;
use pagebrief::client::ChatProvider;
use pagebrief::error::{FetchError, TransportError};
use pagebrief::fetch::{PageArticle, PageFetcher};
use pagebrief::prompt::Message;

#[macro_export]
macro_rules! assert_summaries {
    (
        $(
            $test_name:ident : response => $response:expr, result => $result:expr
        ),+ $(,)?
    ) => {
        $(
            #[tokio::test]
            async fn $test_name() {
                let fetcher = StubFetcher::new("Some page text");
                let provider = RecordingProvider::new($response.to_owned());
                let context = pagebrief::summarize::SummarizeContext {
                    fetcher: &fetcher,
                    provider: &provider,
                };
                let outcome = pagebrief::summarize::summarize_url("https://example.com", &context)
                    .await
                    .expect("Expected successful summarization.");

                assert_that(&outcome.summary).is_equal_to($result.to_owned());
            }
        )+
    }
}

/// Fetcher stub serving a fixed text, optionally failing for one URL.
pub(crate) struct StubFetcher {
    text: String,
    failing_url: Option<String>,
}

impl StubFetcher {
    pub(crate) fn new(text: &str) -> Self {
        StubFetcher {
            text: text.to_owned(),
            failing_url: None,
        }
    }

    pub(crate) fn failing_for(mut self, url: &str) -> Self {
        self.failing_url = Some(url.to_owned());
        self
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<PageArticle, FetchError> {
        if self.failing_url.as_deref() == Some(url) {
            return Err(FetchError::NotText {
                url: url.to_owned(),
                content_type: "application/pdf".to_owned(),
            });
        }

        Ok(PageArticle {
            title: None,
            text: self.text.clone(),
        })
    }
}

/// Chat-completion stub that records every request it receives and answers
/// with a fixed response, optionally failing on the n-th request.
pub(crate) struct RecordingProvider {
    response_content: String,
    fail_on_request: Option<usize>,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl RecordingProvider {
    pub(crate) fn new(response_content: String) -> Self {
        RecordingProvider {
            response_content,
            fail_on_request: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_on_request(mut self, ordinal: usize) -> Self {
        self.fail_on_request = Some(ordinal);
        self
    }

    pub(crate) fn requests(&self) -> Vec<Vec<Message>> {
        self.seen.lock().expect("Request log mutex poisoned").clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingProvider {
    async fn complete(&self, messages: &[Message]) -> Result<String, TransportError> {
        let mut seen = self.seen.lock().expect("Request log mutex poisoned");
        seen.push(messages.to_vec());

        if self.fail_on_request == Some(seen.len()) {
            return Err(TransportError::NoChoices);
        }

        Ok(self.response_content.clone())
    }
}
