//! The fetch module retrieves a web page over HTTP and extracts its readable
//! text content.

use std::time::Duration;

use async_trait::async_trait;
use dom_smoothie::{Article, CandidateSelectMode, Config, Readability, TextMode};
use html2md;
use log::debug;
use scraper::{Html, Selector as ScraperSelector};

use crate::TextBy;
use crate::error::{ConnectionError, FetchError};

/// Represents an article extracted from a webpage.
///
/// This struct contains the title and text content of the article.
#[derive(Debug)]
pub struct PageArticle {
    /// The title of the article, if available.
    pub title: Option<String>,
    /// The text content of the article.
    pub text: String,
}

/// A collaborator able to turn a URL into readable page content.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves `url` and returns its visible textual content.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails, the server responds
    /// with a non-success status, the resource is not text, or extraction
    /// fails.
    async fn fetch(&self, url: &str) -> Result<PageArticle, FetchError>;
}

/// Fetches pages over HTTP with a shared client.
pub struct HttpFetcher {
    client: reqwest::Client,
    text_by: TextBy,
}

impl HttpFetcher {
    /// Creates a fetcher with the given extraction method and request timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectionError`] if the HTTP client cannot be built.
    pub fn new(text_by: TextBy, timeout: Duration) -> Result<Self, ConnectionError> {
        let client = reqwest::Client::builder()
            .user_agent("PageBrief Bot")
            .timeout(timeout)
            .build()?;

        Ok(Self { client, text_by })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageArticle, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            // Servers that send no content type overwhelmingly serve HTML.
            .unwrap_or("text/html")
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if content_type.contains("text/html") || content_type.contains("application/xhtml") {
            let article = extract_article(&body, self.text_by.clone())?;
            debug!("Extracted {} characters from {url}", article.text.len());
            Ok(article)
        } else if content_type.starts_with("text/") {
            Ok(PageArticle {
                title: None,
                text: body,
            })
        } else {
            Err(FetchError::NotText {
                url: url.to_string(),
                content_type,
            })
        }
    }
}

/// Extracts an article from the given HTML content.
///
/// This function uses the specified text extraction method to parse the HTML
/// and extract the article.
///
/// # Arguments
///
/// * `html` - A string slice that holds the HTML content of the webpage.
/// * `text_by` - The method to use for text extraction (dom_smoothie or fast_html2md).
///
/// # Returns
///
/// A `Result` containing a `PageArticle` if the extraction is successful, or an error if it fails.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The HTML content is invalid or cannot be parsed.
/// - The chosen extraction method fails to extract the article from the HTML content.
pub fn extract_article(html: &str, text_by: TextBy) -> Result<PageArticle, FetchError> {
    let title = parse_title(html);

    match text_by {
        TextBy::DomSmoothie => {
            let config = Config {
                text_mode: TextMode::Markdown,
                candidate_select_mode: CandidateSelectMode::DomSmoothie,
                ..Default::default()
            };

            let mut readability = Readability::new(html, None, Some(config))
                .map_err(|error| FetchError::Extract(error.to_string()))?;
            let article: Article = readability
                .parse()
                .map_err(|error| FetchError::Extract(error.to_string()))?;

            Ok(PageArticle {
                title,
                text: article.text_content.to_string(),
            })
        }
        TextBy::FastHtml2Md => {
            let text = html2md::parse_html(html, false);
            Ok(PageArticle { title, text })
        }
    }
}

/// Parses the title from HTML content
fn parse_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    if let Ok(title_selector) = ScraperSelector::parse("title")
        && let Some(title_element) = document.select(&title_selector).next()
    {
        let title_text = title_element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();
        if !title_text.is_empty() {
            return Some(title_text);
        }
    }

    for tag in ["h1", "h2"] {
        if let Ok(tag_selector) = ScraperSelector::parse(tag)
            && let Some(tag_element) = document.select(&tag_selector).next()
        {
            let tag_text = tag_element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string();
            if !tag_text.is_empty() {
                return Some(tag_text);
            }
        }
    }

    None
}
