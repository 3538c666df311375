//! The summarize module orchestrates fetching a page, prompting the model,
//! and cleaning up the generated summary.

use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::client::ChatProvider;
use crate::constants::THINK_STRIPPER;
use crate::error::SummarizeError;
use crate::fetch::PageFetcher;
use crate::prompt::build_messages;

static THINK_STRIPPER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(THINK_STRIPPER).expect("Failed to compile THINK_STRIPPER regex"));

/// Configuration containing shared collaborators for summarization runs
pub struct SummarizeContext<'a> {
    /// Collaborator that retrieves page content
    pub fetcher: &'a dyn PageFetcher,
    /// Chat-completion backend producing the summaries
    pub provider: &'a dyn ChatProvider,
}

/// Summary produced for one page.
#[derive(Debug)]
pub struct PageSummary {
    /// Page title recovered during fetching, if any.
    pub title: Option<String>,
    /// Generated markdown summary.
    pub summary: String,
}

/// Result of one URL's trial.
#[derive(Debug)]
pub struct UrlOutcome {
    pub url: String,
    pub result: Result<PageSummary, SummarizeError>,
}

/// Fetches a single page and generates its summary using the model.
///
/// Reasoning models interleave `<think>` blocks into their replies; these are
/// stripped and the remaining text is trimmed before it is returned.
///
/// # Arguments
///
/// * `url` - The URL of the page to summarize
/// * `ctx` - Context containing the fetcher and the chat-completion backend
///
/// # Returns
///
/// Returns the page summary together with the recovered title
///
/// # Errors
///
/// Returns an error if:
/// * The page cannot be fetched or its content extracted
/// * The inference call fails
pub async fn summarize_url(
    url: &str,
    ctx: &SummarizeContext<'_>,
) -> Result<PageSummary, SummarizeError> {
    info!("Fetching website content from {url}");
    let article = ctx.fetcher.fetch(url).await?;

    info!("Generating summary...");
    let messages = build_messages(&article.text);
    let response = ctx.provider.complete(&messages).await?;

    let summary = THINK_STRIPPER_REGEX
        .replace_all(&response, "")
        .to_string()
        .trim()
        .to_owned();

    Ok(PageSummary {
        title: article.title,
        summary,
    })
}

/// Processes the URLs strictly in order, one at a time. Each successful
/// summary is printed as a markdown section as soon as it is ready; a failed
/// URL is reported and the loop moves on to the next one. All outcomes are
/// returned in input order.
pub async fn run_urls(urls: &[String], ctx: &SummarizeContext<'_>) -> Vec<UrlOutcome> {
    let mut outcomes = Vec::with_capacity(urls.len());

    for url in urls {
        let result = summarize_url(url, ctx).await;
        match &result {
            Ok(page) => {
                let heading = page
                    .title
                    .as_ref()
                    .map(|title| format!("[{title}]({url})"))
                    .unwrap_or_else(|| url.clone());
                println!("## {heading}\n\n{}\n", page.summary);
            }
            Err(cause) => error!("Failed to summarize {url}: {cause}"),
        }

        outcomes.push(UrlOutcome {
            url: url.clone(),
            result,
        });
    }

    outcomes
}
