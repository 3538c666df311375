//! pagebrief is a CLI tool that fetches web pages and prints short markdown
//! summaries generated by a locally hosted LLM.
//!
//! With no argument it summarizes a built-in list of websites; with a single
//! URL argument it summarizes that page only. The inference endpoint must
//! expose an OpenAI-compatible chat-completion API (e.g. Ollama).

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, error, info};

use pagebrief::{
    Config, TextBy,
    client::InferenceClient,
    constants::{
        DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, DEFAULT_URLS,
        MODEL_API_KEY_ENV_NAME, PLACEHOLDER_API_KEY,
    },
    error::ConnectionError,
    fetch::HttpFetcher,
    summarize::{SummarizeContext, run_urls},
};

/// A CLI tool to summarize web pages with a locally hosted LLM
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The URL to summarize; omit to summarize the built-in default list
    url: Option<String>,

    /// Base URL of the chat-completion endpoint
    #[arg(long, short, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Model identifier sent with each request
    #[arg(long, short, default_value = DEFAULT_MODEL)]
    model: String,

    /// HTTP request timeout in seconds
    #[arg(long, short, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Text extraction method: "dom_smoothie" (default) or "fast_html2md"
    #[arg(long, default_value = "dom_smoothie")]
    text_by: TextBy,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let api_key = match std::env::var(MODEL_API_KEY_ENV_NAME) {
        Ok(model_key) => {
            info!("Using API key from {MODEL_API_KEY_ENV_NAME}");
            model_key
        }
        Err(_) => PLACEHOLDER_API_KEY.to_string(),
    };

    let config = Config {
        endpoint: cli.endpoint,
        model: cli.model,
        api_key,
        request_timeout: Duration::from_secs(cli.timeout),
    };

    let urls: Vec<String> = match cli.url {
        Some(url) => vec![url],
        None => {
            info!("No URL provided. Summarizing default websites...");
            DEFAULT_URLS.iter().map(|url| (*url).to_string()).collect()
        }
    };

    let (client, fetcher) = match build_handles(&config, cli.text_by) {
        Ok(handles) => handles,
        Err(cause) => {
            error!("Unable to configure inference client: {cause}");
            error!(
                "Check that your inference server is running at {} (for Ollama: `ollama serve`)",
                config.endpoint
            );
            error!(
                "Then make sure the model is available (`ollama pull {}`)",
                config.model
            );
            std::process::exit(1);
        }
    };

    info!(
        "Using inference endpoint {} with model {}",
        config.endpoint, config.model
    );

    let ctx = SummarizeContext {
        fetcher: &fetcher,
        provider: &client,
    };
    let outcomes = run_urls(&urls, &ctx).await;

    let failed = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .count();
    info!(
        "Done: {}/{} pages summarized",
        outcomes.len() - failed,
        outcomes.len()
    );

    Ok(())
}

fn build_handles(
    config: &Config,
    text_by: TextBy,
) -> Result<(InferenceClient, HttpFetcher), ConnectionError> {
    let client = InferenceClient::connect(config)?;
    let fetcher = HttpFetcher::new(text_by, config.request_timeout)?;

    Ok((client, fetcher))
}
