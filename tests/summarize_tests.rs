use crate::summarize_extras::{RecordingProvider, StubFetcher};
use pagebrief::constants::SYSTEM_PROMPT;
use pagebrief::prompt::Role;
use pagebrief::summarize::{SummarizeContext, run_urls, summarize_url};
use spectral::assert_that;

mod summarize_extras;

assert_summaries![
    filled_think_removed:
        response => "<think>This is inside think tags</think>\n# Summary\nTest content",
        result => "# Summary\nTest content",
    empty_think_removed:
        response => "<think>\n</think>\n# Summary\nTest content",
        result => "# Summary\nTest content",
    plain_response_trimmed:
        response => "\n# Summary\nTest content\n",
        result => "# Summary\nTest content",
];

#[tokio::test]
async fn round_trip_returns_exact_summary_and_request() {
    let fetcher = StubFetcher::new("Hello world");
    let provider = RecordingProvider::new("# Summary\nHello.".to_owned());
    let context = SummarizeContext {
        fetcher: &fetcher,
        provider: &provider,
    };

    let page = summarize_url("https://example.com", &context)
        .await
        .expect("Expected successful summarization.");

    assert_that(&page.summary).is_equal_to("# Summary\nHello.".to_owned());

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);

    let messages = requests.first().expect("One request recorded.");
    assert_eq!(messages.len(), 2);

    let system = messages.first().expect("System message present.");
    assert_that(&system.role).is_equal_to(Role::System);
    assert_that(&system.content.as_str()).is_equal_to(SYSTEM_PROMPT);

    let user = messages.get(1).expect("User message present.");
    assert_that(&user.role).is_equal_to(Role::User);
    assert!(user.content.ends_with("Hello world"));
}

#[tokio::test]
async fn failed_fetch_does_not_abort_the_run() {
    let urls: Vec<String> = [
        "https://a.example",
        "https://b.example",
        "https://c.example",
    ]
    .iter()
    .map(|url| (*url).to_string())
    .collect();

    let fetcher = StubFetcher::new("page text").failing_for("https://b.example");
    let provider = RecordingProvider::new("a summary".to_owned());
    let context = SummarizeContext {
        fetcher: &fetcher,
        provider: &provider,
    };

    let outcomes = run_urls(&urls, &context).await;

    assert_eq!(outcomes.len(), 3);
    for (outcome, url) in outcomes.iter().zip(&urls) {
        assert_that(&outcome.url).is_equal_to(url);
    }

    let failures: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .map(|outcome| outcome.url.as_str())
        .collect();
    assert_eq!(failures, ["https://b.example"]);
}

#[tokio::test]
async fn failed_inference_call_does_not_abort_the_run() {
    let urls: Vec<String> = [
        "https://a.example",
        "https://b.example",
        "https://c.example",
    ]
    .iter()
    .map(|url| (*url).to_string())
    .collect();

    let fetcher = StubFetcher::new("page text");
    let provider = RecordingProvider::new("a summary".to_owned()).failing_on_request(2);
    let context = SummarizeContext {
        fetcher: &fetcher,
        provider: &provider,
    };

    let outcomes = run_urls(&urls, &context).await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(provider.requests().len(), 3);

    let failures: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .map(|outcome| outcome.url.as_str())
        .collect();
    assert_eq!(failures, ["https://b.example"]);
}

#[tokio::test]
async fn single_url_produces_single_attempt() {
    let urls = ["https://only.example".to_string()];

    let fetcher = StubFetcher::new("page text");
    let provider = RecordingProvider::new("a summary".to_owned());
    let context = SummarizeContext {
        fetcher: &fetcher,
        provider: &provider,
    };

    let outcomes = run_urls(&urls, &context).await;

    assert_eq!(outcomes.len(), 1);
    assert_eq!(provider.requests().len(), 1);
    let outcome = outcomes.first().expect("One outcome recorded.");
    assert!(outcome.result.is_ok());
}
