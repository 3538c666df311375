pub const MODEL_API_KEY_ENV_NAME: &str = "PAGEBRIEF_MODEL_API_KEY";

/// Ollama's OpenAI-compatible endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/v1";

pub const DEFAULT_MODEL: &str = "llama3.2";

/// Local backends accept any key, the request shape still carries one.
pub const PLACEHOLDER_API_KEY: &str = "ollama";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Pages summarized when no URL argument is given.
pub const DEFAULT_URLS: [&str; 3] = [
    "https://edwarddonner.com",
    "https://anthropic.com",
    "https://cnn.com",
];

pub(crate) const THINK_STRIPPER: &str = r"<think>[\s\S]*</think>\s*";

pub const SYSTEM_PROMPT: &str = r#"You are a snarky assistant that analyzes the contents of a website,
and provides a short, snarky, humorous summary, ignoring text that might be navigation related.
Respond in markdown. Do not wrap the markdown in a code block - respond just with the markdown."#;

/// Prepended to the scraped content; keeps its own trailing separator.
pub const USER_PROMPT_PREFIX: &str = r#"Here are the contents of a website.
Provide a short summary of this website.
If it includes news or announcements, then summarize these too.

"#;
