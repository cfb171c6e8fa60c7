//! Blocking page fetcher.
//!
//! One GET per harvest run: no retries, no caching. The request timeout and
//! redirect limit come from `[fetch]` configuration.

use std::time::Duration;

use crate::config::FetchConfig;

/// Ways a page fetch can fail. All are fatal to the run.
#[derive(Debug)]
pub enum FetchError {
    /// The URL did not parse, or is not http/https.
    InvalidUrl(String),
    /// DNS, TLS, connect, or timeout failure before a response arrived.
    Transport(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The response arrived but its body could not be read as text.
    Body(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidUrl(e) => write!(f, "invalid URL: {}", e),
            FetchError::Transport(e) => write!(f, "request failed: {}", e),
            FetchError::Status(code) => write!(f, "server returned HTTP {}", code),
            FetchError::Body(e) => write!(f, "failed to read response body: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Fetch a page and return its body as text.
pub fn fetch_page(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let parsed =
        reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                other, url
            )))
        }
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let response = client
        .get(parsed)
        .send()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    response.text().map_err(|e| FetchError::Body(e.to_string()))
}
