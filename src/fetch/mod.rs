// src/fetch/mod.rs

use std::env;
use std::future::Future;
use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client, Response, StatusCode};
use thiserror::Error;
use tracing::warn;

use crate::config::Source;

/// Environment variable holding a GitHub token for private repos.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Longest slice of an error response body carried into an error message.
const SNIPPET_CHARS: usize = 200;

/// Everything a download can fail with, tagged so the retry loop can decide
/// retry-vs-propagate without string matching.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(
        "file not found at {url}\n\
         - check the file, directory and branch names\n\
         - if the repo is private, set GITHUB_TOKEN"
    )]
    NotFound { url: String },

    #[error("access denied (403) for {url}; a GITHUB_TOKEN may be required for a private repo")]
    PermissionDenied { url: String },

    #[error("download failed (HTTP {status}): {snippet}")]
    TransferFailed { status: StatusCode, snippet: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// Whether another attempt could plausibly succeed. Missing files and
    /// rejected credentials stay missing and rejected; only network hiccups
    /// and server-side failures are worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::TransferFailed { status, .. } => status.is_server_error(),
            FetchError::NotFound { .. } | FetchError::PermissionDenied { .. } => false,
        }
    }
}

/// Stable raw-content URL for a file in the configured repository.
/// Values are substituted verbatim; GitHub raw paths are not URL-encoded here.
pub fn raw_url(src: &Source, path: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/{}/{}",
        src.owner, src.repo, src.branch, path
    )
}

/// Token from the environment, read at call time. Empty or unset means
/// anonymous access, which is fine for public repos.
fn auth_token() -> Option<String> {
    env::var(TOKEN_ENV)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Download the raw bytes at `url`, retrying transient failures up to the
/// configured attempt budget with a fixed pause between attempts.
pub async fn fetch_bytes(client: &Client, src: &Source, url: &str) -> Result<Vec<u8>, FetchError> {
    retry(src.max_attempts, src.retry_delay, move || async move {
        let mut req = client.get(url);
        if let Some(token) = auth_token() {
            req = req.header(AUTHORIZATION, format!("token {token}"));
        }
        let resp = req.send().await?;
        classify(resp, url).await
    })
    .await
}

/// Turn a completed response into payload bytes or a classified error.
async fn classify(resp: Response, url: &str) -> Result<Vec<u8>, FetchError> {
    let status = resp.status();
    if status == StatusCode::OK {
        return Ok(resp.bytes().await?.to_vec());
    }
    // The body is only interesting for the error message; if reading it
    // fails too, the status alone still tells the story.
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body, url))
}

fn status_error(status: StatusCode, body: &str, url: &str) -> FetchError {
    match status {
        StatusCode::NOT_FOUND => FetchError::NotFound {
            url: url.to_string(),
        },
        StatusCode::FORBIDDEN => FetchError::PermissionDenied {
            url: url.to_string(),
        },
        _ => FetchError::TransferFailed {
            status,
            snippet: body.chars().take(SNIPPET_CHARS).collect(),
        },
    }
}

/// Run `attempt` up to `max_attempts` times, sleeping `delay` after each
/// transient failure. Permanent failures and the final attempt's error
/// propagate unchanged.
async fn retry<T, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    mut attempt: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut tries = 0;
    loop {
        tries += 1;
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && tries < max_attempts => {
                warn!(attempt = tries, error = %err, "transient fetch failure, retrying");
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
