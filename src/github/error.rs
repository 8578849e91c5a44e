//! # GitHub API Error Types

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the GitHub REST API
///
/// Every variant is fatal to the run; there is no retry. The distinction only
/// matters for the diagnostics printed by the top-level handler.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Request never produced a usable response (DNS, TLS, connect, body read)
    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured token cannot be carried in an HTTP header
    #[error("GITHUB_TOKEN is not a valid header value: {0}")]
    Credential(#[from] reqwest::header::InvalidHeaderValue),

    /// The API answered with a non-success status
    #[error("GitHub API returned {status} for {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },
}

impl GithubError {
    /// Whether this failure looks like a rejected or under-scoped credential
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}
