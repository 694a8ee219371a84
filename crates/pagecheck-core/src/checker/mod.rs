//! On-demand page checks: one HTTP GET plus metadata extraction.
//!
//! A check is a point-in-time snapshot of a page: the response status and
//! the page's first `<h1>`, its `<title>`, and its meta description. Each
//! check is exactly one GET with the client's stock behavior: no timeout,
//! no retries, redirects followed per the client default. The recorded
//! status is the final response's.

mod extract;

use thiserror::Error;

pub use extract::{page_metadata, PageMetadata};

/// Outcome of a successful page check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// HTTP status of the final response.
    pub status_code: u16,
    /// Text of the first `<h1>`, empty when the page has none.
    pub h1: String,
    /// Text of the `<title>`, empty when absent.
    pub title: String,
    /// `content` of `<meta name="description">`, when present.
    pub description: Option<String>,
}

/// Why a check produced no outcome.
///
/// Both variants display the same uniform notice: callers surface one
/// failure condition whether the fetch died on the wire or the server
/// answered with an error status. The distinction stays available for
/// logs via the variant itself.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The GET itself failed: DNS, connect, TLS, or mid-body transport.
    #[error("page check failed")]
    Request(reqwest::Error),
    /// The final response carried an error status (>= 400).
    #[error("page check failed")]
    Status(u16),
}

/// Issues page checks over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct PageChecker {
    client: reqwest::Client,
}

impl PageChecker {
    /// Builds a checker with the stock client: default redirect policy,
    /// no timeout, no retries.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pagecheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` once and extracts its metadata.
    ///
    /// 2xx and 3xx responses are checkable; anything >= 400, or any
    /// transport failure, is a [`CheckError`].
    pub async fn check(&self, url: &str) -> Result<CheckOutcome, CheckError> {
        tracing::debug!(url, "fetching page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CheckError::Request)?;

        let status = response.status().as_u16();
        if status >= 400 {
            tracing::debug!(url, status, "page answered with an error status");
            return Err(CheckError::Status(status));
        }

        let body = response.text().await.map_err(CheckError::Request)?;
        let meta = page_metadata(&body);
        Ok(CheckOutcome {
            status_code: status,
            h1: meta.h1,
            title: meta.title,
            description: meta.description,
        })
    }
}
