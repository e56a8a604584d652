//! Fetch ASN listing pages from bgp.he.net.
//!
//! Carries a realistic browser header set — the site serves an interstitial
//! to clients that look like plain HTTP libraries. Transport and HTTP-status
//! failures are retried a fixed number of times with no backoff; the final
//! failure propagates to the caller, which skips the group and moves on.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://bgp.he.net";

/// Total attempts per fetch (initial request included).
const FETCH_ATTEMPTS: u32 = 3;

/// Browser identity presented to the source site.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    ),
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.9"),
    ("cache-control", "max-age=0"),
    (
        "sec-ch-ua",
        "\"Google Chrome\";v=\"123\", \"Not:A-Brand\";v=\"8\", \"Chromium\";v=\"123\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("upgrade-insecure-requests", "1"),
];

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed after {attempts} attempts: {source}")]
    Exhausted {
        url: String,
        attempts: u32,
        source: reqwest::Error,
    },
}

/// Which lookup endpoint a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// `/country/{code}` — full ASN table for a country.
    Country,
    /// `/search?search[search]={query}` — free-text / ASN search.
    Search,
}

/// HTTP fetcher for ASN listing pages.
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    /// Build a fetcher against the production endpoint.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Build a fetcher against an arbitrary base URL (tests point this at a
    /// local mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the raw HTML body for a query.
    ///
    /// Retries immediately on any transport or non-2xx failure, up to
    /// [`FETCH_ATTEMPTS`] total attempts.
    pub async fn fetch(&self, query: &str, mode: FetchMode) -> Result<String, FetchError> {
        let url = self.url_for(query, mode);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_fetch(&url, query, mode).await {
                Ok(body) => return Ok(body),
                Err(source) if attempt < FETCH_ATTEMPTS => {
                    warn!("request for {query:?} failed, retry {attempt}/{FETCH_ATTEMPTS}: {source}");
                }
                Err(source) => {
                    return Err(FetchError::Exhausted {
                        url,
                        attempts: attempt,
                        source,
                    });
                }
            }
        }
    }

    async fn try_fetch(
        &self,
        url: &str,
        query: &str,
        mode: FetchMode,
    ) -> Result<String, reqwest::Error> {
        let mut request = self.client.get(url);
        if mode == FetchMode::Search {
            request = request.query(&[("search[search]", query)]);
        }
        let response = request.send().await?.error_for_status()?;
        response.text().await
    }

    fn url_for(&self, query: &str, mode: FetchMode) -> String {
        match mode {
            FetchMode::Country => format!("{}/country/{query}", self.base_url),
            FetchMode::Search => format!("{}/search", self.base_url),
        }
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}
