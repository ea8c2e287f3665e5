//! HTTP fetch collaborator.
//!
//! Uses the curl crate (libcurl) for one GET per URL: redirects followed,
//! a total timeout, and an identifying `User-Agent`. The pipeline only sees
//! the [`Fetcher`] trait so tests can serve canned responses.

mod error;
mod parse;

pub use error::{is_error_status, FetchError};

use std::num::IntErrorKind;
use std::time::Duration;

use crate::config::FetchConfig;

/// Upper bound on redirects followed for a single URL.
const MAX_REDIRECTS: u32 = 10;

/// URL schemes the fetcher will request.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

// libcurl error codes used for URLs rejected before any request is made.
const CURLE_UNSUPPORTED_PROTOCOL: u32 = 1;
const CURLE_URL_MALFORMAT: u32 = 3;

/// Reject anything but an absolute http(s) URL.
fn check_scheme(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url)
        .map_err(|_| FetchError::Transport(curl::Error::new(CURLE_URL_MALFORMAT)))?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(FetchError::Transport(curl::Error::new(CURLE_UNSUPPORTED_PROTOCOL)));
    }
    Ok(())
}

/// A completed HTTP response: status, final headers, and the full body.
#[derive(Debug, Clone, Default)]
pub struct FetchResponse {
    pub status: u32,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Case-insensitive header lookup (first match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Declared `Content-Type`, or `""` when absent.
    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or("")
    }

    /// Declared `Content-Length`, if present and an integer.
    /// Values too large for `u64` saturate to `u64::MAX`.
    pub fn content_length(&self) -> Option<u64> {
        let value = self.header("content-length")?.trim();
        match value.parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
            Err(_) => None,
        }
    }
}

/// Retrieves a URL. Implementations perform exactly one attempt.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// [`Fetcher`] backed by a libcurl easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    timeout: Duration,
    user_agent: String,
}

impl CurlFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config(cfg: &FetchConfig) -> Self {
        Self::new(Duration::from_secs(cfg.timeout_secs), cfg.user_agent.clone())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Fetcher for CurlFetcher {
    /// Runs in the current thread and blocks until the body is complete or
    /// the timeout fires.
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        check_scheme(url)?;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.useragent(&self.user_agent)?;
        easy.timeout(self.timeout)?;

        tracing::debug!(url, timeout_secs = self.timeout.as_secs(), "GET");

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                header_lines.push(parse::header_line(data));
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if is_error_status(status) {
            return Err(FetchError::HttpStatus { code: status });
        }

        tracing::debug!(url, status, bytes = body.len(), "GET complete");

        Ok(FetchResponse {
            status,
            headers: parse::parse_headers(&header_lines),
            body,
        })
    }
}
