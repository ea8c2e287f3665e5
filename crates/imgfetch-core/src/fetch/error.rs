//! Fetch error type, classified from curl failures and HTTP status.

use thiserror::Error;

/// Why a single GET did not produce a usable response. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded its timeout.
    #[error("timed out: {0}")]
    Timeout(#[source] curl::Error),
    /// Connection, DNS, TLS, redirect or protocol failure reported by curl.
    #[error("{0}")]
    Transport(#[source] curl::Error),
    /// The final response carried an HTTP error status (4xx/5xx).
    #[error("HTTP {code}")]
    HttpStatus { code: u32 },
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            FetchError::Timeout(e)
        } else {
            FetchError::Transport(e)
        }
    }
}

/// True if `code` is an HTTP error status.
pub fn is_error_status(code: u32) -> bool {
    code >= 400
}
