//! Per-URL outcome and the errors that can end a URL's processing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::FetchError;

/// Failure while processing one URL. Never propagates past that URL.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("write failed: {0}")]
    Storage(#[from] io::Error),
}

/// Classified result of processing one URL.
#[derive(Debug)]
pub enum Outcome {
    /// Image written to this path.
    Saved(PathBuf),
    /// Declared Content-Type does not start with `image/`.
    SkippedNotImage { content_type: String },
    /// Declared Content-Length exceeds the configured limit.
    SkippedTooLarge { content_length: u64 },
    /// Body identical to an image already saved in this run.
    SkippedDuplicate,
    Failed(PipelineError),
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            Outcome::SkippedNotImage { .. }
                | Outcome::SkippedTooLarge { .. }
                | Outcome::SkippedDuplicate
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Human-readable status line for `url`.
    pub fn status_line(&self, url: &str) -> String {
        match self {
            Outcome::Saved(path) => format!("Image saved: {}", path.display()),
            Outcome::SkippedNotImage { content_type } => {
                format!("Skipping {url}: Not an image (Content-Type: {content_type})")
            }
            Outcome::SkippedTooLarge { content_length } => {
                format!("Skipping {url}: File too large ({content_length} bytes)")
            }
            Outcome::SkippedDuplicate => format!("Skipping {url}: Duplicate image detected"),
            Outcome::Failed(e) => format!("Failed to fetch {url}. Error: {e}"),
        }
    }
}
