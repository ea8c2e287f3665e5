//! Fetch pipeline: fetch → validate → dedup → name → persist, one URL at a time.
//!
//! URLs are processed strictly in input order on the calling thread. The only
//! state carried between URLs is the run's set of content fingerprints, owned
//! by the [`Pipeline`] and dropped with it.

mod input;
mod outcome;
mod report;

pub use input::parse_url_list;
pub use outcome::{Outcome, PipelineError};
pub use report::RunReport;

use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::checksum::{self, Fingerprint};
use crate::config::FetchConfig;
use crate::fetch::Fetcher;
use crate::storage::ImageDir;
use crate::url_model::derive_filename;

/// Content-Type prefix a response must declare to be saved.
const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// One run of the image fetcher.
pub struct Pipeline<F: Fetcher> {
    fetcher: F,
    dir: ImageDir,
    max_content_length: u64,
    seen: HashSet<Fingerprint>,
}

impl<F: Fetcher> Pipeline<F> {
    /// Create a pipeline writing into `output_dir`, creating the directory now.
    pub fn new(
        fetcher: F,
        output_dir: impl Into<PathBuf>,
        max_content_length: u64,
    ) -> Result<Self> {
        let dir = ImageDir::create(output_dir)?;
        Ok(Pipeline {
            fetcher,
            dir,
            max_content_length,
            seen: HashSet::new(),
        })
    }

    pub fn from_config(fetcher: F, cfg: &FetchConfig) -> Result<Self> {
        Self::new(fetcher, cfg.output_dir.clone(), cfg.max_content_length)
    }

    pub fn output_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Number of distinct images committed so far in this run.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Process every entry in order and collect the outcomes.
    pub fn run<'a, I>(&mut self, urls: I) -> RunReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.run_with(urls, |_, _| {})
    }

    /// Like [`Pipeline::run`], calling `on_outcome` as soon as each URL finishes.
    pub fn run_with<'a, I, C>(&mut self, urls: I, mut on_outcome: C) -> RunReport
    where
        I: IntoIterator<Item = &'a str>,
        C: FnMut(&str, &Outcome),
    {
        let mut report = RunReport::default();
        for raw in urls {
            let url = raw.trim();
            if let Some(outcome) = self.process_url(url) {
                on_outcome(url, &outcome);
                report.push(url.to_string(), outcome);
            }
        }
        report
    }

    /// Process one raw input entry. Returns `None` for blank entries.
    pub fn process_url(&mut self, raw: &str) -> Option<Outcome> {
        let url = raw.trim();
        if url.is_empty() {
            return None;
        }
        let outcome = self.process(url);
        log_outcome(url, &outcome);
        Some(outcome)
    }

    fn process(&mut self, url: &str) -> Outcome {
        let response = match self.fetcher.fetch(url) {
            Ok(r) => r,
            Err(e) => return Outcome::Failed(e.into()),
        };

        let content_type = response.content_type();
        if !content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX) {
            return Outcome::SkippedNotImage {
                content_type: content_type.to_string(),
            };
        }

        // Advisory: based on the declared header only.
        if let Some(len) = response.content_length() {
            if len > self.max_content_length {
                return Outcome::SkippedTooLarge {
                    content_length: len,
                };
            }
        }

        let fp = checksum::fingerprint(&response.body);
        if !self.seen.insert(fp) {
            return Outcome::SkippedDuplicate;
        }
        tracing::debug!(url, fingerprint = %fp, "new image");

        // The fingerprint stays committed even if the write below fails.
        let filename = derive_filename(url, content_type);
        match self.dir.write(&filename, &response.body) {
            Ok(path) => Outcome::Saved(path),
            Err(e) => Outcome::Failed(e.into()),
        }
    }
}

fn log_outcome(url: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Saved(path) => tracing::info!(url, path = %path.display(), "image saved"),
        Outcome::SkippedNotImage { content_type } => {
            tracing::warn!(url, content_type = %content_type, "skipped: not an image")
        }
        Outcome::SkippedTooLarge { content_length } => {
            tracing::warn!(url, content_length, "skipped: too large")
        }
        Outcome::SkippedDuplicate => tracing::warn!(url, "skipped: duplicate"),
        Outcome::Failed(e) => tracing::warn!(url, error = %e, "failed"),
    }
}
