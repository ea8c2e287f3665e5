//! CLI for imgfetch.

mod commands;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config::{self, FetchConfig};
use std::path::PathBuf;

use commands::{prompt_for_urls, run_fetch};

/// Fetch images from a list of URLs, skipping non-images, oversized files and duplicates.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(
    about = "Fetch, validate and deduplicate images into a local directory",
    long_about = None
)]
pub struct Cli {
    /// Comma-separated image URLs. Prompted for on stdin when omitted.
    pub urls: Option<String>,

    /// Directory to save images into (default from config: Fetched_Images).
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds, at least 1 (default from config: 10).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.apply(config::load_or_init()?);
        tracing::debug!("effective config: {:?}", cfg);

        let line = match cli.urls {
            Some(line) => line,
            None => prompt_for_urls()?,
        };
        run_fetch(&cfg, &line)?;
        Ok(())
    }

    /// Overlay command-line flags on the loaded config.
    fn apply(&self, mut cfg: FetchConfig) -> FetchConfig {
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
        cfg
    }
}

#[cfg(test)]
mod tests;
