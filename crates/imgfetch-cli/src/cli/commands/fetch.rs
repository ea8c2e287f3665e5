//! `imgfetch [URLS]` – run the fetch pipeline and print a status line per URL.

use anyhow::Result;
use imgfetch_core::config::FetchConfig;
use imgfetch_core::fetch::{CurlFetcher, Fetcher};
use imgfetch_core::pipeline::{parse_url_list, Pipeline, RunReport};
use std::io::Write;

pub fn run_fetch(cfg: &FetchConfig, line: &str) -> Result<()> {
    let fetcher = CurlFetcher::from_config(cfg);
    let stdout = std::io::stdout();
    fetch_into(fetcher, cfg, line, &mut stdout.lock())?;
    Ok(())
}

/// Run the pipeline with `fetcher`, writing status lines to `out`.
pub(crate) fn fetch_into<F: Fetcher>(
    fetcher: F,
    cfg: &FetchConfig,
    line: &str,
    out: &mut impl Write,
) -> Result<RunReport> {
    let mut pipeline = Pipeline::from_config(fetcher, cfg)?;
    let mut write_err = None;
    let report = pipeline.run_with(parse_url_list(line), |url, outcome| {
        if write_err.is_none() {
            if let Err(e) = writeln!(out, "{}", outcome.status_line(url)) {
                write_err = Some(e);
            }
        }
    });
    if let Some(e) = write_err {
        return Err(e.into());
    }
    writeln!(out, "{}", report.summary_line())?;
    tracing::info!(
        saved = report.saved(),
        skipped = report.skipped(),
        failed = report.failed(),
        "run complete"
    );
    Ok(report)
}
