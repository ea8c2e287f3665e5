//! CLI parse tests.

use super::Cli;
use clap::Parser;
use imgfetch_core::config::FetchConfig;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args() {
    let cli = parse(&["imgfetch"]);
    assert!(cli.urls.is_none());
    assert!(cli.output_dir.is_none());
    assert!(cli.timeout.is_none());
}

#[test]
fn cli_parse_urls() {
    let cli = parse(&["imgfetch", "https://a.com/x.png,https://b.com/y.gif"]);
    assert_eq!(
        cli.urls.as_deref(),
        Some("https://a.com/x.png,https://b.com/y.gif")
    );
}

#[test]
fn cli_parse_flags() {
    let cli = parse(&[
        "imgfetch",
        "--output-dir",
        "/tmp/pics",
        "--timeout",
        "30",
        "https://a.com/x.png",
    ]);
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("/tmp/pics")));
    assert_eq!(cli.timeout, Some(30));

    let short = parse(&["imgfetch", "-o", "out"]);
    assert_eq!(short.output_dir.as_deref(), Some(Path::new("out")));
}

#[test]
fn cli_parse_rejects_bad_timeout() {
    assert!(Cli::try_parse_from(["imgfetch", "--timeout", "soon"]).is_err());
}

#[test]
fn cli_parse_rejects_zero_timeout() {
    assert!(Cli::try_parse_from(["imgfetch", "--timeout", "0"]).is_err());
    assert_eq!(parse(&["imgfetch", "--timeout", "1"]).timeout, Some(1));
}

#[test]
fn flags_override_config() {
    let cli = parse(&["imgfetch", "--output-dir", "elsewhere", "--timeout", "2"]);
    let cfg = cli.apply(FetchConfig::default());
    assert_eq!(cfg.output_dir, PathBuf::from("elsewhere"));
    assert_eq!(cfg.timeout_secs, 2);
    assert_eq!(cfg.user_agent, "ImageFetcher/1.0");
}

#[test]
fn config_kept_without_flags() {
    let cli = parse(&["imgfetch"]);
    assert_eq!(cli.apply(FetchConfig::default()), FetchConfig::default());
}
