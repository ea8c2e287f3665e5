//! Interactive URL entry when none are given on the command line.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter image URLs (comma-separated): ";

/// Print the prompt and read one line from stdin.
pub fn prompt_for_urls() -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_line_with_prompt(&mut stdin.lock(), &mut stdout.lock())
}

fn read_line_with_prompt(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read URLs from stdin")?;
    Ok(line.trim().to_string())
}
