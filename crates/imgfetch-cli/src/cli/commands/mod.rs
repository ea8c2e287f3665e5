//! CLI command handlers.

mod fetch;
mod prompt;

pub use fetch::run_fetch;
pub use prompt::prompt_for_urls;
