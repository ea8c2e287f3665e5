//! Splitting the free-form URL list supplied by the caller.

/// Split a comma-delimited line into raw URL entries.
///
/// Entries are returned untrimmed and blanks are kept; the pipeline trims and
/// drops them. Commas inside a URL cannot be escaped.
pub fn parse_url_list(line: &str) -> Vec<&str> {
    line.split(',').collect()
}
