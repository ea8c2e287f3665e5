//! Filename extraction from URL path.

/// Extracts the last path segment of a URL for use as a filename.
///
/// The segment is returned verbatim (still percent-encoded as the URL parser
/// left it); query and fragment are never part of it. Returns `None` if the
/// URL cannot be parsed, the path is empty or root-only, or the path ends in
/// `/`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
