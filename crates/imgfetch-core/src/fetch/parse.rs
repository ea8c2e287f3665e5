//! Parse HTTP response header lines into name/value pairs.

/// Decode one raw header line as delivered by curl.
/// Bytes that are not valid UTF-8 are replaced, not dropped.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Parse collected header lines.
///
/// curl reports the headers of every response in a redirect chain; a status
/// line (`HTTP/...`) starts a new response, so only the final response's
/// headers are returned.
pub(crate) fn parse_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    headers
}
