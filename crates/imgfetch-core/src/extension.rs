//! Content-Type to file extension mapping.

/// Extension used when the Content-Type is not a known image type.
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Known image Content-Types and the extension written for each.
/// Matched exactly against the header value as received.
pub const KNOWN_IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/gif", ".gif"),
    ("image/webp", ".webp"),
];

/// Returns the extension (with leading dot) for a Content-Type value.
///
/// Unknown, empty, or malformed values yield [`FALLBACK_EXTENSION`].
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    KNOWN_IMAGE_TYPES
        .iter()
        .find(|(ct, _)| *ct == content_type)
        .map(|(_, ext)| *ext)
        .unwrap_or(FALLBACK_EXTENSION)
}
