//! URL modeling and filename derivation.
//!
//! Output filenames come from the last URL path segment, or are synthesized
//! from a random token and the Content-Type's extension.

mod path;

pub use path::filename_from_url_path;

use crate::extension::extension_for_content_type;

/// Prefix of synthesized filenames.
const SYNTHESIZED_PREFIX: &str = "image_";

/// Derives the filename for saving an image fetched from `url`.
///
/// Uses the last URL path segment when there is one. Otherwise returns
/// `image_<token><ext>`, where the token is a fresh random UUID (32 hex chars)
/// and the extension comes from `content_type`.
///
/// # Examples
///
/// - `derive_filename("https://example.com/pics/cat.png", "image/jpeg")` → `"cat.png"`
/// - `derive_filename("https://example.com/", "image/png")` → `"image_3f2b…9c.png"`
pub fn derive_filename(url: &str, content_type: &str) -> String {
    filename_from_url_path(url).unwrap_or_else(|| synthesize_filename(content_type))
}

fn synthesize_filename(content_type: &str) -> String {
    format!(
        "{}{}{}",
        SYNTHESIZED_PREFIX,
        uuid::Uuid::new_v4().simple(),
        extension_for_content_type(content_type)
    )
}
