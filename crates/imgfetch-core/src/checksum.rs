//! Content fingerprints (SHA-256) for duplicate detection.
//!
//! Digests are computed over the full in-memory payload of a response; the
//! pipeline keeps them in a run-scoped set.

use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering (64 chars).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the fingerprint of `data`.
pub fn fingerprint(data: &[u8]) -> Fingerprint {
    let digest = Sha256::digest(data);
    Fingerprint(digest.into())
}

/// Compute SHA-256 of `data` and return the digest as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    fingerprint(data).to_hex()
}
