//! # Content Digests
//!
//! SHA-256 is the only hash the transaction format uses. The output is a
//! fixed 32-byte array so callers cannot accidentally compare a truncated
//! digest or pass a variable-length buffer where a seal is expected.

use sha2::{Digest as _, Sha256};

use crate::config::DIGEST_LENGTH;

/// A 32-byte SHA-256 digest.
pub type Digest = [u8; DIGEST_LENGTH];

/// Computes the SHA-256 digest of `data`.
///
/// Pure and infallible: the same input always yields the same 32 bytes,
/// including for empty input.
///
/// # Example
///
/// ```
/// use ledgerline_protocol::crypto::digest;
///
/// let seal = digest(b"tx-001");
/// assert_eq!(seal.len(), 32);
/// ```
pub fn digest(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hex-encoded [`digest`], for logs and CLI output.
pub fn digest_hex(data: &[u8]) -> String {
    hex::encode(digest(data))
}
