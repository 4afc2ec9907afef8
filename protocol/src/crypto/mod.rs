//! # Cryptographic Primitives
//!
//! Two things live here and nothing else:
//!
//! - **SHA-256** content digests. A transaction seal is a SHA-256 digest of
//!   its canonical bytes.
//! - **Ed25519** keys. Signatures go over a seal, never over raw bytes of
//!   unknown provenance.
//!
//! Both are thin wrappers over audited crates (`sha2`, `ed25519-dalek`).

pub mod hash;
pub mod keys;

pub use hash::{digest, digest_hex, Digest};
pub use keys::{KeyError, Keypair, PublicKey};
