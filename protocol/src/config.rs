//! # Protocol Configuration & Constants
//!
//! Every fixed value the transaction format depends on lives here. Changing
//! any of them changes serialized bytes or seals, which means every node on
//! the network has to change with you.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// Crate-level protocol version, reported by the CLI.
pub const PROTOCOL_VERSION: &str = "0.1.0";

/// JSON-RPC version tag carried in every invocation payload.
pub const JSONRPC_VERSION: &str = "2.0";

/// Parameter type tag assigned when the caller does not supply one. The wire
/// record has no slot for it, so wire-converted transactions always carry it.
pub const DEFAULT_PARAMS_TYPE: i32 = 0;

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Seal and content digest length in bytes (SHA-256).
pub const DIGEST_LENGTH: usize = 32;

/// Signing algorithm used by [`crate::transaction::signing`].
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Ed25519 secret key length in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_parameter_sizes() {
        assert_eq!(DIGEST_LENGTH, 32);
        assert_eq!(SECRET_KEY_LENGTH, 32);
        assert_eq!(PUBLIC_KEY_LENGTH, 32);
        assert_eq!(SIGNATURE_LENGTH, 64);
    }

    #[test]
    fn test_jsonrpc_version_is_two() {
        assert_eq!(JSONRPC_VERSION, "2.0");
    }
}
