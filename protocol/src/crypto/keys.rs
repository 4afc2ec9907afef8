//! # Key Management
//!
//! Ed25519 keypairs for signing transaction seals.
//!
//! ## Security considerations
//!
//! - Secret keys are zeroized on drop by ed25519-dalek.
//! - Generation uses `OsRng`.
//! - Secret bytes never appear in `Debug` output or logs.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};

/// Errors that can occur during key operations.
///
/// Deliberately terse about *why* material was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or not hex")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

/// An Ed25519 signing keypair.
///
/// Does not implement `Serialize`. Exporting secret material goes through
/// [`Keypair::secret_key_hex`] on purpose.
///
/// # Examples
///
/// ```
/// use ledgerline_protocol::crypto::Keypair;
///
/// let kp = Keypair::generate();
/// let sig = kp.sign(b"seal bytes");
/// assert!(kp.public_key().verify(b"seal bytes", &sig));
/// ```
pub struct Keypair {
    signing_key: SigningKey,
}

/// The public half of a [`Keypair`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl Keypair {
    /// Generate a fresh keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Deterministic keypair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Load a keypair from a hex-encoded 32-byte secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str.trim()).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; SECRET_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Sign `message`. Ed25519 is deterministic: same key and message, same
    /// 64 bytes.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Hex-encoded secret key. Handle with care.
    pub fn secret_key_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair(pub={})", self.public_key().to_hex())
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

impl PublicKey {
    /// Build a public key from a byte slice, rejecting anything that is not a
    /// valid Ed25519 point.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s.trim()).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::try_from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Verify `signature` over `message`.
    ///
    /// Returns `false` for a wrong-length signature rather than erroring;
    /// callers only need yes or no.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
            return false;
        };
        verifying_key
            .verify(message, &Signature::from_bytes(&sig_bytes))
            .is_ok()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify() {
        let kp = Keypair::generate();
        let sig = kp.sign(b"seal");
        assert_eq!(sig.len(), SIGNATURE_LENGTH);
        assert!(kp.public_key().verify(b"seal", &sig));
    }

    #[test]
    fn verify_rejects_other_message() {
        let kp = Keypair::generate();
        let sig = kp.sign(b"seal");
        assert!(!kp.public_key().verify(b"other", &sig));
    }

    #[test]
    fn verify_rejects_wrong_length_signature() {
        let kp = Keypair::generate();
        assert!(!kp.public_key().verify(b"seal", &[0x01, 0x02]));
    }

    #[test]
    fn seed_is_deterministic() {
        let seed = [7u8; 32];
        let a = Keypair::from_seed(&seed);
        let b = Keypair::from_seed(&seed);
        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(a.sign(b"m"), b.sign(b"m"));
    }

    #[test]
    fn hex_roundtrip() {
        let kp = Keypair::generate();
        let restored = Keypair::from_hex(&kp.secret_key_hex()).unwrap();
        assert_eq!(kp.public_key(), restored.public_key());

        let pk = PublicKey::from_hex(&kp.public_key().to_hex()).unwrap();
        assert_eq!(pk, kp.public_key());
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert_eq!(Keypair::from_hex("zz").unwrap_err(), KeyError::InvalidSecretKey);
        assert_eq!(Keypair::from_hex("abcd").unwrap_err(), KeyError::InvalidSecretKey);
        assert_eq!(PublicKey::from_hex("abcd").unwrap_err(), KeyError::InvalidPublicKey);
    }

    #[test]
    fn debug_hides_secret() {
        let kp = Keypair::generate();
        let debug = format!("{:?}", kp);
        assert!(!debug.contains(&kp.secret_key_hex()));
        assert!(debug.contains(&kp.public_key().to_hex()));
    }
}
