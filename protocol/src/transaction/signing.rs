//! Transaction signing with Ed25519 keypairs.
//!
//! The message signed is always [`Transaction::seal_unsigned`]: the digest of
//! the full transaction with its signature field emptied. Signing therefore
//! never invalidates the value that was signed, and re-signing with another
//! key signs the same digest.

use tracing::debug;

use super::capability::Transaction;
use super::error::TransactionError;
use crate::crypto::hash::Digest;
use crate::crypto::keys::{Keypair, PublicKey};

/// Signs a transaction in place and returns the digest that was signed.
///
/// Any previous signature is replaced.
///
/// # Example
///
/// ```
/// use ledgerline_protocol::crypto::Keypair;
/// use ledgerline_protocol::transaction::{
///     sign_transaction, verify_signature, Transaction, TransactionBuilder,
/// };
///
/// let keypair = Keypair::generate();
/// let mut tx = TransactionBuilder::new("peer-1").function("initA").build();
///
/// sign_transaction(&mut tx, &keypair).unwrap();
/// assert!(verify_signature(&tx, &keypair.public_key()).is_ok());
/// ```
pub fn sign_transaction<T>(tx: &mut T, keypair: &Keypair) -> Result<Digest, TransactionError>
where
    T: Transaction + ?Sized,
{
    let seal = tx.seal_unsigned()?;
    tx.set_signature(keypair.sign(&seal).to_vec());
    debug!(id = tx.identifier(), seal = %hex::encode(seal), "transaction signed");
    Ok(seal)
}

/// Checks the attached signature against `public_key` over the unsigned
/// seal.
pub fn verify_signature<T>(tx: &T, public_key: &PublicKey) -> Result<(), TransactionError>
where
    T: Transaction + ?Sized,
{
    if tx.signature().is_empty() {
        return Err(TransactionError::MissingSignature);
    }
    let seal = tx.seal_unsigned()?;
    if public_key.verify(&seal, tx.signature()) {
        Ok(())
    } else {
        Err(TransactionError::InvalidSignature {
            id: tx.identifier().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SIGNATURE_LENGTH;
    use crate::transaction::builder::{DefaultTransaction, TransactionBuilder};
    use crate::transaction::capability::erase_list;
    use crate::transaction::types::Status;
    use chrono::{TimeZone, Utc};

    fn sample_tx() -> DefaultTransaction {
        TransactionBuilder::new("peer-1")
            .id("tx-001")
            .contract_id("1")
            .timestamp(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .function("initA")
            .build()
    }

    #[test]
    fn sign_sets_signature_field() {
        let kp = Keypair::generate();
        let mut tx = sample_tx();
        assert!(!tx.is_signed());
        sign_transaction(&mut tx, &kp).unwrap();
        assert!(tx.is_signed());
        assert_eq!(tx.signature().len(), SIGNATURE_LENGTH);
    }

    #[test]
    fn sign_returns_unsigned_seal() {
        let kp = Keypair::generate();
        let mut tx = sample_tx();
        let expected = tx.seal().unwrap();
        let signed_over = sign_transaction(&mut tx, &kp).unwrap();
        assert_eq!(signed_over, expected);
        assert_ne!(tx.seal().unwrap(), expected);
    }

    #[test]
    fn signing_does_not_change_id() {
        let kp = Keypair::generate();
        let mut tx = sample_tx();
        sign_transaction(&mut tx, &kp).unwrap();
        assert_eq!(tx.identifier(), "tx-001");
    }

    #[test]
    fn signing_is_deterministic() {
        let kp = Keypair::from_seed(&[3u8; 32]);
        let mut tx1 = sample_tx();
        let mut tx2 = sample_tx();
        sign_transaction(&mut tx1, &kp).unwrap();
        sign_transaction(&mut tx2, &kp).unwrap();
        assert_eq!(tx1.signature(), tx2.signature());
    }

    #[test]
    fn verify_accepts_own_signature() {
        let kp = Keypair::generate();
        let mut tx = sample_tx();
        sign_transaction(&mut tx, &kp).unwrap();
        verify_signature(&tx, &kp.public_key()).unwrap();
    }

    #[test]
    fn verify_rejects_unsigned() {
        let kp = Keypair::generate();
        let err = verify_signature(&sample_tx(), &kp.public_key()).unwrap_err();
        assert!(matches!(err, TransactionError::MissingSignature));
    }

    #[test]
    fn verify_rejects_other_key() {
        let signer = Keypair::generate();
        let other = Keypair::generate();
        let mut tx = sample_tx();
        sign_transaction(&mut tx, &signer).unwrap();
        let err = verify_signature(&tx, &other.public_key()).unwrap_err();
        assert!(matches!(err, TransactionError::InvalidSignature { id } if id == "tx-001"));
    }

    #[test]
    fn verify_rejects_tampered_status() {
        let kp = Keypair::generate();
        let mut tx = sample_tx();
        sign_transaction(&mut tx, &kp).unwrap();
        tx.set_status(Status::Valid);
        assert!(verify_signature(&tx, &kp.public_key()).is_err());
    }

    #[test]
    fn re_signing_overwrites_previous_signature() {
        let kp1 = Keypair::generate();
        let kp2 = Keypair::generate();
        let mut tx = sample_tx();

        let seal1 = sign_transaction(&mut tx, &kp1).unwrap();
        let sig1 = tx.signature().to_vec();
        let seal2 = sign_transaction(&mut tx, &kp2).unwrap();

        assert_eq!(seal1, seal2);
        assert_ne!(sig1, tx.signature());
        verify_signature(&tx, &kp2.public_key()).unwrap();
    }

    #[test]
    fn signs_through_capability_object() {
        let kp = Keypair::generate();
        let mut erased = erase_list(vec![sample_tx()]);
        sign_transaction(erased[0].as_mut(), &kp).unwrap();
        verify_signature(erased[0].as_ref(), &kp.public_key()).unwrap();
    }
}
