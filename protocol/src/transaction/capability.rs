//! The `Transaction` capability and the narrowing helpers around it.
//!
//! Collaborators that only need "a transaction" (a pool, a gossip layer)
//! should take `&dyn Transaction` or `Box<dyn Transaction>`. Code that needs
//! the concrete entity gets it back through [`as_concrete`] or
//! [`into_concrete`], which fail with [`TransactionError::TypeMismatch`]
//! instead of panicking on a foreign implementation.

use std::any::Any;
use std::fmt;

use super::builder::DefaultTransaction;
use super::error::TransactionError;
use crate::crypto::hash::Digest;

const DEFAULT_TRANSACTION: &str = "DefaultTransaction";

/// What every transaction can do, regardless of its concrete type.
pub trait Transaction: fmt::Debug + Send + Sync {
    /// The id assigned at creation.
    fn identifier(&self) -> &str;

    /// Canonical bytes of the content subset: id, status, peer id, timestamp
    /// and invocation data. The signature is not part of it.
    fn content(&self) -> Result<Vec<u8>, TransactionError>;

    /// Current signature; empty until one is set.
    fn signature(&self) -> &[u8];

    /// Replaces the signature. No verification happens here.
    fn set_signature(&mut self, signature: Vec<u8>);

    /// Digest of the full serialized transaction, signature included as it
    /// currently stands. Setting a signature changes the seal.
    fn seal(&self) -> Result<Digest, TransactionError>;

    /// Digest of the full serialized transaction with the signature field
    /// emptied. Stable across signing; this is what a signer signs.
    fn seal_unsigned(&self) -> Result<Digest, TransactionError>;

    /// Canonical bytes of the whole transaction.
    fn serialize_bytes(&self) -> Result<Vec<u8>, TransactionError>;

    /// Overwrites `self` with the decoded transaction. Empty input is a
    /// no-op; on error `self` is left as it was.
    fn deserialize_bytes(&mut self, bytes: &[u8]) -> Result<(), TransactionError>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Borrow the concrete entity behind a capability reference.
pub fn as_concrete(tx: &dyn Transaction) -> Result<&DefaultTransaction, TransactionError> {
    tx.as_any()
        .downcast_ref::<DefaultTransaction>()
        .ok_or(TransactionError::TypeMismatch {
            expected: DEFAULT_TRANSACTION,
        })
}

/// Take the concrete entity out of a boxed capability.
pub fn into_concrete(tx: Box<dyn Transaction>) -> Result<DefaultTransaction, TransactionError> {
    tx.into_any()
        .downcast::<DefaultTransaction>()
        .map(|tx| *tx)
        .map_err(|_| TransactionError::TypeMismatch {
            expected: DEFAULT_TRANSACTION,
        })
}

/// Erase a list of entities to capability objects, preserving order.
pub fn erase_list(txs: Vec<DefaultTransaction>) -> Vec<Box<dyn Transaction>> {
    txs.into_iter()
        .map(|tx| Box::new(tx) as Box<dyn Transaction>)
        .collect()
}

/// Narrow a list of capability objects back to entities, preserving order.
///
/// Fails on the first element that is not a [`DefaultTransaction`],
/// reporting its position.
pub fn concrete_list(
    txs: Vec<Box<dyn Transaction>>,
) -> Result<Vec<DefaultTransaction>, TransactionError> {
    txs.into_iter()
        .enumerate()
        .map(|(index, tx)| {
            into_concrete(tx).map_err(|source| TransactionError::InvalidRecord {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
