//! Error types for the transaction model.

use thiserror::Error;

use crate::codec::CodecError;

/// Everything that can go wrong while building, converting, encoding or
/// signing a transaction.
///
/// None of these are retried internally. The caller decides whether to drop,
/// resubmit or escalate.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The transaction (or its content subset) could not be encoded.
    #[error("transaction serialization failed: {0}")]
    Serialization(#[source] CodecError),

    /// Bytes did not decode into a transaction.
    #[error("transaction deserialization failed: {0}")]
    Deserialization(#[source] CodecError),

    /// Bytes did not decode into a transaction list.
    #[error("transaction list deserialization failed: {0}")]
    ListDeserialization(#[source] CodecError),

    /// A status code outside `{0, 1}`.
    #[error("invalid transaction status code: {0}")]
    InvalidStatus(i32),

    /// A method string other than `invoke` or `query`.
    #[error("invalid transaction method: {0:?}")]
    InvalidMethod(String),

    /// A wire record or request without a transaction id.
    #[error("transaction id must not be empty")]
    MissingId,

    /// One record of a batch conversion was rejected.
    #[error("record {index} rejected: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<TransactionError>,
    },

    /// A `dyn Transaction` was not the concrete type the caller asked for.
    #[error("transaction is not a {expected}")]
    TypeMismatch { expected: &'static str },

    /// Signature verification was requested on an unsigned transaction.
    #[error("transaction is unsigned")]
    MissingSignature,

    /// The attached signature does not verify over the unsigned seal.
    #[error("invalid signature on transaction {id}")]
    InvalidSignature { id: String },
}
