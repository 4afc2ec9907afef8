//! The concrete transaction entity and its builder.
//!
//! [`DefaultTransaction`] is the only implementation of the
//! [`Transaction`](super::capability::Transaction) capability this crate
//! ships. Its serialized form is the canonical one: field order is the
//! declaration order below, and changing it changes every seal on the network.
//!
//! # Canonical Byte Format
//!
//! ```text
//! {"id":…,"status":0|1,"peer_id":…,"contract_id":…,"timestamp":RFC3339,
//!  "tx_data":{"jsonrpc":…,"method":"invoke"|"query",
//!             "params":{"type":i32,"function":…,"args":[…]},"id":…},
//!  "signature":hex}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::{debug, trace};
use uuid::Uuid;

use super::capability::Transaction;
use super::error::TransactionError;
use super::types::{Method, Params, Status, TxData};
use crate::codec::{deserialize_value, serialize_value};
use crate::config::{DEFAULT_PARAMS_TYPE, JSONRPC_VERSION};
use crate::crypto::hash::{digest, Digest};

// ---------------------------------------------------------------------------
// DefaultTransaction
// ---------------------------------------------------------------------------

/// A ledger transaction.
///
/// `id` and `timestamp` have no setters: they are fixed at construction.
/// `id` is never empty, whether the value was constructed or decoded.
/// `signature` starts empty and changes only through
/// [`Transaction::set_signature`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct DefaultTransaction {
    id: String,
    status: Status,
    peer_id: String,
    contract_id: String,
    timestamp: DateTime<Utc>,
    tx_data: TxData,
    #[serde(with = "hex::serde")]
    signature: Vec<u8>,
}

/// Decoded form before the id is checked.
#[derive(Deserialize)]
struct RawTransaction {
    id: String,
    status: Status,
    peer_id: String,
    contract_id: String,
    timestamp: DateTime<Utc>,
    tx_data: TxData,
    #[serde(with = "hex::serde")]
    signature: Vec<u8>,
}

impl TryFrom<RawTransaction> for DefaultTransaction {
    type Error = TransactionError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        if raw.id.is_empty() {
            return Err(TransactionError::MissingId);
        }
        Ok(Self::from_parts(
            raw.id,
            raw.status,
            raw.peer_id,
            raw.contract_id,
            raw.timestamp,
            raw.tx_data,
            raw.signature,
        ))
    }
}

/// The sealed-content subset of a transaction: everything but the contract
/// id and the signature.
#[derive(Serialize)]
struct Content<'a> {
    id: &'a str,
    status: Status,
    peer_id: &'a str,
    timestamp: &'a DateTime<Utc>,
    tx_data: &'a TxData,
}

impl DefaultTransaction {
    /// Creates an unsigned transaction in the `Invalid` state with an empty
    /// contract id. An empty `id` is rejected with
    /// [`TransactionError::MissingId`].
    pub fn new(
        peer_id: impl Into<String>,
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        tx_data: TxData,
    ) -> Result<Self, TransactionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TransactionError::MissingId);
        }
        Ok(Self {
            id,
            status: Status::Invalid,
            peer_id: peer_id.into(),
            contract_id: String::new(),
            timestamp,
            tx_data,
            signature: Vec::new(),
        })
    }

    /// Decodes a transaction from its canonical bytes.
    ///
    /// Unlike [`Transaction::deserialize_bytes`], empty input is an error
    /// here: there is no existing value to leave untouched.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        deserialize_value(bytes).map_err(TransactionError::Deserialization)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Status transitions are driven by validation outside this crate.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn peer_id(&self) -> &str {
        &self.peer_id
    }

    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn tx_data(&self) -> &TxData {
        &self.tx_data
    }

    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Hex-encoded [`Transaction::seal`].
    pub fn seal_hex(&self) -> Result<String, TransactionError> {
        self.seal().map(hex::encode)
    }

    pub(crate) fn from_parts(
        id: String,
        status: Status,
        peer_id: String,
        contract_id: String,
        timestamp: DateTime<Utc>,
        tx_data: TxData,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            id,
            status,
            peer_id,
            contract_id,
            timestamp,
            tx_data,
            signature,
        }
    }
}

impl Transaction for DefaultTransaction {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn content(&self) -> Result<Vec<u8>, TransactionError> {
        let content = Content {
            id: &self.id,
            status: self.status,
            peer_id: &self.peer_id,
            timestamp: &self.timestamp,
            tx_data: &self.tx_data,
        };
        serialize_value(&content).map_err(TransactionError::Serialization)
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }

    fn set_signature(&mut self, signature: Vec<u8>) {
        self.signature = signature;
    }

    fn seal(&self) -> Result<Digest, TransactionError> {
        let bytes = self.serialize_bytes()?;
        trace!(id = %self.id, signed = self.is_signed(), "sealing transaction");
        Ok(digest(&bytes))
    }

    fn seal_unsigned(&self) -> Result<Digest, TransactionError> {
        if !self.is_signed() {
            return self.seal();
        }
        let unsigned = Self {
            signature: Vec::new(),
            ..self.clone()
        };
        unsigned.seal()
    }

    fn serialize_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        serialize_value(self).map_err(TransactionError::Serialization)
    }

    fn deserialize_bytes(&mut self, bytes: &[u8]) -> Result<(), TransactionError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let decoded = Self::from_bytes(bytes)?;
        debug!(id = %decoded.id, "transaction deserialized");
        *self = decoded;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`DefaultTransaction`]s.
///
/// # Usage
///
/// ```
/// use ledgerline_protocol::transaction::{Method, TransactionBuilder, Transaction};
///
/// let tx = TransactionBuilder::new("peer-1")
///     .contract_id("token")
///     .method(Method::Invoke)
///     .function("transfer")
///     .args(["alice", "bob", "10"])
///     .build();
///
/// assert!(!tx.identifier().is_empty());
/// assert!(tx.signature().is_empty());
/// ```
///
/// The id defaults to a fresh UUID v4 and the timestamp to the current UTC
/// time; both can be overridden.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    peer_id: String,
    id: Option<String>,
    contract_id: String,
    timestamp: Option<DateTime<Utc>>,
    jsonrpc: String,
    method: Method,
    params: Params,
}

impl TransactionBuilder {
    pub fn new(peer_id: impl Into<String>) -> Self {
        Self {
            peer_id: peer_id.into(),
            id: None,
            contract_id: String::new(),
            timestamp: None,
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: Method::Invoke,
            params: Params::new(DEFAULT_PARAMS_TYPE, "", Vec::new()),
        }
    }

    /// Sets an explicit id. An empty string falls back to a generated one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn contract_id(mut self, contract_id: impl Into<String>) -> Self {
        self.contract_id = contract_id.into();
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn jsonrpc(mut self, jsonrpc: impl Into<String>) -> Self {
        self.jsonrpc = jsonrpc.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn params_type(mut self, params_type: i32) -> Self {
        self.params.params_type = params_type;
        self
    }

    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.params.function = function.into();
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the whole invocation payload. `data.id` becomes the contract
    /// id.
    pub fn tx_data(mut self, data: TxData) -> Self {
        self.jsonrpc = data.jsonrpc;
        self.method = data.method;
        self.params = data.params;
        self.contract_id = data.id;
        self
    }

    pub fn build(self) -> DefaultTransaction {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let timestamp = self.timestamp.unwrap_or_else(Utc::now);
        let tx_data = TxData::new(
            self.jsonrpc,
            self.method,
            self.params,
            self.contract_id.clone(),
        );

        debug!(
            %id,
            peer_id = %self.peer_id,
            contract_id = %self.contract_id,
            "transaction built"
        );

        DefaultTransaction::from_parts(
            id,
            Status::Invalid,
            self.peer_id,
            self.contract_id,
            timestamp,
            tx_data,
            Vec::new(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
