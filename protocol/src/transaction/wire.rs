//! Conversion between the flat wire record and the domain entity.
//!
//! The message bus and storage collaborators speak [`WireTransaction`]: a
//! denormalized record with primitive fields and no nesting. The domain
//! speaks [`DefaultTransaction`]. Converting to the wire is total; converting
//! from it validates the status code, the method string and the id, because
//! the wire shape can hold values the domain cannot.
//!
//! For every record `w` that converts, `to_wire(&to_entity(w.clone())?) == w`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::builder::DefaultTransaction;
use super::capability::Transaction;
use super::error::TransactionError;
use super::types::{Method, Params, Status, TxData};
use crate::config::DEFAULT_PARAMS_TYPE;

/// The transport shape of a single transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTransaction {
    pub id: String,
    pub peer_id: String,
    pub contract_id: String,
    /// Raw status code. Only 0 and 1 convert.
    pub status: i32,
    pub timestamp: DateTime<Utc>,
    pub jsonrpc: String,
    /// Raw method name. Only `invoke` and `query` convert.
    pub method: String,
    pub function: String,
    pub args: Vec<String>,
    #[serde(with = "hex::serde")]
    pub signature: Vec<u8>,
}

impl TryFrom<WireTransaction> for DefaultTransaction {
    type Error = TransactionError;

    fn try_from(wire: WireTransaction) -> Result<Self, Self::Error> {
        if wire.id.is_empty() {
            return Err(TransactionError::MissingId);
        }
        let status = Status::try_from(wire.status)?;
        let method: Method = wire.method.parse()?;

        let tx_data = TxData::new(
            wire.jsonrpc,
            method,
            Params::new(DEFAULT_PARAMS_TYPE, wire.function, wire.args),
            wire.contract_id.clone(),
        );

        Ok(DefaultTransaction::from_parts(
            wire.id,
            status,
            wire.peer_id,
            wire.contract_id,
            wire.timestamp,
            tx_data,
            wire.signature,
        ))
    }
}

impl From<&DefaultTransaction> for WireTransaction {
    fn from(tx: &DefaultTransaction) -> Self {
        let data = tx.tx_data();
        Self {
            id: tx.identifier().to_string(),
            peer_id: tx.peer_id().to_string(),
            contract_id: tx.contract_id().to_string(),
            status: tx.status().code(),
            timestamp: tx.timestamp(),
            jsonrpc: data.jsonrpc.clone(),
            method: data.method.as_str().to_string(),
            function: data.params.function.clone(),
            args: data.params.args.clone(),
            signature: tx.signature().to_vec(),
        }
    }
}

/// Converts a wire record into the domain entity.
pub fn to_entity(wire: WireTransaction) -> Result<DefaultTransaction, TransactionError> {
    DefaultTransaction::try_from(wire)
}

/// Flattens an entity into its wire record. Never fails.
///
/// The params type tag has no wire slot and is dropped.
pub fn to_wire(tx: &DefaultTransaction) -> WireTransaction {
    WireTransaction::from(tx)
}

/// Element-wise [`to_entity`], preserving order.
///
/// All or nothing: the first rejected record aborts the conversion and is
/// reported by position.
pub fn to_entity_list(
    records: Vec<WireTransaction>,
) -> Result<Vec<DefaultTransaction>, TransactionError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record.id.clone();
            to_entity(record).map_err(|source| {
                warn!(index, %id, error = %source, "wire record rejected");
                TransactionError::InvalidRecord {
                    index,
                    source: Box::new(source),
                }
            })
        })
        .collect()
}

/// Element-wise [`to_wire`], preserving order.
pub fn to_wire_list(txs: &[DefaultTransaction]) -> Vec<WireTransaction> {
    txs.iter().map(to_wire).collect()
}
