//! Core type definitions for ledger transactions.
//!
//! `Status` and `Method` are the two enumerations a transaction carries;
//! `Params` and `TxData` describe the contract call it requests. All of them
//! are plain values with a fixed serialized shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TransactionError;
use crate::config::{DEFAULT_PARAMS_TYPE, JSONRPC_VERSION};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Validity marker set by validation logic outside this crate.
///
/// Serialized as its numeric code. Decoding any code other than 0 or 1
/// fails, so an out-of-range status can never enter the domain through
/// the codec or the wire conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Status {
    /// Not (yet) validated. Every new transaction starts here.
    #[default]
    Invalid,
    /// Accepted by validation.
    Valid,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Self::Invalid => 0,
            Self::Valid => 1,
        }
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<i32> for Status {
    type Error = TransactionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Valid),
            other => Err(TransactionError::InvalidStatus(other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "Invalid"),
            Self::Valid => write!(f, "Valid"),
        }
    }
}

// ---------------------------------------------------------------------------
// Method
// ---------------------------------------------------------------------------

/// Whether the call mutates contract state (`invoke`) or only reads it
/// (`query`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Invoke,
    Query,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invoke => "invoke",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoke" => Ok(Self::Invoke),
            "query" => Ok(Self::Query),
            other => Err(TransactionError::InvalidMethod(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Params / TxData
// ---------------------------------------------------------------------------

/// Arguments of the contract function being called.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Params {
    /// Numeric type tag. Opaque to this crate.
    #[serde(rename = "type")]
    pub params_type: i32,
    pub function: String,
    /// Positional arguments, order preserved.
    pub args: Vec<String>,
}

impl Params {
    pub fn new(params_type: i32, function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            params_type,
            function: function.into(),
            args,
        }
    }
}

/// The JSON-RPC style description of the call a transaction carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxData {
    pub jsonrpc: String,
    pub method: Method,
    pub params: Params,
    /// Echoes the contract id the call targets.
    pub id: String,
}

impl TxData {
    pub fn new(
        jsonrpc: impl Into<String>,
        method: Method,
        params: Params,
        contract_id: impl Into<String>,
    ) -> Self {
        Self {
            jsonrpc: jsonrpc.into(),
            method,
            params,
            id: contract_id.into(),
        }
    }
}

impl Default for TxData {
    fn default() -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: Method::Invoke,
            params: Params::new(DEFAULT_PARAMS_TYPE, "", Vec::new()),
            id: String::new(),
        }
    }
}
