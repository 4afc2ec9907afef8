//! Transaction submission.
//!
//! A client asks for a transaction by sending a [`CreateTransaction`] over
//! the message bus. This module turns that request into a fresh, unsigned
//! [`DefaultTransaction`]: new id, current timestamp, `Invalid` status.
//! Signing and pooling are someone else's job.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::JSONRPC_VERSION;
use crate::transaction::{
    DefaultTransaction, Method, Transaction, TransactionBuilder, TransactionError,
};

/// A creation request as it arrives from the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub peer_id: String,
    pub contract_id: String,
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    /// `invoke` or `query`.
    pub method: String,
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

/// Builds a new unsigned transaction from a creation request.
///
/// Fails only when the method is neither `invoke` nor `query`.
pub fn create_transaction(
    request: CreateTransaction,
) -> Result<DefaultTransaction, TransactionError> {
    let method: Method = request.method.parse()?;

    let tx = TransactionBuilder::new(request.peer_id)
        .contract_id(request.contract_id)
        .jsonrpc(request.jsonrpc)
        .method(method)
        .function(request.function)
        .args(request.args)
        .build();

    info!(
        id = tx.identifier(),
        function = %tx.tx_data().params.function,
        "created transaction"
    );
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Status;

    fn init_a_request() -> CreateTransaction {
        CreateTransaction {
            peer_id: "peer-1".into(),
            contract_id: "1".into(),
            jsonrpc: "2.0".into(),
            method: "invoke".into(),
            function: "initA".into(),
            args: Vec::new(),
        }
    }

    #[test]
    fn creates_unsigned_invalid_transaction() {
        let tx = create_transaction(init_a_request()).unwrap();
        assert!(!tx.identifier().is_empty());
        assert_eq!(tx.status(), Status::Invalid);
        assert!(tx.signature().is_empty());
        assert_eq!(tx.peer_id(), "peer-1");
        assert_eq!(tx.contract_id(), "1");
        assert_eq!(tx.tx_data().params.function, "initA");
        assert_eq!(tx.tx_data().id, "1");
    }

    #[test]
    fn each_request_gets_a_fresh_id() {
        let a = create_transaction(init_a_request()).unwrap();
        let b = create_transaction(init_a_request()).unwrap();
        assert_ne!(a.identifier(), b.identifier());
    }

    #[test]
    fn rejects_unknown_method() {
        let mut request = init_a_request();
        request.method = "execute".into();
        assert!(matches!(
            create_transaction(request),
            Err(TransactionError::InvalidMethod(m)) if m == "execute"
        ));
    }

    #[test]
    fn request_decodes_from_bus_json() {
        let json = r#"{"peerId":"peer-1","contractId":"1","method":"query","function":"getA"}"#;
        let request: CreateTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(request.jsonrpc, JSONRPC_VERSION);
        assert!(request.args.is_empty());

        let tx = create_transaction(request).unwrap();
        assert_eq!(tx.tx_data().method, Method::Query);
    }
}
