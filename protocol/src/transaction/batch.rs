//! Batch codec for transaction lists.
//!
//! Lists use the same encoder as single transactions: a list's bytes are the
//! JSON array of each transaction's canonical object, in order. Decoding is
//! all or nothing.

use tracing::debug;

use super::builder::DefaultTransaction;
use super::error::TransactionError;
use crate::codec::{deserialize_value, serialize_value};

/// Encodes an ordered list of transactions. Duplicates are kept as given.
pub fn serialize_list(txs: &[DefaultTransaction]) -> Result<Vec<u8>, TransactionError> {
    serialize_value(txs).map_err(TransactionError::Serialization)
}

/// Decodes bytes produced by [`serialize_list`].
///
/// Truncated, malformed or empty input fails with
/// [`TransactionError::ListDeserialization`]; no partial list is returned.
pub fn deserialize_list(bytes: &[u8]) -> Result<Vec<DefaultTransaction>, TransactionError> {
    let txs: Vec<DefaultTransaction> =
        deserialize_value(bytes).map_err(TransactionError::ListDeserialization)?;
    debug!(count = txs.len(), "transaction list deserialized");
    Ok(txs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::builder::TransactionBuilder;
    use crate::transaction::capability::Transaction;
    use crate::transaction::types::Status;

    fn batch(n: usize) -> Vec<DefaultTransaction> {
        (0..n)
            .map(|i| {
                let mut tx = TransactionBuilder::new(format!("peer-{i}"))
                    .id(format!("tx-{i}"))
                    .contract_id("token")
                    .function("transfer")
                    .args([format!("from-{i}"), format!("to-{i}")])
                    .build();
                if i % 2 == 1 {
                    tx.set_status(Status::Valid);
                    tx.set_signature(vec![i as u8; 4]);
                }
                tx
            })
            .collect()
    }

    #[test]
    fn three_transactions_come_back_in_order() {
        let original = batch(3);
        let decoded = deserialize_list(&serialize_list(&original).unwrap()).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded, original);
    }

    #[test]
    fn list_bytes_are_concatenated_canonical_objects() {
        let txs = batch(2);
        let mut expected = b"[".to_vec();
        expected.extend(txs[0].serialize_bytes().unwrap());
        expected.push(b',');
        expected.extend(txs[1].serialize_bytes().unwrap());
        expected.push(b']');
        assert_eq!(serialize_list(&txs).unwrap(), expected);
    }

    #[test]
    fn empty_list_roundtrips() {
        let bytes = serialize_list(&[]).unwrap();
        assert_eq!(bytes, b"[]");
        assert!(deserialize_list(&bytes).unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_preserved() {
        let tx = batch(1).remove(0);
        let txs = vec![tx.clone(), tx.clone()];
        let decoded = deserialize_list(&serialize_list(&txs).unwrap()).unwrap();
        assert_eq!(decoded, txs);
    }

    #[test]
    fn truncated_input_fails_without_partial_result() {
        let bytes = serialize_list(&batch(3)).unwrap();
        let truncated = &bytes[..bytes.len() - 10];
        let err = deserialize_list(truncated).unwrap_err();
        assert!(matches!(err, TransactionError::ListDeserialization(_)));
    }

    #[test]
    fn single_object_is_not_a_list() {
        let bytes = batch(1)[0].serialize_bytes().unwrap();
        let err = deserialize_list(&bytes).unwrap_err();
        assert!(matches!(err, TransactionError::ListDeserialization(_)));
    }

    #[test]
    fn record_with_empty_id_fails_the_list() {
        let bytes = String::from_utf8(serialize_list(&batch(3)).unwrap())
            .unwrap()
            .replace(r#""id":"tx-1""#, r#""id":"""#);
        let err = deserialize_list(bytes.as_bytes()).unwrap_err();
        assert!(matches!(err, TransactionError::ListDeserialization(_)));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            deserialize_list(&[]),
            Err(TransactionError::ListDeserialization(_))
        ));
    }
}
