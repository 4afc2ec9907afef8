//! # Deterministic Value Codec
//!
//! The single structured-value encoding used for transaction content, whole
//! transactions and transaction lists. It is JSON via `serde_json`, chosen
//! for one property: a struct serializes its fields in declaration order,
//! every time, on every platform. As long as the model contains no map types
//! (it doesn't, and it must not), equal values produce equal bytes.
//!
//! Both functions are stateless. There is nothing to configure and nothing
//! to share between threads.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors from the value codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be encoded. For the transaction model this means
    /// a schema bug, not bad input.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The bytes do not decode into the requested shape.
    #[error("failed to decode value: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encodes `value` into its canonical byte form.
///
/// # Example
///
/// ```
/// use ledgerline_protocol::codec::serialize_value;
///
/// let bytes = serialize_value(&vec!["a", "b"]).unwrap();
/// assert_eq!(bytes, br#"["a","b"]"#);
/// ```
pub fn serialize_value<T>(value: &T) -> Result<Vec<u8>, CodecError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(value).map_err(CodecError::Encode)
}

/// Decodes bytes produced by [`serialize_value`].
pub fn deserialize_value<T>(bytes: &[u8]) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        zeta: u32,
        alpha: String,
    }

    #[test]
    fn field_order_follows_declaration() {
        let bytes = serialize_value(&Sample {
            zeta: 7,
            alpha: "x".into(),
        })
        .unwrap();
        assert_eq!(bytes, br#"{"zeta":7,"alpha":"x"}"#);
    }

    #[test]
    fn equal_values_encode_identically() {
        let a = Sample {
            zeta: 1,
            alpha: "same".into(),
        };
        let b = Sample {
            zeta: 1,
            alpha: "same".into(),
        };
        assert_eq!(serialize_value(&a).unwrap(), serialize_value(&b).unwrap());
    }

    #[test]
    fn decode_rejects_truncated_input() {
        let err = deserialize_value::<Sample>(br#"{"zeta":7,"al"#).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let err = deserialize_value::<Sample>(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn decode_reads_back_encoded_value() {
        let original = Sample {
            zeta: 42,
            alpha: "ledger".into(),
        };
        let bytes = serialize_value(&original).unwrap();
        let decoded: Sample = deserialize_value(&bytes).unwrap();
        assert_eq!(decoded, original);
    }
}
