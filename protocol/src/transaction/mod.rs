//! # Transaction Module
//!
//! The transaction entity, its capability trait, and everything that moves it
//! across a boundary.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        Status, Method, Params, TxData
//! builder.rs      DefaultTransaction entity and TransactionBuilder
//! capability.rs   Transaction trait and fallible narrowing back to the entity
//! wire.rs         WireTransaction and the wire ↔ entity conversions
//! batch.rs        list codec
//! signing.rs      Ed25519 signing and verification over the unsigned seal
//! error.rs        TransactionError
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Create**: [`TransactionBuilder`], [`DefaultTransaction::new`],
//!    [`crate::submission::create_transaction`] or [`to_entity`]. Status is
//!    `Invalid`, signature empty.
//! 2. **Seal**: [`Transaction::seal_unsigned`] gives the digest to sign.
//! 3. **Sign**: [`sign_transaction`] attaches an Ed25519 signature.
//! 4. **Ship**: [`Transaction::serialize_bytes`], [`serialize_list`] or
//!    [`to_wire`] hand it to a collaborator.
//!
//! ## Design Decisions
//!
//! - [`Transaction::seal`] covers the signature as it currently stands;
//!   [`Transaction::seal_unsigned`] does not. Both exist because they answer
//!   different questions: "what exactly is this blob" versus "what did the
//!   signer commit to".
//! - The wire status is an unbounded integer and the domain status is not.
//!   Conversion rejects anything but 0 and 1.

pub mod batch;
pub mod builder;
pub mod capability;
pub mod error;
pub mod signing;
pub mod types;
pub mod wire;

pub use batch::{deserialize_list, serialize_list};
pub use builder::{DefaultTransaction, TransactionBuilder};
pub use capability::{as_concrete, concrete_list, erase_list, into_concrete, Transaction};
pub use error::TransactionError;
pub use signing::{sign_transaction, verify_signature};
pub use types::{Method, Params, Status, TxData};
pub use wire::{to_entity, to_entity_list, to_wire, to_wire_list, WireTransaction};
