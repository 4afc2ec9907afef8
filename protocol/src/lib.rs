// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ledgerline: Transaction Core
//!
//! The transaction is the unit every other part of a ledger node pushes
//! around. The pool queues it and consensus orders it before storage
//! persists it. If two nodes disagree on how a transaction serializes or what
//! its seal is, they disagree on what the ledger contains. This crate owns
//! that contract and nothing else.
//!
//! ## Architecture
//!
//! - **codec**: Deterministic structured-value encoding. One format, fixed
//!   field order, no maps.
//! - **crypto**: SHA-256 content digests and Ed25519 keys.
//! - **transaction**: The entity, its capability trait, wire conversion,
//!   batch codec and signing.
//! - **submission**: Turns a bus-level creation request into a fresh,
//!   unsigned transaction.
//! - **config**: Protocol constants.
//!
//! ## Lifecycle
//!
//! ```text
//! CreateTransaction / WireTransaction
//!         │
//!         ▼
//!   DefaultTransaction ──seal_unsigned──► digest ──Ed25519──► signature
//!         │
//!         ▼
//!   serialize_bytes / serialize_list ──► pool, consensus, storage
//! ```

pub mod codec;
pub mod config;
pub mod crypto;
pub mod submission;
pub mod transaction;
