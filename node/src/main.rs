// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ledgerline
//!
//! Entry point for the `ledgerline` binary. Parses CLI arguments, initializes
//! logging and dispatches to one of the subcommands:
//!
//! - `create`:  build (and optionally sign) a transaction
//! - `inspect`: decode serialized bytes and show wire records and seals
//! - `convert`: wire-record JSON to serialized bytes
//! - `keygen`:  fresh Ed25519 keypair
//! - `version`: print build version information
//!
//! Command output goes to stdout as JSON; logs go to stderr.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};

use ledgerline_protocol::crypto::{Keypair, PublicKey};
use ledgerline_protocol::submission::{create_transaction, CreateTransaction};
use ledgerline_protocol::transaction::{
    deserialize_list, serialize_list, sign_transaction, to_entity, to_entity_list, to_wire,
    verify_signature, DefaultTransaction, Transaction, TransactionError, WireTransaction,
};

use cli::{Commands, ConvertArgs, CreateArgs, InspectArgs, LedgerlineCli};

fn main() -> Result<()> {
    let cli = LedgerlineCli::parse();
    logging::init_logging(&cli.log.log_level, cli.log.log_format)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Create(args) => run_create(args, &mut out),
        Commands::Inspect(args) => run_inspect(args, &mut out),
        Commands::Convert(args) => run_convert(args, &mut out),
        Commands::Keygen => run_keygen(&mut out),
        Commands::Version => print_version(&mut out),
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// What the CLI prints for one transaction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionReport {
    seal: String,
    unsigned_seal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature_valid: Option<bool>,
    record: WireTransaction,
}

fn report(tx: &DefaultTransaction, public_key: Option<&PublicKey>) -> Result<TransactionReport> {
    Ok(TransactionReport {
        seal: hex::encode(tx.seal().context("failed to seal transaction")?),
        unsigned_seal: hex::encode(
            tx.seal_unsigned()
                .context("failed to seal unsigned transaction")?,
        ),
        signature_valid: public_key
            .map(|pk| signature_verdict(tx, pk))
            .transpose()?,
        record: to_wire(tx),
    })
}

/// `Ok(false)` for an unsigned or badly signed transaction. Anything else
/// (the seal could not be computed) is an error, not a verdict.
fn signature_verdict(tx: &DefaultTransaction, public_key: &PublicKey) -> Result<bool> {
    match verify_signature(tx, public_key) {
        Ok(()) => Ok(true),
        Err(TransactionError::MissingSignature | TransactionError::InvalidSignature { .. }) => {
            Ok(false)
        }
        Err(other) => Err(other).context("failed to verify signature"),
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

/// Builds a transaction from flags, signs it if a key is given, prints its
/// report and optionally writes its serialized bytes.
fn run_create(args: CreateArgs, out: &mut impl Write) -> Result<()> {
    let request = CreateTransaction {
        peer_id: args.peer_id,
        contract_id: args.contract_id,
        jsonrpc: args.jsonrpc,
        method: args.method,
        function: args.function,
        args: args.args,
    };
    let mut tx = create_transaction(request).context("failed to create transaction")?;

    let mut public_key = None;
    if let Some(key_hex) = args.signing_key.as_deref() {
        let keypair = Keypair::from_hex(key_hex).context("invalid signing key")?;
        let seal = sign_transaction(&mut tx, &keypair).context("failed to sign transaction")?;
        tracing::info!(
            id = tx.identifier(),
            seal = %hex::encode(seal),
            public_key = %keypair.public_key(),
            "transaction signed"
        );
        public_key = Some(keypair.public_key());
    }

    if let Some(path) = &args.output {
        let bytes = tx
            .serialize_bytes()
            .context("failed to serialize transaction")?;
        fs::write(path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "transaction written");
    }

    write_json(out, &report(&tx, public_key.as_ref())?)
}

/// Decodes a serialized transaction (or list) and prints its report(s).
fn run_inspect(args: InspectArgs, out: &mut impl Write) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let public_key = args
        .public_key
        .as_deref()
        .map(PublicKey::from_hex)
        .transpose()
        .context("invalid public key")?;

    if args.list {
        let txs = deserialize_list(&bytes).context("input is not a transaction list")?;
        tracing::info!(count = txs.len(), "decoded transaction list");
        let reports = txs
            .iter()
            .map(|tx| report(tx, public_key.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        write_json(out, &reports)
    } else {
        let tx = DefaultTransaction::from_bytes(&bytes).context("input is not a transaction")?;
        write_json(out, &report(&tx, public_key.as_ref())?)
    }
}

/// A wire-record file holds either one record or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireInput {
    Many(Vec<WireTransaction>),
    One(WireTransaction),
}

/// Converts wire-record JSON to serialized transaction bytes.
fn run_convert(args: ConvertArgs, out: &mut impl Write) -> Result<()> {
    let json = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let input: WireInput = serde_json::from_slice(&json)
        .context("input is neither a wire record nor a list of wire records")?;

    let (count, bytes) = match input {
        WireInput::One(record) => {
            let tx = to_entity(record).context("wire record rejected")?;
            (1, tx.serialize_bytes()?)
        }
        WireInput::Many(records) => {
            let txs = to_entity_list(records).context("wire records rejected")?;
            (txs.len(), serialize_list(&txs)?)
        }
    };

    fs::write(&args.output, &bytes)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(count, bytes = bytes.len(), path = %args.output.display(), "converted");

    write_json(
        out,
        &serde_json::json!({
            "transactions": count,
            "bytes": bytes.len(),
            "output": args.output.display().to_string(),
        }),
    )
}

fn run_keygen(out: &mut impl Write) -> Result<()> {
    let keypair = Keypair::generate();
    write_json(
        out,
        &serde_json::json!({
            "secretKey": keypair.secret_key_hex(),
            "publicKey": keypair.public_key().to_hex(),
        }),
    )
}

/// Prints version information to stdout.
fn print_version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "ledgerline {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        out,
        "protocol   {}",
        ledgerline_protocol::config::PROTOCOL_VERSION
    )?;
    writeln!(
        out,
        "signing    {}",
        ledgerline_protocol::config::SIGNING_ALGORITHM
    )?;
    Ok(())
}
