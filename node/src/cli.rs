//! # CLI Interface
//!
//! Defines the command-line argument structure for `ledgerline` using `clap`
//! derive. Subcommands: `create`, `inspect`, `convert`, `keygen`, `version`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Create, sign, inspect and convert ledger transactions.
#[derive(Parser, Debug)]
#[command(
    name = "ledgerline",
    about = "Create, sign, inspect and convert ledger transactions",
    version,
    propagate_version = true
)]
pub struct LedgerlineCli {
    #[command(flatten)]
    pub log: LogArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Logging options shared by every subcommand.
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Default `tracing` filter. `RUST_LOG` takes precedence when set.
    #[arg(
        long,
        global = true,
        env = "LEDGERLINE_LOG_LEVEL",
        default_value = "ledgerline=info,ledgerline_protocol=info"
    )]
    pub log_level: String,

    /// Log output format.
    #[arg(
        long,
        global = true,
        env = "LEDGERLINE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a new transaction, optionally sign it, and print its wire record.
    Create(CreateArgs),
    /// Decode serialized transaction bytes and print wire records and seals.
    Inspect(InspectArgs),
    /// Convert a wire-record JSON file into serialized transaction bytes.
    Convert(ConvertArgs),
    /// Generate a fresh Ed25519 signing keypair.
    Keygen,
    /// Print version information and exit.
    Version,
}

/// Arguments for the `create` subcommand.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Id of the submitting peer.
    #[arg(long, env = "LEDGERLINE_PEER_ID")]
    pub peer_id: String,

    /// Target contract id.
    #[arg(long, default_value = "")]
    pub contract_id: String,

    /// JSON-RPC version tag.
    #[arg(long, default_value = "2.0")]
    pub jsonrpc: String,

    /// Call kind: `invoke` or `query`.
    #[arg(long, default_value = "invoke")]
    pub method: String,

    /// Contract function to call.
    #[arg(long)]
    pub function: String,

    /// Function argument. Repeat for several, order is kept.
    #[arg(long = "arg")]
    pub args: Vec<String>,

    /// Hex-encoded Ed25519 secret key. When set, the transaction is signed.
    #[arg(long, env = "LEDGERLINE_SIGNING_KEY", hide_env_values = true)]
    pub signing_key: Option<String>,

    /// Write the serialized transaction bytes here.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// File holding serialized transaction bytes.
    pub input: PathBuf,

    /// Treat the input as a transaction list.
    #[arg(long)]
    pub list: bool,

    /// Hex-encoded public key to verify signatures against.
    #[arg(long)]
    pub public_key: Option<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// JSON file with one wire record or an array of them.
    pub input: PathBuf,

    /// Destination for the serialized bytes.
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        LedgerlineCli::command().debug_assert();
    }

    #[test]
    fn parses_create_with_repeated_args() {
        let cli = LedgerlineCli::try_parse_from([
            "ledgerline",
            "create",
            "--peer-id",
            "peer-1",
            "--function",
            "transfer",
            "--arg",
            "a",
            "--arg",
            "b",
        ])
        .unwrap();

        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.peer_id, "peer-1");
                assert_eq!(args.method, "invoke");
                assert_eq!(args.jsonrpc, "2.0");
                assert_eq!(args.args, vec!["a", "b"]);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn log_format_is_global() {
        let cli =
            LedgerlineCli::try_parse_from(["ledgerline", "keygen", "--log-format", "json"])
                .unwrap();
        assert_eq!(cli.log.log_format, LogFormat::Json);
    }
}
