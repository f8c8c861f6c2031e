//! Handler chaincode entry point.
//!
//! Reads one JSON invocation per line on stdin and writes one JSON response
//! per line on stdout. Logs go to stderr.

use std::io;

use anyhow::Context;
use clap::Parser;
use handler_chaincode::{Chaincode, StdioTransport};
use handler_hostapi::config::{DEFAULT_MAX_KEY_LEN, DEFAULT_MAX_VALUE_LEN, DEFAULT_MAX_WRITE_BYTES};
use handler_hostapi::{ChaincodeConfig, MemStore};
use handler_primitives::{ChaincodeInfo, ContractInfo};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Command line interface for the Handler chaincode
#[derive(Parser, Debug)]
#[command(name = "handler-chaincode")]
#[command(about = "Handler CRUD chaincode served over JSON lines on stdin/stdout")]
#[command(version)]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "CHAINCODE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Maximum key length in bytes
    #[arg(long, env = "CHAINCODE_MAX_KEY_LEN", default_value_t = DEFAULT_MAX_KEY_LEN)]
    max_key_len: usize,

    /// Maximum value length in bytes
    #[arg(long, env = "CHAINCODE_MAX_VALUE_LEN", default_value_t = DEFAULT_MAX_VALUE_LEN)]
    max_value_len: usize,

    /// Maximum bytes written by one transaction
    #[arg(long, env = "CHAINCODE_MAX_WRITE_BYTES", default_value_t = DEFAULT_MAX_WRITE_BYTES)]
    max_write_bytes: u64,

    /// Contract version reported in metadata
    #[arg(long, env = "CHAINCODE_CONTRACT_VERSION")]
    contract_version: Option<String>,

    /// Chaincode title reported in metadata
    #[arg(long, env = "CHAINCODE_TITLE")]
    title: Option<String>,
}

impl Cli {
    fn config(&self) -> ChaincodeConfig {
        ChaincodeConfig {
            max_key_len: self.max_key_len,
            max_value_len: self.max_value_len,
            max_write_bytes: self.max_write_bytes,
        }
    }

    fn contract_info(&self) -> ContractInfo {
        let mut info = ContractInfo::default();
        if let Some(version) = &self.contract_version {
            info.version = version.clone();
        }
        info
    }

    fn chaincode_info(&self) -> ChaincodeInfo {
        let mut info = ChaincodeInfo::default();
        if let Some(title) = &self.title {
            info.title = title.clone();
        }
        info
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `--log-level`.
fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter: {level}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let chaincode = Chaincode::new(cli.contract_info(), cli.chaincode_info(), cli.config());
    let metadata = serde_json::to_string(&chaincode.metadata()).context("failed to encode metadata")?;
    info!(%metadata, "registered contract");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut transport = StdioTransport::new(stdin.lock(), stdout.lock());
    let mut store = MemStore::new();

    let summary = chaincode
        .start(&mut store, &mut transport)
        .context("chaincode service loop failed")?;
    info!(?summary, keys = store.len(), "shutting down");
    Ok(())
}
