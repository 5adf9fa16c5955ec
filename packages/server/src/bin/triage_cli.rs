//! Offline batch triage
//!
//! Reads one message per line from a file (or stdin), runs the same pipeline
//! the HTTP server uses against a fresh in-memory store, and prints the sorted
//! batch as pretty JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_core::config::Config;
use triage_core::domains::triage::analyze_batch;
use triage_core::domains::triage::utils::LocationResolver;
use triage_core::kernel::ServerDeps;

#[derive(Parser)]
#[command(name = "triage_cli")]
#[command(about = "Triage a batch of emergency messages, one per line")]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Skip the LLM and use the fallback extraction for every message
    #[arg(long)]
    offline: bool,

    /// Disable coordinate jitter
    #[arg(long)]
    deterministic: bool,
}

fn read_messages(input: Option<&PathBuf>) -> Result<Vec<String>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    Ok(raw.lines().map(str::to_string).collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,triage_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if cli.offline {
        config.openai_api_key = None;
    }

    let mut deps = ServerDeps::from_config(&config)?;
    if cli.deterministic {
        deps.resolver = LocationResolver::deterministic();
    }

    let messages = read_messages(cli.input.as_ref())?;
    let results = analyze_batch(&messages, &deps)
        .await
        .context("Batch analysis failed")?;

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
