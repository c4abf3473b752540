mod commands;
mod geo;
mod ocr;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tip_store::JsonFileStore;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator with a saved-calculation history.
///
/// Computes tip, total, and per-person share, keeps a capped history of
/// saved calculations, and can read a bill amount straight off a receipt
/// image.
#[derive(Debug, Parser)]
#[command(name = "tiptally", version)]
struct Cli {
    /// Directory holding persisted state (history and preferences).
    /// Defaults to the platform data directory.
    #[arg(long, env = "TIPTALLY_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a tip without saving anything.
    Calc(commands::calc::CalcArgs),
    /// Compute a tip and save it to the history.
    Save(commands::save::SaveArgs),
    /// List, delete, or export saved calculations.
    #[command(subcommand)]
    History(commands::history::HistoryCommand),
    /// Read a bill amount from a receipt image.
    Scan(commands::scan::ScanArgs),
    /// Show or change persisted preferences.
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs stay quiet.
/// * Drops timestamps and targets to keep terminal output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── state location ──────────────────────────────────────────────────────────

/// Path of the state document: the `--data-dir` / `TIPTALLY_DATA_DIR`
/// directory when given, the platform data directory otherwise.
fn state_path(data_dir: Option<PathBuf>) -> PathBuf {
    let dir = data_dir.unwrap_or_else(|| match dirs::data_dir() {
        Some(base) => base.join("tiptally"),
        None => {
            warn!("no platform data directory; keeping state under the working directory");
            PathBuf::from(".tiptally")
        }
    });

    dir.join("state.json")
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let store = JsonFileStore::open(state_path(cli.data_dir)).await?;

    match cli.command {
        Command::Calc(args) => commands::calc::run(&store, args).await,
        Command::Save(args) => commands::save::run(&store, args).await,
        Command::History(command) => commands::history::run(&store, command).await,
        Command::Scan(args) => commands::scan::run(args).await,
        Command::Config(command) => commands::config::run(&store, command).await,
    }
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn state_path_honours_an_explicit_data_dir() {
        let path = state_path(Some(PathBuf::from("/tmp/tiptally-test")));

        assert_eq!(path, PathBuf::from("/tmp/tiptally-test/state.json"));
    }

    #[test]
    fn state_path_picks_a_default_otherwise() {
        let path = state_path(None);

        assert!(path.ends_with("tiptally/state.json") || path.ends_with(".tiptally/state.json"));
    }
}
