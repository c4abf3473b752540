//! `history`: list, delete, and export saved calculations.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use tip_core::StateStore;
use tip_core::storage::{load_history, save_history};

use crate::output;

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// Show saved calculations, newest first.
    List,
    /// Delete one record by its id.
    Delete(DeleteArgs),
    /// Write the whole history to a CSV file.
    Export(ExportArgs),
}

#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Record id, as shown by `history list`.
    pub id: i64,
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file. Defaults to `tip-history-<today>.csv`.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(store: &dyn StateStore, command: HistoryCommand) -> anyhow::Result<()> {
    match command {
        HistoryCommand::List => list(store).await,
        HistoryCommand::Delete(args) => delete(store, args.id).await,
        HistoryCommand::Export(args) => export(store, args.output).await,
    }
}

async fn list(store: &dyn StateStore) -> anyhow::Result<()> {
    let ledger = load_history(store).await;

    if ledger.is_empty() {
        println!("No saved calculations yet.");
        return Ok(());
    }

    for record in ledger.records() {
        println!("{}", output::render_record(record));
    }
    Ok(())
}

async fn delete(store: &dyn StateStore, id: i64) -> anyhow::Result<()> {
    let mut ledger = load_history(store).await;

    if !ledger.remove(id) {
        println!("No record with id {id}; nothing deleted.");
        return Ok(());
    }

    save_history(store, &ledger)
        .await
        .context("could not save the updated history")?;
    println!("Deleted record {id}.");
    Ok(())
}

async fn export(store: &dyn StateStore, output: Option<PathBuf>) -> anyhow::Result<()> {
    let ledger = load_history(store).await;

    if ledger.is_empty() {
        println!("No history to export.");
        return Ok(());
    }

    let path =
        output.unwrap_or_else(|| PathBuf::from(default_export_name(Local::now().date_naive())));
    let csv = ledger.to_csv()?;

    tokio::fs::write(&path, csv)
        .await
        .with_context(|| format!("could not write {}", path.display()))?;

    println!("Exported {} records to {}.", ledger.len(), path.display());
    Ok(())
}

/// `tip-history-YYYY-MM-DD.csv` for the given date.
fn default_export_name(date: NaiveDate) -> String {
    format!("tip-history-{}.csv", date.format("%Y-%m-%d"))
}

// ─────────────────────────────────────────────────────────────────────────────
