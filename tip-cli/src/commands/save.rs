//! `save`: compute a breakdown, resolve where it happened, and append it to
//! the history.

use anyhow::{Context, bail};
use clap::Parser;

use tip_core::StateStore;
use tip_core::calculations::breakdown;
use tip_core::storage::{load_history, load_rounding, save_history};

use crate::commands::calc::CalcArgs;
use crate::geo;
use crate::output;

#[derive(Debug, Parser)]
pub struct SaveArgs {
    #[command(flatten)]
    pub calc: CalcArgs,

    /// Use this label instead of looking the location up.
    #[arg(long)]
    pub location: Option<String>,
}

pub async fn run(store: &dyn StateStore, args: SaveArgs) -> anyhow::Result<()> {
    let stored_rounding = load_rounding(store).await;
    let state = args.calc.session_state(stored_rounding);

    let Some(result) = breakdown(&state) else {
        bail!("nothing to save: enter a bill above zero and a tip percent above zero");
    };

    let location = match args.location {
        Some(label) => label,
        None => geo::resolve_current_location().await,
    };

    let mut ledger = load_history(store).await;
    let record = ledger.append(result.snapshot(&state, location))?;
    let id = record.id;

    save_history(store, &ledger)
        .await
        .context("could not save the calculation")?;

    println!("{}", output::render_breakdown(&state, &result));
    println!();
    println!("Saved to history (id {id}).");
    Ok(())
}
