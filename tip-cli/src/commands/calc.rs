//! `calc`: compute a breakdown without touching the history.

use anyhow::bail;
use clap::Parser;

use tip_core::StateStore;
use tip_core::calculations::breakdown;
use tip_core::session::{self, SessionState};
use tip_core::storage::load_rounding;

use crate::output;

#[derive(Debug, Parser)]
pub struct CalcArgs {
    /// Bill amount, e.g. `86.00` (a leading `$` is fine).
    #[arg(long)]
    pub bill: String,

    /// Tip percentage between 0 and 100, e.g. `18` or `18.5`.
    #[arg(long)]
    pub tip: String,

    /// Split the total across this many people.
    #[arg(long, default_value_t = 1)]
    pub split: u32,

    /// Round the tip up to the next whole dollar.
    #[arg(long)]
    pub round_up: bool,

    /// Keep the exact tip even if the stored preference rounds up.
    #[arg(long, conflicts_with = "round_up")]
    pub no_round_up: bool,
}

impl CalcArgs {
    /// Build the session state: the stored rounding preference first, the
    /// explicit flags on top.
    pub fn session_state(&self, stored_rounding: bool) -> SessionState {
        let round_up = if self.round_up {
            true
        } else if self.no_round_up {
            false
        } else {
            stored_rounding
        };

        SessionState::default()
            .set_bill(session::parse_amount_input(&self.bill))
            .select_tip(session::parse_percent_input(&self.tip))
            .toggle_split(self.split > 1, self.split)
            .set_rounding(round_up)
    }
}

pub async fn run(store: &dyn StateStore, args: CalcArgs) -> anyhow::Result<()> {
    let stored_rounding = load_rounding(store).await;
    let state = args.session_state(stored_rounding);

    let Some(result) = breakdown(&state) else {
        bail!("enter a bill above zero and a tip percent above zero");
    };

    println!("{}", output::render_breakdown(&state, &result));
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn args(bill: &str, tip: &str) -> CalcArgs {
        CalcArgs {
            bill: bill.to_string(),
            tip: tip.to_string(),
            split: 1,
            round_up: false,
            no_round_up: false,
        }
    }

    #[test]
    fn builds_a_state_from_raw_inputs() {
        let state = args("$86.00", "18%").session_state(false);

        assert_eq!(state.bill_amount, dec!(86.00));
        assert_eq!(state.tip_percent, dec!(18));
        assert_eq!(state.split_count, 1);
        assert!(!state.round_up);
    }

    #[test]
    fn the_stored_preference_seeds_rounding() {
        let state = args("50", "20").session_state(true);

        assert!(state.round_up);
    }

    #[test]
    fn the_round_up_flag_overrides_a_stored_off() {
        let mut with_flag = args("50", "20");
        with_flag.round_up = true;

        let state = with_flag.session_state(false);

        assert!(state.round_up);
    }

    #[test]
    fn the_no_round_up_flag_overrides_a_stored_on() {
        let mut with_flag = args("50", "20");
        with_flag.no_round_up = true;

        let state = with_flag.session_state(true);

        assert!(!state.round_up);
    }

    #[test]
    fn a_zero_split_collapses_to_one() {
        let mut zero_split = args("50", "20");
        zero_split.split = 0;

        let state = zero_split.session_state(false);

        assert_eq!(state.split_count, 1);
    }

    #[test]
    fn junk_inputs_coerce_to_an_undisplayable_state() {
        let state = args("lunch", "tip").session_state(false);

        assert!(!state.is_displayable());
    }
}
