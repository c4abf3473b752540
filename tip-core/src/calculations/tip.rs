//! Tip, total, and per-person share derivation.
//!
//! This module implements the arithmetic behind the calculator: gratuity on a
//! bill, the resulting total, and the share when the total is split across a
//! party.
//!
//! # Derivation steps
//!
//! | Step | Value      | Rule |
//! |------|------------|------|
//! | 1    | tip        | `bill × percent ÷ 100`; 0 unless bill and percent are both positive; ceiling to the next whole currency unit when rounding up |
//! | 2    | total      | `bill + tip` |
//! | 3    | per person | `total ÷ max(count, 1)` |
//!
//! Rounding up applies to the *tip*, never the total: the rounded tip feeds
//! the total and the split. Values are exact decimals; the two-decimal
//! display semantic is applied by callers via
//! [`common::round_half_up`](super::common::round_half_up).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::calculations::breakdown;
//! use tip_core::session::SessionState;
//!
//! let state = SessionState::default()
//!     .set_bill(dec!(86.00))
//!     .select_tip(dec!(18))
//!     .toggle_split(true, 4);
//!
//! let result = breakdown(&state).unwrap();
//!
//! assert_eq!(result.tip_amount, dec!(15.48));
//! assert_eq!(result.total, dec!(101.48));
//! assert_eq!(result.per_person, dec!(25.37));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::ceil_to_unit;
use crate::models::CalculationSnapshot;
use crate::session::SessionState;

/// Computed values for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipBreakdown {
    pub tip_amount: Decimal,
    pub total: Decimal,
    /// `total / split_count`; equals `total` when there is no split.
    pub per_person: Decimal,
}

impl TipBreakdown {
    /// Freeze this breakdown together with its inputs into a ledger snapshot.
    pub fn snapshot(&self, state: &SessionState, location: String) -> CalculationSnapshot {
        CalculationSnapshot {
            bill_amount: state.bill_amount,
            tip_percent: state.tip_percent,
            tip_amount: self.tip_amount,
            total_amount: self.total,
            split_count: state.split_count,
            per_person: self.per_person,
            location,
        }
    }
}

/// Computes the tip for a bill.
///
/// Returns 0 when `bill <= 0` or `percent <= 0`; an incomplete entry
/// disables the calculation rather than erroring. With `round_up` set, the
/// exact tip is ceiling-rounded to the next whole currency unit (a rule that
/// rounds in the vendor's favor, deliberately not nearest-rounding).
pub fn tip_amount(bill: Decimal, percent: Decimal, round_up: bool) -> Decimal {
    if bill <= Decimal::ZERO || percent <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let tip = bill * percent / Decimal::ONE_HUNDRED;
    if round_up { ceil_to_unit(tip) } else { tip }
}

/// Adds the tip to the bill. Always exact.
pub fn bill_total(bill: Decimal, tip: Decimal) -> Decimal {
    bill + tip
}

/// Divides the total across a party.
///
/// A `count` of 0 or negative is treated as 1; the divisor is never zero or
/// negative.
pub fn per_person_share(total: Decimal, count: i64) -> Decimal {
    total / Decimal::from(count.max(1))
}

/// Derives the full breakdown for the current session state.
///
/// Returns `None` unless the state is displayable (positive bill and
/// positive tip percent).
pub fn breakdown(state: &SessionState) -> Option<TipBreakdown> {
    if !state.is_displayable() {
        debug!(
            bill = %state.bill_amount,
            percent = %state.tip_percent,
            "nothing to calculate yet"
        );
        return None;
    }

    let tip = tip_amount(state.bill_amount, state.tip_percent, state.round_up);
    let total = bill_total(state.bill_amount, tip);
    let per_person = per_person_share(total, i64::from(state.split_count));

    Some(TipBreakdown {
        tip_amount: tip,
        total,
        per_person,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::session::SessionState;

    use super::{bill_total, breakdown, per_person_share, tip_amount};

    // =========================================================================
    // tip_amount tests
    // =========================================================================

    #[test]
    fn tip_amount_is_zero_without_a_bill() {
        let result = tip_amount(Decimal::ZERO, dec!(18), false);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn tip_amount_is_zero_without_a_percent() {
        let result = tip_amount(dec!(86.00), Decimal::ZERO, false);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn tip_amount_is_zero_for_negative_inputs() {
        assert_eq!(tip_amount(dec!(-10), dec!(18), false), Decimal::ZERO);
        assert_eq!(tip_amount(dec!(10), dec!(-18), false), Decimal::ZERO);
    }

    #[test]
    fn tip_amount_matches_the_exact_product() {
        let result = tip_amount(dec!(86.00), dec!(18), false);

        assert_eq!(result, dec!(15.48));
    }

    #[test]
    fn tip_amount_rounds_up_to_the_next_dollar() {
        let result = tip_amount(dec!(50.00), dec!(15), true);

        assert_eq!(result, dec!(8.00));
    }

    #[test]
    fn tip_amount_leaves_integral_tips_unchanged_when_rounding() {
        let result = tip_amount(dec!(50.00), dec!(20), true);

        assert_eq!(result, dec!(10.00));
    }

    #[test]
    fn tip_amount_supports_fractional_percents() {
        let result = tip_amount(dec!(100.00), dec!(18.5), false);

        assert_eq!(result, dec!(18.50));
    }

    // =========================================================================
    // bill_total tests
    // =========================================================================

    #[test]
    fn bill_total_adds_bill_and_tip() {
        let result = bill_total(dec!(86.00), dec!(15.48));

        assert_eq!(result, dec!(101.48));
    }

    #[test]
    fn bill_total_uses_the_rounded_tip() {
        let tip = tip_amount(dec!(50.00), dec!(15), true);

        let result = bill_total(dec!(50.00), tip);

        assert_eq!(result, dec!(58.00));
    }

    // =========================================================================
    // per_person_share tests
    // =========================================================================

    #[test]
    fn per_person_share_divides_across_the_party() {
        let result = per_person_share(dec!(101.48), 4);

        assert_eq!(result, dec!(25.37));
    }

    #[test]
    fn per_person_share_treats_zero_count_as_one() {
        let result = per_person_share(dec!(101.48), 0);

        assert_eq!(result, dec!(101.48));
    }

    #[test]
    fn per_person_share_treats_negative_count_as_one() {
        let result = per_person_share(dec!(101.48), -3);

        assert_eq!(result, dec!(101.48));
    }

    // =========================================================================
    // breakdown tests
    // =========================================================================

    #[test]
    fn breakdown_requires_a_displayable_state() {
        let no_bill = SessionState::default().select_tip(dec!(18));
        let no_tip = SessionState::default().set_bill(dec!(86.00));

        assert_eq!(breakdown(&no_bill), None);
        assert_eq!(breakdown(&no_tip), None);
    }

    #[test]
    fn breakdown_computes_the_split_scenario() {
        let state = SessionState::default()
            .set_bill(dec!(86.00))
            .select_tip(dec!(18))
            .toggle_split(true, 4);

        let result = breakdown(&state).unwrap();

        assert_eq!(result.tip_amount, dec!(15.48));
        assert_eq!(result.total, dec!(101.48));
        assert_eq!(result.per_person, dec!(25.37));
    }

    #[test]
    fn breakdown_applies_the_round_up_rule_to_the_tip() {
        let state = SessionState::default()
            .set_bill(dec!(50.00))
            .select_tip(dec!(15))
            .set_rounding(true);

        let result = breakdown(&state).unwrap();

        assert_eq!(result.tip_amount, dec!(8.00));
        assert_eq!(result.total, dec!(58.00));
        assert_eq!(result.per_person, dec!(58.00));
    }

    #[test]
    fn breakdown_per_person_equals_total_without_a_split() {
        let state = SessionState::default()
            .set_bill(dec!(40.00))
            .select_tip(dec!(20));

        let result = breakdown(&state).unwrap();

        assert_eq!(result.per_person, result.total);
    }

    #[test]
    fn snapshot_freezes_inputs_and_derived_values() {
        let state = SessionState::default()
            .set_bill(dec!(86.00))
            .select_tip(dec!(18))
            .toggle_split(true, 4);
        let result = breakdown(&state).unwrap();

        let snapshot = result.snapshot(&state, "Portland, Oregon".to_string());

        assert_eq!(snapshot.bill_amount, dec!(86.00));
        assert_eq!(snapshot.tip_percent, dec!(18));
        assert_eq!(snapshot.tip_amount, dec!(15.48));
        assert_eq!(snapshot.total_amount, dec!(101.48));
        assert_eq!(snapshot.split_count, 4);
        assert_eq!(snapshot.per_person, dec!(25.37));
        assert_eq!(snapshot.location, "Portland, Oregon");
    }
}
