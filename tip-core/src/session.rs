//! Session state for the calculation currently on screen.
//!
//! This module holds the inputs a front-end displays (bill, tip percent,
//! split count, rounding flag) behind pure transition methods. The state is
//! never mutated in place from outside; every transition validates its input
//! and returns the next state, keeping a single source of truth for what is
//! currently displayed.

use rust_decimal::Decimal;
use tracing::warn;

/// Inputs of the current calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Non-negative; zero means "no bill entered."
    pub bill_amount: Decimal,
    /// In `[0, 100]`; zero means "no tip selected."
    pub tip_percent: Decimal,
    /// At least 1; 1 means "no split."
    pub split_count: u32,
    /// Round the computed tip up to the next whole currency unit.
    pub round_up: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            bill_amount: Decimal::ZERO,
            tip_percent: Decimal::ZERO,
            split_count: 1,
            round_up: false,
        }
    }
}

impl SessionState {
    /// Set the bill amount. Negative input is clamped to zero.
    #[must_use]
    pub fn set_bill(self, amount: Decimal) -> Self {
        Self {
            bill_amount: amount.max(Decimal::ZERO),
            ..self
        }
    }

    /// Select a tip percentage, clamped to `[0, 100]`.
    #[must_use]
    pub fn select_tip(self, percent: Decimal) -> Self {
        Self {
            tip_percent: percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            ..self
        }
    }

    /// Enable splitting across `count` people, or disable splitting.
    ///
    /// An enabled count below 1 is stored as 1; disabling always resets the
    /// count to 1.
    #[must_use]
    pub fn toggle_split(self, enabled: bool, count: u32) -> Self {
        Self {
            split_count: if enabled { count.max(1) } else { 1 },
            ..self
        }
    }

    /// Flip the round-up-tip flag.
    #[must_use]
    pub fn toggle_rounding(self) -> Self {
        Self {
            round_up: !self.round_up,
            ..self
        }
    }

    /// Set the round-up-tip flag directly (used when seeding the state from
    /// the persisted preference).
    #[must_use]
    pub fn set_rounding(self, round_up: bool) -> Self {
        Self { round_up, ..self }
    }

    /// Reset bill, tip, and split for a fresh calculation.
    ///
    /// The rounding flag survives: it doubles as a persisted preference, so a
    /// form reset must not flip a stored setting.
    #[must_use]
    pub fn clear(self) -> Self {
        Self {
            round_up: self.round_up,
            ..Self::default()
        }
    }

    /// A result is displayable only with a positive bill and a positive tip
    /// percent.
    pub fn is_displayable(&self) -> bool {
        self.bill_amount > Decimal::ZERO && self.tip_percent > Decimal::ZERO
    }
}

/// Normalizes input for amount parsing: trims whitespace, drops a leading
/// currency symbol, and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().trim_start_matches('$').trim().replace(',', "")
}

/// Parses free-form bill input into an amount.
///
/// Handles `$` prefixes and comma thousands separators. Empty or
/// unparseable input coerces to 0 (logged), never an error; a zero bill
/// simply disables calculation.
pub fn parse_amount_input(s: &str) -> Decimal {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %s, "non-numeric amount coerced to 0: {}", e);
        Decimal::ZERO
    })
}

/// Parses free-form tip-percent input.
///
/// Tolerates a trailing `%`. Empty or unparseable input coerces to 0; range
/// clamping happens in [`SessionState::select_tip`].
pub fn parse_percent_input(s: &str) -> Decimal {
    let normalized = s.trim().trim_end_matches('%').trim().to_string();
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %s, "non-numeric percent coerced to 0: {}", e);
        Decimal::ZERO
    })
}

/// Parses free-form split-count input. Anything unparseable, and any count
/// below 1, coerces to 1.
pub fn parse_split_input(s: &str) -> u32 {
    s.trim().parse::<u32>().map_or(1, |n| n.max(1))
}
