//! Terminal rendering helpers.
//!
//! All money and percent values go through the two-decimal display rounding
//! from [`tip_core::calculations::common`] before formatting, so the terminal
//! agrees with the CSV export to the cent.

use rust_decimal::Decimal;

use tip_core::HistoryRecord;
use tip_core::calculations::TipBreakdown;
use tip_core::calculations::common::{round_half_up, round_half_up_dp};
use tip_core::session::SessionState;

/// `$12.34`: dollar sign, half-up rounding, always two decimals.
pub fn format_currency(value: Decimal) -> String {
    format!("${:.2}", round_half_up(value))
}

/// `18.0%`: half-up rounding, always one decimal.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}%", round_half_up_dp(value, 1))
}

/// Multi-line summary of a computed breakdown.
///
/// The per-person line only appears when the bill is actually split.
pub fn render_breakdown(state: &SessionState, result: &TipBreakdown) -> String {
    let mut lines = vec![
        format!("bill    {}", format_currency(state.bill_amount)),
        format!(
            "tip     {} ({})",
            format_currency(result.tip_amount),
            format_percent(state.tip_percent)
        ),
        format!("total   {}", format_currency(result.total)),
    ];

    if state.split_count > 1 {
        lines.push(format!(
            "each    {} ({} ways)",
            format_currency(result.per_person),
            state.split_count
        ));
    }

    lines.join("\n")
}

/// Two-line entry for `history list`.
pub fn render_record(record: &HistoryRecord) -> String {
    let mut line = format!(
        "[{}] {}  {}\n  {} + {} tip = {}",
        record.id,
        record.saved_at,
        record.location,
        format_currency(record.bill_amount),
        format_percent(record.tip_percent),
        format_currency(record.total_amount),
    );

    if record.split_count > 1 {
        line.push_str(&format!(
            " ({} each, {} ways)",
            format_currency(record.per_person),
            record.split_count
        ));
    }

    line
}

// ─────────────────────────────────────────────────────────────────────────────
