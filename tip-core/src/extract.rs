//! Amount extraction from OCR-recognized receipt text.
//!
//! Recognized text is noisy: multi-line, with unrelated digits (dates, item
//! counts, phone numbers) around the figure that matters. This module scans
//! it with a fixed set of patterns for common currency renderings and picks
//! the best candidate.
//!
//! # Patterns
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `$([0-9]+\.?[0-9]*)` | `$42.50` |
//! | `([0-9]+\.?[0-9]*)\s*\$` | `42.50 $` |
//! | `total[:\s]*\$?([0-9]+\.?[0-9]*)` (case-insensitive) | `Total: $42.50` |
//! | `amount[:\s]*\$?([0-9]+\.?[0-9]*)` (case-insensitive) | `Amount: 42.50` |
//! | `([0-9]+\.?[0-9]*)\s*total` (case-insensitive) | `42.50 total` |
//!
//! Every match across every pattern joins the candidate set; overlapping
//! matches are collected independently (duplicates are harmless since only
//! the maximum survives). Candidates outside `(0, 10000)` are discarded as
//! noise. The maximum plausible candidate wins, on the theory that the
//! largest figure on a receipt is usually the grand total.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::extract_amount;
//!
//! assert_eq!(extract_amount("Total: $42.50 Tax: $3.10"), Some(dec!(42.50)));
//! assert_eq!(extract_amount("no digits here"), None);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

static AMOUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\$([0-9]+\.?[0-9]*)",
        r"([0-9]+\.?[0-9]*)\s*\$",
        r"(?i)total[:\s]*\$?([0-9]+\.?[0-9]*)",
        r"(?i)amount[:\s]*\$?([0-9]+\.?[0-9]*)",
        r"(?i)([0-9]+\.?[0-9]*)\s*total",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("amount pattern must compile"))
    .collect()
});

/// Candidates outside `(0, 10000)` are OCR noise, not receipt totals.
fn is_plausible(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount < Decimal::from(10_000)
}

/// Extracts the best-guess currency amount from recognized text.
///
/// Returns `None` when no plausible candidate is found: a recoverable
/// condition the caller answers with a manual-entry prompt, never an error.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    let mut candidates = Vec::new();

    for pattern in AMOUNT_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            let Some(matched) = captures.get(1) else {
                continue;
            };
            // OCR often leaves a bare trailing dot ("42.") on amounts.
            let cleaned = matched.as_str().trim_end_matches('.');
            let Ok(amount) = cleaned.parse::<Decimal>() else {
                debug!(candidate = matched.as_str(), "unparseable candidate skipped");
                continue;
            };
            if !is_plausible(amount) {
                debug!(%amount, "candidate outside plausible range skipped");
                continue;
            }
            candidates.push(amount);
        }
    }

    let best = candidates.into_iter().max();
    if best.is_none() {
        debug!("no plausible amount in recognized text");
    }
    best
}
