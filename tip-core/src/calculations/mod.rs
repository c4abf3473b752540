//! Tip calculation modules.
//!
//! This module provides the pure arithmetic for tip, total, and per-person
//! share derivation, plus the shared display-rounding helpers.

pub mod common;
pub mod tip;

pub use tip::{TipBreakdown, bill_total, breakdown, per_person_share, tip_amount};
