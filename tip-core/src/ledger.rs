//! The history ledger: a bounded, newest-first log of saved calculations.
//!
//! The ledger exclusively owns its ordered record sequence. An append
//! validates the snapshot, stamps it with a fresh id and timestamp, inserts
//! it at the front, and enforces the capacity by evicting from the tail.
//! Records are immutable once stored; the only other mutation is removal by
//! id.

use chrono::Local;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{round_half_up, round_half_up_dp};
use crate::models::{CalculationSnapshot, HistoryRecord};

/// Most records the ledger keeps; the oldest are evicted first.
pub const HISTORY_CAPACITY: usize = 50;

/// CSV header, in export column order.
const CSV_HEADER: [&str; 8] = [
    "Date",
    "Location",
    "Bill Amount",
    "Tip %",
    "Tip Amount",
    "Total",
    "Split Count",
    "Per Person",
];

/// Errors that can occur while mutating or exporting the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Appended snapshots must carry a positive bill and a positive tip.
    #[error("nothing to save: bill and tip must both be positive")]
    IncompleteCalculation,

    /// The underlying CSV writer failed.
    #[error("CSV export error: {0}")]
    Export(#[from] csv::Error),
}

/// Ordered sequence of saved calculations, newest first, at most
/// [`HISTORY_CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from its persisted representation.
    ///
    /// The order on disk is the ledger order (newest first). The capacity is
    /// re-applied here, so an over-long persisted list cannot grow the
    /// ledger past its bound.
    pub fn from_records(mut records: Vec<HistoryRecord>) -> Self {
        if records.len() > HISTORY_CAPACITY {
            warn!(
                stored = records.len(),
                kept = HISTORY_CAPACITY,
                "persisted history exceeds capacity; keeping the newest"
            );
            records.truncate(HISTORY_CAPACITY);
        }
        Self { records }
    }

    /// The full sequence, newest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a snapshot as the newest record.
    ///
    /// Rejects snapshots without a positive bill and tip; on success the new
    /// record (with its assigned id and timestamp) is returned. When the
    /// ledger is full the oldest record is evicted: unconditional capacity
    /// enforcement, not user-initiated.
    pub fn append(&mut self, snapshot: CalculationSnapshot) -> Result<&HistoryRecord, LedgerError> {
        if snapshot.bill_amount <= Decimal::ZERO || snapshot.tip_amount <= Decimal::ZERO {
            return Err(LedgerError::IncompleteCalculation);
        }

        let now = Local::now();
        let record = HistoryRecord {
            id: self.next_id(now.timestamp_millis()),
            saved_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            bill_amount: snapshot.bill_amount,
            tip_percent: snapshot.tip_percent,
            tip_amount: snapshot.tip_amount,
            total_amount: snapshot.total_amount,
            split_count: snapshot.split_count,
            per_person: snapshot.per_person,
            location: snapshot.location,
        };

        self.records.insert(0, record);
        if self.records.len() > HISTORY_CAPACITY {
            self.records.truncate(HISTORY_CAPACITY);
            debug!(capacity = HISTORY_CAPACITY, "history full; oldest record evicted");
        }

        Ok(&self.records[0])
    }

    /// Remove the record with the given id.
    ///
    /// Returns whether a record was removed; an absent id is a no-op, not an
    /// error.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() < before;
        if !removed {
            debug!(id, "no record with this id; nothing removed");
        }
        removed
    }

    /// Export the ledger as CSV: a header row, then one row per record in
    /// ledger order, every field quoted, money to two decimals and percent
    /// to one. The same ledger state always yields byte-identical output.
    pub fn to_csv(&self) -> Result<String, LedgerError> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;
        for record in &self.records {
            writer.write_record([
                record.saved_at.clone(),
                record.location.clone(),
                format_money(record.bill_amount),
                format_percent(record.tip_percent),
                format_money(record.tip_amount),
                format_money(record.total_amount),
                record.split_count.to_string(),
                format_money(record.per_person),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Ids are wall-clock milliseconds, bumped past the newest existing id
    /// so same-millisecond saves stay strictly increasing.
    fn next_id(&self, now_millis: i64) -> i64 {
        let newest = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        now_millis.max(newest.saturating_add(1))
    }
}

fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

fn format_percent(value: Decimal) -> String {
    format!("{:.1}", round_half_up_dp(value, 1))
}
