use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One saved calculation, immutable after creation.
///
/// Field names on the wire are camelCase (`billAmount`, `tipPercent`, …)
/// with the timestamp stored under `date`, matching the persisted `history`
/// layout described in the storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Time-of-creation based, strictly increasing; the sole delete key.
    pub id: i64,
    /// Human-readable creation time, captured at save.
    #[serde(rename = "date")]
    pub saved_at: String,
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub tip_amount: Decimal,
    pub total_amount: Decimal,
    pub split_count: u32,
    pub per_person: Decimal,
    /// Best-effort geographic label, `"Unknown Location"` when lookup failed.
    pub location: String,
}

/// For appending to the ledger (no id or timestamp yet; the ledger assigns
/// both at save time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationSnapshot {
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub tip_amount: Decimal,
    pub total_amount: Decimal,
    pub split_count: u32,
    pub per_person: Decimal,
    pub location: String,
}
