//! Integration tests for persisted calculator state using the real file store.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::json;
use tempfile::TempDir;
use tip_core::calculations::breakdown;
use tip_core::session::SessionState;
use tip_core::storage::{
    HISTORY_KEY, load_history, load_rounding, load_theme, save_history, save_rounding, save_theme,
};
use tip_core::{HistoryLedger, StateStore, Theme};
use tip_store::JsonFileStore;

async fn open_store(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::open(dir.path().join("state.json"))
        .await
        .expect("Failed to open store")
}

/// A ledger with one realistic record appended through the full calculation
/// path.
fn sample_ledger() -> HistoryLedger {
    let state = SessionState::default()
        .set_bill(dec!(86.00))
        .select_tip(dec!(18))
        .toggle_split(true, 4);
    let result = breakdown(&state).expect("Failed to compute breakdown");

    let mut ledger = HistoryLedger::new();
    ledger
        .append(result.snapshot(&state, "Portland, Oregon".to_string()))
        .expect("Failed to append record");
    ledger
}

#[tokio::test]
async fn history_survives_a_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let ledger = sample_ledger();

    {
        let store = open_store(&dir).await;
        save_history(&store, &ledger)
            .await
            .expect("Failed to save history");
    }
    let store = open_store(&dir).await;
    let loaded = load_history(&store).await;

    assert_eq!(loaded, ledger);
}

#[tokio::test]
async fn csv_export_is_identical_after_a_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let ledger = sample_ledger();
    let before = ledger.to_csv().expect("Failed to export CSV");

    {
        let store = open_store(&dir).await;
        save_history(&store, &ledger)
            .await
            .expect("Failed to save history");
    }
    let store = open_store(&dir).await;
    let after = load_history(&store)
        .await
        .to_csv()
        .expect("Failed to export CSV");

    assert_eq!(after, before);
}

#[tokio::test]
async fn preferences_survive_a_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    {
        let store = open_store(&dir).await;
        save_theme(&store, Theme::Dark)
            .await
            .expect("Failed to save theme");
        save_rounding(&store, true)
            .await
            .expect("Failed to save rounding preference");
    }
    let store = open_store(&dir).await;

    assert_eq!(load_theme(&store).await, Theme::Dark);
    assert!(load_rounding(&store).await);
}

#[tokio::test]
async fn a_corrupt_document_recovers_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");
    std::fs::write(&path, b"}}}{{{").expect("Failed to write corrupt file");

    let store = JsonFileStore::open(&path)
        .await
        .expect("Failed to open store");

    assert!(load_history(&store).await.is_empty());
    assert_eq!(load_theme(&store).await, Theme::Light);
    assert!(!load_rounding(&store).await);
}

#[tokio::test]
async fn a_malformed_history_value_loads_as_an_empty_ledger() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    {
        let store = open_store(&dir).await;
        store
            .write(HISTORY_KEY, json!(42))
            .await
            .expect("Failed to write");
        save_theme(&store, Theme::Dark)
            .await
            .expect("Failed to save theme");
    }
    let store = open_store(&dir).await;

    // The bad key degrades alone; the rest of the document still reads.
    assert!(load_history(&store).await.is_empty());
    assert_eq!(load_theme(&store).await, Theme::Dark);
}

#[tokio::test]
async fn deleting_a_record_persists_across_reopens() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let id = {
        let store = open_store(&dir).await;
        let mut ledger = sample_ledger();
        let state = SessionState::default()
            .set_bill(dec!(40.00))
            .select_tip(dec!(20));
        let result = breakdown(&state).expect("Failed to compute breakdown");
        ledger
            .append(result.snapshot(&state, "Unknown Location".to_string()))
            .expect("Failed to append record");
        let id = ledger.records()[0].id;
        save_history(&store, &ledger)
            .await
            .expect("Failed to save history");
        id
    };

    let store = open_store(&dir).await;
    let mut ledger = load_history(&store).await;
    assert_eq!(ledger.len(), 2);
    assert!(ledger.remove(id));
    save_history(&store, &ledger)
        .await
        .expect("Failed to save history");

    let reopened = open_store(&dir).await;
    let final_ledger = load_history(&reopened).await;
    assert_eq!(final_ledger.len(), 1);
    assert!(final_ledger.records().iter().all(|r| r.id != id));
}
