pub mod calculations;
pub mod extract;
pub mod ledger;
pub mod location;
pub mod models;
pub mod ocr;
pub mod session;
pub mod storage;

pub use extract::extract_amount;
pub use ledger::{HistoryLedger, LedgerError};
pub use location::{LocateError, LocationProvider, ReverseGeocoder};
pub use models::*;
pub use ocr::{OcrEngine, OcrError};
pub use session::SessionState;
pub use storage::{StateStore, StorageError};
