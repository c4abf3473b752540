mod history_record;
mod theme;

pub use history_record::{CalculationSnapshot, HistoryRecord};
pub use theme::Theme;
