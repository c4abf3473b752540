pub mod calc;
pub mod config;
pub mod history;
pub mod save;
pub mod scan;
