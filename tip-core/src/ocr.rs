//! OCR engine contract.
//!
//! The engine itself is a black box: it takes a receipt image and returns
//! whatever text it recognized. Recognized text goes to
//! [`extract_amount`](crate::extract::extract_amount); an engine failure is
//! recoverable and answered with a manual-entry prompt, never a crash.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine could not be started (for a subprocess engine, the binary
    /// is missing or not executable).
    #[error("OCR engine unavailable: {0}")]
    Unavailable(String),

    /// The engine ran but failed to produce text for this image.
    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Recognizes text in a receipt image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &Path) -> Result<String, OcrError>;
}
