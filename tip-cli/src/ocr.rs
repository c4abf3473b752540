//! Text recognition backed by the `tesseract` executable.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use tip_core::{OcrEngine, OcrError};

/// Shells out to `tesseract <image> stdout` and captures the recognized
/// text.
pub struct TesseractOcr {
    program: String,
}

impl TesseractOcr {
    pub fn new() -> Self {
        Self::with_program("tesseract")
    }

    /// Point at a different executable name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, image: &Path) -> Result<String, OcrError> {
        debug!(image = %image.display(), "running tesseract");

        let output = Command::new(&self.program)
            .arg(image)
            .arg("stdout")
            .output()
            .await
            .map_err(|e| OcrError::Unavailable(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[tokio::test]
    async fn a_missing_binary_reports_unavailable() {
        let engine = TesseractOcr::with_program("tesseract-that-does-not-exist");

        let result = engine.recognize(&PathBuf::from("receipt.png")).await;

        assert!(matches!(result, Err(OcrError::Unavailable(_))));
    }

    #[tokio::test]
    async fn a_failing_binary_reports_a_recognition_error() {
        let engine = TesseractOcr::with_program("false");

        let result = engine.recognize(&PathBuf::from("receipt.png")).await;

        assert!(matches!(result, Err(OcrError::Recognition(_))));
    }
}
