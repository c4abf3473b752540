//! `scan`: read a bill amount off a receipt.
//!
//! OCR failures are not errors; the command reports them and leaves the user
//! to type the amount in, the same way an unreadable photo would.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::warn;

use tip_core::{OcrEngine, extract_amount};

use crate::ocr::TesseractOcr;
use crate::output;

#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Receipt image to run OCR on.
    #[arg(required_unless_present = "text")]
    pub image: Option<PathBuf>,

    /// Skip OCR and scan already-recognized text from this file.
    #[arg(long, conflicts_with = "image")]
    pub text: Option<PathBuf>,
}

pub async fn run(args: ScanArgs) -> anyhow::Result<()> {
    let recognized = match (&args.image, &args.text) {
        (_, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?,
        (Some(path), None) => match TesseractOcr::new().recognize(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "recognition failed");
                println!("Could not read the image. Enter the amount manually.");
                return Ok(());
            }
        },
        (None, None) => bail!("give a receipt image or --text <file>"),
    };

    match extract_amount(&recognized) {
        Some(amount) => {
            println!("Detected amount: {}", output::format_currency(amount));
            println!("Use it with: tiptally calc --bill {amount} --tip <percent>");
        }
        None => println!("No amount detected. Enter the bill manually."),
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
