//! Text recognition for DM screenshots.
//!
//! Provides the [`TextRecognizer`] trait and a [`tesseract`] implementation
//! that shells out to the Tesseract CLI. The recognizer is created via
//! [`create_recognizer`] from configuration.

pub mod tesseract;

use anyhow::Result;
use thiserror::Error;

/// Why a recognition attempt failed. Callers report all of these to the
/// curator as "recognition failed"; there is no automatic retry.
#[derive(Debug, Error)]
pub enum RecognizeError {
    #[error("image is empty")]
    EmptyImage,
    #[error("failed to launch OCR engine `{binary}`: {source}")]
    Launch {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("OCR engine exited with {status}: {stderr}")]
    Engine { status: String, stderr: String },
    #[error("OCR engine produced invalid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for turning an image into text.
///
/// Recognition is slow (seconds per image) and blocking; callers in async
/// contexts should use `tokio::task::spawn_blocking`.
pub trait TextRecognizer: Send + Sync {
    /// Recognize the text in an encoded image (PNG, JPEG, ...).
    fn recognize(&self, image: &[u8], language: &str) -> Result<String, RecognizeError>;

    /// Short engine name for logs and diagnostics.
    fn name(&self) -> &str;
}

/// Create a recognizer from config.
///
/// Currently only `"tesseract"` is supported.
pub fn create_recognizer(config: &crate::config::OcrConfig) -> Result<Box<dyn TextRecognizer>> {
    match config.engine.as_str() {
        "tesseract" => {
            let binary = crate::config::expand_tilde(&config.binary);
            Ok(Box::new(tesseract::TesseractRecognizer::new(binary)))
        }
        other => anyhow::bail!("unknown OCR engine: {other}. Supported: tesseract"),
    }
}
