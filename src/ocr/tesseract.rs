//! Tesseract CLI recognizer.
//!
//! Pipes the image through `tesseract stdin stdout -l <lang>` so no temporary
//! files are needed.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{RecognizeError, TextRecognizer};

pub struct TesseractRecognizer {
    binary: PathBuf,
}

impl TesseractRecognizer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Return the first line of `tesseract --version`, e.g. `tesseract 5.3.4`.
    pub fn version(&self) -> Result<String, RecognizeError> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|source| self.launch_error(source))?;
        let text = String::from_utf8(output.stdout)?;
        Ok(text.lines().next().unwrap_or_default().trim().to_string())
    }

    fn launch_error(&self, source: std::io::Error) -> RecognizeError {
        RecognizeError::Launch {
            binary: self.binary.display().to_string(),
            source,
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &[u8], language: &str) -> Result<String, RecognizeError> {
        if image.is_empty() {
            return Err(RecognizeError::EmptyImage);
        }

        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| self.launch_error(source))?;

        // The engine may exit before reading stdin; always reap it and
        // prefer its exit status and stderr over the broken pipe.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(image),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RecognizeError::Engine {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        let text = String::from_utf8(output.stdout)?;
        tracing::debug!(
            engine = "tesseract",
            language,
            image_bytes = image.len(),
            text_chars = text.chars().count(),
            "recognition complete"
        );
        Ok(text)
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
