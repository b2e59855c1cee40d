#![allow(dead_code)]

use std::sync::Arc;

use mmemory::config::MmemoryConfig;
use mmemory::ocr::{RecognizeError, TextRecognizer};
use mmemory::server::AppState;

pub const MEMBER1: &str = "지우";
pub const MEMBER2: &str = "민주";

/// Recognizer that returns canned text, or fails, without touching an OCR engine.
pub struct FakeRecognizer {
    pub text: Option<String>,
}

impl TextRecognizer for FakeRecognizer {
    fn recognize(&self, image: &[u8], _language: &str) -> Result<String, RecognizeError> {
        if image.is_empty() {
            return Err(RecognizeError::EmptyImage);
        }
        self.text.clone().ok_or_else(|| RecognizeError::Engine {
            status: "exit status: 1".into(),
            stderr: "Error in pixReadMem".into(),
        })
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Config with both member names set.
pub fn test_config() -> MmemoryConfig {
    let mut config = MmemoryConfig::default();
    config.members.member1_name = MEMBER1.into();
    config.members.member2_name = MEMBER2.into();
    config
}

/// App state whose recognizer yields `text`, or fails when `None`.
pub fn test_state(text: Option<&str>) -> Arc<AppState> {
    let recognizer = Arc::new(FakeRecognizer {
        text: text.map(str::to_string),
    });
    Arc::new(AppState::new(test_config(), recognizer))
}
