//! CLI `parse` command — segment already-recognized OCR text into messages.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use mmemory::config::MmemoryConfig;
use mmemory::dm::{parse_messages_with, DmDraft};

use super::MemberArgs;

/// Parse OCR text from `file`, or stdin when no file is given.
pub fn parse(
    config: &MmemoryConfig,
    file: Option<&Path>,
    members: &MemberArgs,
    json: bool,
) -> Result<()> {
    let (text, source) = match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read OCR text: {}", path.display()))?;
            (text, Some(path.display().to_string()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read OCR text from stdin")?;
            (text, None)
        }
    };

    let options = members.parse_options(config);
    let messages = parse_messages_with(&text, &options);
    tracing::info!(
        chars = text.chars().count(),
        messages = messages.len(),
        "parsed OCR text"
    );

    super::print_draft(&DmDraft::new(messages, source), json)
}
