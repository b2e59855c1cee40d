//! CLI `recognize` command — OCR a screenshot, then parse it into messages.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use mmemory::config::MmemoryConfig;
use mmemory::dm::{parse_messages_with, DmDraft};
use mmemory::ocr;

use super::MemberArgs;

pub async fn recognize(
    config: &MmemoryConfig,
    image: &Path,
    lang: Option<&str>,
    members: &MemberArgs,
    json: bool,
) -> Result<()> {
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("failed to read image: {}", image.display()))?;

    let recognizer = ocr::create_recognizer(&config.ocr)?;
    let language = lang.unwrap_or(&config.ocr.language).to_string();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg} ({elapsed})")
            .context("invalid spinner template")?,
    );
    pb.set_message(format!("Recognizing text ({language})..."));
    pb.enable_steady_tick(Duration::from_millis(120));

    let result =
        tokio::task::spawn_blocking(move || recognizer.recognize(&bytes, &language)).await?;
    pb.finish_and_clear();

    let text = result.context("recognition failed")?;
    let options = members.parse_options(config);
    let messages = parse_messages_with(&text, &options);
    tracing::info!(
        image = %image.display(),
        messages = messages.len(),
        "recognized DM screenshot"
    );

    let source = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    super::print_draft(&DmDraft::new(messages, source), json)
}
