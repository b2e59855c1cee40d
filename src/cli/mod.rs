pub mod doctor;
pub mod parse;
pub mod recognize;

use anyhow::Result;

use mmemory::config::MmemoryConfig;
use mmemory::dm::{DmDraft, ParseOptions};

/// Member-name flags shared by `parse` and `recognize`.
#[derive(Debug, Default, clap::Args)]
pub struct MemberArgs {
    /// Override the configured first member name
    #[arg(long)]
    pub member1: Option<String>,
    /// Override the configured second member name
    #[arg(long)]
    pub member2: Option<String>,
}

impl MemberArgs {
    pub fn parse_options(&self, config: &MmemoryConfig) -> ParseOptions {
        config.parse_options_for(self.member1.as_deref(), self.member2.as_deref())
    }
}

/// Print a draft as pretty JSON or as a numbered list.
pub fn print_draft(draft: &DmDraft, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(draft)?);
        return Ok(());
    }

    if draft.is_empty() {
        println!("No messages found. Try again with a clearer screenshot.");
        return Ok(());
    }

    println!("Parsed {} message(s)", draft.message_count);
    if let Some(ref source) = draft.source {
        println!("Source: {source}");
    }
    println!("{}", "=".repeat(40));
    for (i, msg) in draft.messages.iter().enumerate() {
        let time = if msg.time.is_empty() { "--:--" } else { msg.time.as_str() };
        println!("  {:>2}. [{:>5}] {}", i + 1, time, msg.content);
    }
    println!();
    println!("Review and correct the messages before saving.");
    Ok(())
}
