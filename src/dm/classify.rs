//! Per-line classification of OCR output.
//!
//! Checks run in a fixed order: time-only, nickname, noise, content. Each
//! later check assumes the earlier ones did not match.

use super::time::{is_time_only, split_trailing_time};
use super::{ParseOptions, MIN_CONTENT_CHARS};

/// What a single trimmed OCR line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A standalone timestamp closing the current bubble.
    Time(&'a str),
    /// A sender label above a run of bubbles.
    Nickname,
    /// Too short to be real text.
    Noise,
    /// Bubble text, with the time split off when the line ended in one.
    Content {
        text: &'a str,
        time: Option<&'a str>,
    },
}

/// Classify one trimmed line.
pub fn classify_line<'a>(line: &'a str, options: &ParseOptions) -> LineKind<'a> {
    if is_time_only(line) {
        return LineKind::Time(line);
    }

    if options
        .member_names()
        .iter()
        .any(|name| is_nickname(line, name, options.nickname_slack()))
    {
        return LineKind::Nickname;
    }

    if line.chars().count() < MIN_CONTENT_CHARS {
        return LineKind::Noise;
    }

    let (text, time) = split_trailing_time(line);
    LineKind::Content { text, time }
}

/// Exact match, or a short line containing the name (OCR often adds stray
/// glyphs around a nickname label). An unset name never matches.
fn is_nickname(line: &str, name: &str, slack: usize) -> bool {
    if name.is_empty() {
        return false;
    }
    if line == name {
        return true;
    }
    line.to_lowercase().contains(&name.to_lowercase())
        && line.chars().count() <= name.chars().count() + slack
}
