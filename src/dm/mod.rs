//! DM screenshot transcript parser.
//!
//! Turns raw OCR text of a chat screenshot into an ordered list of
//! [`ParsedMessage`]s. The pipeline is: [`segment_lines`] → [`classify_line`]
//! → [`MessageAccumulator`]. It is a best-effort heuristic: the output is a
//! first draft that a curator edits before saving, so misclassified lines are
//! tolerated rather than reported.
//!
//! ```
//! use mmemory::dm::parse_messages;
//!
//! let messages = parse_messages("민주\n오늘 ㅇㅇ이랑 연습했어 19:11", "", "민주");
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].content, "오늘 ㅇㅇ이랑 연습했어");
//! assert_eq!(messages[0].time, "19:11");
//! ```

pub mod accumulate;
pub mod classify;
pub mod segment;
pub mod time;
pub mod types;

pub use accumulate::MessageAccumulator;
pub use classify::{classify_line, LineKind};
pub use segment::segment_lines;
pub use types::{DmDraft, MessageKind, ParsedMessage, NO_MESSAGES_NOTICE};

use tracing::debug;

/// Characters a line may carry beyond a member name and still count as
/// that member's nickname label.
pub const DEFAULT_NICKNAME_SLACK: usize = 10;

/// Shorter fragments are OCR noise.
pub const MIN_CONTENT_CHARS: usize = 2;

/// Member names and tolerances used while classifying lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    member_names: [String; 2],
    nickname_slack: usize,
}

impl ParseOptions {
    pub fn new(member1_name: &str, member2_name: &str) -> Self {
        Self {
            member_names: [member1_name.to_string(), member2_name.to_string()],
            nickname_slack: DEFAULT_NICKNAME_SLACK,
        }
    }

    pub fn with_nickname_slack(mut self, slack: usize) -> Self {
        self.nickname_slack = slack;
        self
    }

    pub fn member_names(&self) -> [&str; 2] {
        [self.member_names[0].as_str(), self.member_names[1].as_str()]
    }

    pub fn nickname_slack(&self) -> usize {
        self.nickname_slack
    }
}

/// Parse OCR text into messages using the default nickname slack.
pub fn parse_messages(
    raw_text: &str,
    member1_name: &str,
    member2_name: &str,
) -> Vec<ParsedMessage> {
    parse_messages_with(raw_text, &ParseOptions::new(member1_name, member2_name))
}

/// Parse OCR text into messages. Never fails; unusable input yields an empty list.
pub fn parse_messages_with(raw_text: &str, options: &ParseOptions) -> Vec<ParsedMessage> {
    let mut acc = MessageAccumulator::new();
    let mut line_count = 0usize;

    for line in segment_lines(raw_text) {
        line_count += 1;
        acc.push(classify_line(line, options));
    }

    let messages = acc.finish();
    debug!(
        lines = line_count,
        messages = messages.len(),
        "parsed DM transcript"
    );
    messages
}
