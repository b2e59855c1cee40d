//! Message and draft types produced by the DM transcript parser.
//!
//! [`ParsedMessage`] is one chat bubble recovered from OCR text. [`DmDraft`]
//! wraps a parse result for the admin form that a curator reviews before saving.

use serde::{Deserialize, Serialize};

/// Notice attached to a draft when nothing could be recovered from the text.
pub const NO_MESSAGES_NOTICE: &str = "no messages found";

/// Kind of a DM entry. OCR only ever yields text bubbles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Text,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message bubble recovered from a screenshot transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Always [`MessageKind::Text`]; serialized as `"type"`.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Assembled bubble text, trimmed, at least two characters long.
    pub content: String,
    /// `H:MM` or `HH:MM` timestamp, or empty when the group had none.
    pub time: String,
}

impl ParsedMessage {
    pub fn text(content: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Text,
            content: content.into(),
            time: time.into(),
        }
    }
}

/// A parse result ready to pre-fill the admin message editor.
#[derive(Debug, Clone, Serialize)]
pub struct DmDraft {
    /// RFC 3339 timestamp of when the text was parsed.
    pub parsed_at: String,
    /// Where the text came from (file name, image name), if known.
    pub source: Option<String>,
    pub message_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub messages: Vec<ParsedMessage>,
}

impl DmDraft {
    pub fn new(messages: Vec<ParsedMessage>, source: Option<String>) -> Self {
        let notice = messages.is_empty().then(|| NO_MESSAGES_NOTICE.to_string());
        Self {
            parsed_at: chrono::Utc::now().to_rfc3339(),
            source,
            message_count: messages.len(),
            notice,
            messages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
