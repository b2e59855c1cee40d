//! Groups classified lines into message bubbles.

use tracing::trace;

use super::classify::LineKind;
use super::types::ParsedMessage;
use super::MIN_CONTENT_CHARS;

/// Buffers content fragments until a time or nickname boundary closes the
/// bubble.
#[derive(Debug, Default)]
pub struct MessageAccumulator<'a> {
    buffer: Vec<&'a str>,
    last_time: &'a str,
    messages: Vec<ParsedMessage>,
}

impl<'a> MessageAccumulator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next classified line, in source order.
    pub fn push(&mut self, line: LineKind<'a>) {
        match line {
            LineKind::Time(time) => {
                self.flush(time);
                self.last_time = time;
            }
            LineKind::Nickname => {
                let time = self.last_time;
                self.flush(time);
            }
            LineKind::Noise => {}
            LineKind::Content {
                text,
                time: Some(time),
            } => {
                self.buffer.push(text);
                self.flush(time);
                self.last_time = time;
            }
            LineKind::Content { text, time: None } => self.buffer.push(text),
        }
    }

    /// Flush whatever is still buffered and return all messages.
    pub fn finish(mut self) -> Vec<ParsedMessage> {
        let time = self.last_time;
        self.flush(time);
        self.messages
    }

    fn flush(&mut self, time: &str) {
        if self.buffer.is_empty() {
            return;
        }
        let joined = self.buffer.join(" ");
        let content = joined.trim();
        if content.chars().count() >= MIN_CONTENT_CHARS {
            self.messages.push(ParsedMessage::text(content, time));
        } else {
            trace!(fragment = content, "dropping short fragment");
        }
        self.buffer.clear();
    }
}
