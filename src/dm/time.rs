//! Timestamp recognition for chat bubbles.
//!
//! Screenshots render a bubble's time either on its own line or appended to
//! the bubble's last line, so both shapes are recognized here.

use regex::Regex;
use std::sync::LazyLock;

static RE_TIME_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("valid time regex"));
static RE_TRAILING_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+([0-9]{1,2}:[0-9]{2})$").expect("valid trailing time regex")
});

/// `true` if the whole line is a single `H:MM` / `HH:MM` token.
pub fn is_time_only(line: &str) -> bool {
    RE_TIME_ONLY.is_match(line)
}

/// Split a trailing time off a content line.
///
/// Returns the text before the time and the time token, or the line
/// unchanged with `None` when it does not end in a time.
pub fn split_trailing_time(line: &str) -> (&str, Option<&str>) {
    match RE_TRAILING_TIME.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(text), Some(time)) => (text.as_str(), Some(time.as_str())),
            _ => (line, None),
        },
        None => (line, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_only_lines() {
        assert!(is_time_only("19:11"));
        assert!(is_time_only("7:05"));
        assert!(!is_time_only("123:45"));
        assert!(!is_time_only("19:1"));
        assert!(!is_time_only("오후 7:05"));
        assert!(!is_time_only("19:11 "));
        // full-width digits are not times
        assert!(!is_time_only("１９:１１"));
    }

    #[test]
    fn splits_trailing_time() {
        assert_eq!(
            split_trailing_time("오늘 ㅇㅇ이랑 연습했어 19:11"),
            ("오늘 ㅇㅇ이랑 연습했어", Some("19:11"))
        );
        assert_eq!(split_trailing_time("ok   7:05"), ("ok", Some("7:05")));
    }

    #[test]
    fn keeps_line_without_trailing_time() {
        assert_eq!(split_trailing_time("이제 괜찮아"), ("이제 괜찮아", None));
        // time glued to the text is not split
        assert_eq!(split_trailing_time("meet at19:11"), ("meet at19:11", None));
        // a bare time has no text part
        assert_eq!(split_trailing_time("19:11"), ("19:11", None));
        assert_eq!(split_trailing_time("score 3:100"), ("score 3:100", None));
    }

    #[test]
    fn only_the_last_time_is_split() {
        assert_eq!(
            split_trailing_time("from 9:00 to 10:30"),
            ("from 9:00 to", Some("10:30"))
        );
    }
}
