/// Split raw OCR output into trimmed, non-empty lines.
pub fn segment_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let lines: Vec<&str> = segment_lines("  민주 \n\n\t\n오늘 19:11  \r\n").collect();
        assert_eq!(lines, ["민주", "오늘 19:11"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(segment_lines("").count(), 0);
        assert_eq!(segment_lines("\n \n").count(), 0);
    }

    #[test]
    fn ideographic_space_is_trimmed() {
        let lines: Vec<&str> = segment_lines("\u{3000}안녕\u{3000}").collect();
        assert_eq!(lines, ["안녕"]);
    }
}
