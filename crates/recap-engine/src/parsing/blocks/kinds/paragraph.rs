/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. They are the fallback for any line no
/// other rule claims, and their text is the line exactly as written,
/// leading indentation included.
pub struct Paragraph;

impl Paragraph {
    /// Next-line control character. Unicode whitespace, but kept as line
    /// content: reports rendered by the dashboard never treated it as blank.
    const NEXT_LINE: char = '\u{85}';
    const BYTE_ORDER_MARK: char = '\u{feff}';

    /// Characters stripped before a line is matched against any marker.
    ///
    /// Unicode whitespace except NEL, plus the byte-order mark, which model
    /// output sometimes carries at the start of a report.
    pub fn trim(line: &str) -> &str {
        line.trim_matches(Self::is_trimmed)
    }

    fn is_trimmed(c: char) -> bool {
        (c.is_whitespace() && c != Self::NEXT_LINE) || c == Self::BYTE_ORDER_MARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace_and_bom() {
        assert_eq!(Paragraph::trim("\u{feff}  # Title \t"), "# Title");
    }

    #[test]
    fn whitespace_only_trims_to_empty() {
        assert_eq!(Paragraph::trim(" \t\u{a0}\u{3000}\u{2028} "), "");
    }

    #[test]
    fn next_line_is_not_trimmed() {
        assert_eq!(Paragraph::trim("\u{85}"), "\u{85}");
        assert_eq!(Paragraph::trim(" \u{85}=====\u{85} "), "\u{85}=====\u{85}");
    }
}
