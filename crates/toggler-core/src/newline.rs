//! Line splitting and joining that preserves a document's newline convention.

/// Newline convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detects the convention from the first line break in `content`.
    ///
    /// Content without any line break is treated as `Lf`.
    pub fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(pos) if content[..pos].ends_with('\r') => Self::CrLf,
            _ => Self::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Splits `content` into lines without their terminators.
///
/// A trailing newline produces a final empty line so that joining the lines
/// again restores it. Lone `\r` characters in the last segment are content and
/// are kept.
pub fn split_lines(content: &str) -> (LineEnding, Vec<&str>) {
    let ending = LineEnding::detect(content);
    let mut lines: Vec<&str> = content.split('\n').collect();

    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        let raw: &str = *line;
        *line = raw.strip_suffix('\r').unwrap_or(raw);
    }

    (ending, lines)
}

/// Joins lines with a single convention.
pub fn join_lines<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(ending.as_str());
        }
        out.push_str(line.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("no newline"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_detect_uses_first_break() {
        assert_eq!(LineEnding::detect("a\r\nb\nc"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\nb\r\nc"), LineEnding::Lf);
    }

    #[test]
    fn test_split_keeps_trailing_empty_line() {
        let (ending, lines) = split_lines("a\nb\n");
        assert_eq!(ending, LineEnding::Lf);
        assert_eq!(lines, vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_crlf() {
        let (ending, lines) = split_lines("a\r\nb\r\n");
        assert_eq!(ending, LineEnding::CrLf);
        assert_eq!(lines, vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_empty() {
        let (_, lines) = split_lines("");
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_join_roundtrip() {
        for content in ["", "a", "a\n", "a\nb\n\nc", "a\r\nb\r\n", "\r\n"] {
            let (ending, lines) = split_lines(content);
            assert_eq!(join_lines(&lines, ending), content);
        }
    }

    #[test]
    fn test_mixed_input_is_normalised() {
        let (ending, lines) = split_lines("a\r\nb\nc\r\n");
        assert_eq!(join_lines(&lines, ending), "a\r\nb\r\nc\r\n");

        let (ending, lines) = split_lines("a\nb\r\nc");
        assert_eq!(join_lines(&lines, ending), "a\nb\nc");
    }

    #[test]
    fn test_trailing_carriage_return_without_newline_kept() {
        let (_, lines) = split_lines("a\nb\r");
        assert_eq!(lines, vec!["a", "b\r"]);
    }
}
