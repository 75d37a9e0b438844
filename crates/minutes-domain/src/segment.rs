//! Segment module - one meeting's worth of raw minutes text

/// A contiguous span of raw minutes text bounded by separator lines.
///
/// Segments only live for the duration of a pipeline pass. The `index` is the
/// 1-based position of the segment in the source file and is what the error
/// log uses to point back at a failed meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// 1-based position in the source file
    pub index: usize,

    /// Trimmed, non-empty meeting text
    pub text: String,
}

impl Segment {
    /// Create a new segment
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Leading excerpt of the text, at most `max_chars` characters, with
    /// newlines escaped so it fits on a single log line.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut excerpt: String = self.text.chars().take(max_chars).collect();
        if self.text.chars().count() > max_chars {
            excerpt.push_str("...");
        }
        excerpt
            .replace('\\', "\\\\")
            .replace('\r', "")
            .replace('\n', "\\n")
            .replace('"', "\\\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text() {
        let segment = Segment::new(1, "Meeting at Joe's");
        assert_eq!(segment.excerpt(80), "Meeting at Joe's");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let segment = Segment::new(1, "ééééé");
        assert_eq!(segment.excerpt(3), "ééé...");
    }

    #[test]
    fn test_excerpt_escapes_newlines_and_quotes() {
        let segment = Segment::new(2, "Line one\r\nSaid \"aye\"");
        assert_eq!(segment.excerpt(80), "Line one\\nSaid \\\"aye\\\"");
    }
}
