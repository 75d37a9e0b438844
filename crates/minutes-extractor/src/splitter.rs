//! Splitting a minutes file into meeting segments

use crate::config::{PipelineConfig, DEFAULT_SEPARATORS};
use minutes_domain::Segment;

/// Splits raw minutes text on separator lines
///
/// A separator is a line whose trimmed content equals one of the configured
/// tokens. Text between separators is trimmed; blank spans are dropped.
///
/// With separator runs enabled, a token made of one repeated character also
/// matches longer runs of it: `***` then splits on `*****` too.
#[derive(Debug, Clone)]
pub struct Splitter {
    separators: Vec<String>,
    min_segment_chars: usize,
    separator_runs: bool,
}

impl Splitter {
    /// Create a splitter for the given separator tokens
    pub fn new<I, S>(separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            separators: separators.into_iter().map(Into::into).collect(),
            min_segment_chars: 0,
            separator_runs: false,
        }
    }

    /// Build a splitter from pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.separators.iter().cloned())
            .with_min_segment_chars(config.min_segment_chars)
            .with_separator_runs(config.separator_runs)
    }

    /// Drop segments shorter than `min` characters after trimming
    pub fn with_min_segment_chars(mut self, min: usize) -> Self {
        self.min_segment_chars = min;
        self
    }

    /// Let single-character tokens match longer runs of that character
    pub fn with_separator_runs(mut self, enabled: bool) -> Self {
        self.separator_runs = enabled;
        self
    }

    /// Split the text into ordered, 1-indexed segments
    pub fn split(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if self.is_separator(line) {
                self.flush(&mut current, &mut segments);
            } else {
                current.push(line);
            }
        }
        self.flush(&mut current, &mut segments);

        segments
    }

    fn is_separator(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.separators
            .iter()
            .any(|s| s == trimmed || (self.separator_runs && is_run_of(s, trimmed)))
    }

    fn flush(&self, current: &mut Vec<&str>, segments: &mut Vec<Segment>) {
        let joined = current.join("\n");
        current.clear();

        let text = joined.trim();
        if text.is_empty() || text.chars().count() < self.min_segment_chars {
            return;
        }
        segments.push(Segment::new(segments.len() + 1, text));
    }
}

/// True when `token` repeats one character and `line` is a longer run of it
fn is_run_of(token: &str, line: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    chars.all(|c| c == first)
        && line.chars().count() >= token.chars().count()
        && line.chars().all(|c| c == first)
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_two_meetings() {
        let segments = Splitter::default().split("Meeting A text\n***\nMeeting B text");
        assert_eq!(texts(&segments), vec!["Meeting A text", "Meeting B text"]);
        assert_eq!(segments[0].index, 1);
        assert_eq!(segments[1].index, 2);
    }

    #[test]
    fn test_dash_separator_and_padding() {
        let text = "  First meeting  \n   ---   \n\nSecond meeting\nline two\n";
        let segments = Splitter::default().split(text);
        assert_eq!(texts(&segments), vec!["First meeting", "Second meeting\nline two"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Splitter::default().split("").is_empty());
        assert!(Splitter::default().split("   \n\n  ").is_empty());
    }

    #[test]
    fn test_whitespace_only_segments_are_discarded() {
        let text = "***\nA\n***\n   \n---\n\n***\nB\n***";
        let segments = Splitter::default().split(text);
        assert_eq!(texts(&segments), vec!["A", "B"]);
        assert_eq!(segments[1].index, 2);
    }

    #[test]
    fn test_separator_must_be_whole_line() {
        let text = "Dues *** were paid\nTreasurer said --- nothing";
        let segments = Splitter::default().split(text);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_longer_runs_are_not_separators_by_default() {
        let segments = Splitter::default().split("A\n*****\nB");
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let segments = Splitter::default().split("A\r\n***\r\nB\r\n");
        assert_eq!(texts(&segments), vec!["A", "B"]);
    }

    #[test]
    fn test_custom_separators() {
        let splitter = Splitter::new(["Meeting:", "====="]);
        let segments = splitter.split("Meeting:\nOne\n=====\nTwo\n***\nstill two");
        assert_eq!(texts(&segments), vec!["One", "Two\n***\nstill two"]);
    }

    #[test]
    fn test_min_segment_chars() {
        let splitter = Splitter::default().with_min_segment_chars(10);
        let segments = splitter.split("short\n***\nlong enough text");
        assert_eq!(texts(&segments), vec!["long enough text"]);
        assert_eq!(segments[0].index, 1);
    }

    #[test]
    fn test_separator_runs() {
        let splitter = Splitter::default().with_separator_runs(true);
        let segments = splitter.split("A\n*****\nB\n  ----------  \nC\n**\nD\n*-*\nE");
        assert_eq!(texts(&segments), vec!["A", "B", "C\n**\nD\n*-*\nE"]);
    }

    #[test]
    fn test_separator_runs_ignore_mixed_tokens() {
        let splitter = Splitter::new(["Meeting:"]).with_separator_runs(true);
        let segments = splitter.split("A\nMeeting:\nB\nMeeting::\nC");
        assert_eq!(texts(&segments), vec!["A", "B\nMeeting::\nC"]);
    }

    #[test]
    fn test_from_config() {
        let config = PipelineConfig {
            separators: vec!["###".to_string()],
            ..PipelineConfig::default()
        };
        let segments = Splitter::from_config(&config).split("A\n###\nB\n***\nC");
        assert_eq!(texts(&segments), vec!["A", "B\n***\nC"]);
    }

    #[test]
    fn test_from_config_enables_separator_runs() {
        let config = PipelineConfig::from_toml("separator_runs = true\n").unwrap();
        let segments = Splitter::from_config(&config).split("A\n-----\nB");
        assert_eq!(texts(&segments), vec!["A", "B"]);
    }

    #[test]
    fn test_segment_count_matches_non_empty_spans() {
        let spans = ["one", "", "  ", "two", "three\n\nfour", "\n"];
        let text = spans.join("\n***\n");
        let expected = spans.iter().filter(|s| !s.trim().is_empty()).count();
        assert_eq!(Splitter::default().split(&text).len(), expected);
    }
}
