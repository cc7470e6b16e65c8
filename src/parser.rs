//! Line scanner for indented wiki outlines.
//!
//! Exactly two line shapes carry TOC information: a `lang:xx` header naming
//! the document language, and an indented bullet holding one topic
//! (`  * 001 - Home`). Everything else is ignored so the scanner can be fed
//! whole wiki pages without preprocessing.

use regex::Regex;
use tracing::instrument;

/// One topic extracted from an outline bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRecord {
    /// Three-digit topic id as written in the source
    pub id: String,
    /// Display title, wiki link markup already resolved
    pub title: String,
    /// Nesting depth in two-space indentation units, 1 = top level
    pub depth: usize,
}

/// A recognized outline line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// `lang:xx` header carrying the two-letter language tag
    Header(String),
    /// Indented topic bullet
    Topic(TopicRecord),
}

/// Scanner for one outline dialect.
///
/// Patterns are compiled once at construction; a single parser instance is
/// meant to be reused across all lines of a document.
#[derive(Debug)]
pub struct LineParser {
    topic_regex: Regex,
    lang_regex: Regex,
    link_regex: Regex,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            topic_regex: Regex::new(r"^((?:  )+)\* (\d{3}) - (.+)$").unwrap(),
            lang_regex: Regex::new(r"\blang:([a-z]{2})\b").unwrap(),
            link_regex: Regex::new(r"^\[\[([^\]|]*)(?:\|([^\]]+))?\]\]$").unwrap(),
        }
    }

    /// Classify a single line.
    ///
    /// Returns None for anything that carries no TOC information: blanks,
    /// prose, unindented bullets, malformed ids, headers with tags that are
    /// not two lowercase letters. A line that parses as a topic is never
    /// also a header, even if its title happens to contain `lang:`.
    #[instrument(level = "trace", skip(self))]
    pub fn parse_line(&self, line: &str) -> Option<LineEvent> {
        if let Some(caps) = self.topic_regex.captures(line) {
            let depth = caps[1].len() / 2;
            let id = caps[2].to_string();
            let title = self.resolve_title(caps[3].trim());
            return Some(LineEvent::Topic(TopicRecord { id, title, depth }));
        }
        if let Some(caps) = self.lang_regex.captures(line) {
            return Some(LineEvent::Header(caps[1].to_string()));
        }
        None
    }

    /// Unwrap wiki link markup around a title: `[[target|Title]]` keeps the
    /// display part, `[[target]]` falls back to the target itself. Titles
    /// without link markup pass through unchanged.
    fn resolve_title(&self, raw: &str) -> String {
        if let Some(caps) = self.link_regex.captures(raw) {
            if let Some(display) = caps.get(2) {
                return display.as_str().trim().to_string();
            }
            return caps[1].trim().to_string();
        }
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_indented_bullet_when_parse_line_then_topic_with_unit_depth() {
        let parser = LineParser::new();

        let event = parser.parse_line("  * 001 - Home");

        assert_eq!(
            event,
            Some(LineEvent::Topic(TopicRecord {
                id: "001".to_string(),
                title: "Home".to_string(),
                depth: 1,
            }))
        );
    }

    #[test]
    fn given_deeper_bullet_when_parse_line_then_depth_counts_two_space_units() {
        let parser = LineParser::new();

        let event = parser.parse_line("      * 101 - Playback");

        match event {
            Some(LineEvent::Topic(record)) => assert_eq!(record.depth, 3),
            other => panic!("expected topic, got {:?}", other),
        }
    }

    #[test]
    fn given_piped_link_title_when_parse_line_then_display_part_wins() {
        let parser = LineParser::new();

        let event = parser.parse_line("    * 100 - [[en:manual|Using Kinovea]]");

        match event {
            Some(LineEvent::Topic(record)) => {
                assert_eq!(record.title, "Using Kinovea");
                assert_eq!(record.depth, 2);
            }
            other => panic!("expected topic, got {:?}", other),
        }
    }

    #[test]
    fn given_bare_link_title_when_parse_line_then_target_becomes_title() {
        let parser = LineParser::new();

        let event = parser.parse_line("  * 002 - [[quickstart]]");

        match event {
            Some(LineEvent::Topic(record)) => assert_eq!(record.title, "quickstart"),
            other => panic!("expected topic, got {:?}", other),
        }
    }

    #[test]
    fn given_title_with_inner_dash_when_parse_line_then_title_kept_whole() {
        let parser = LineParser::new();

        let event = parser.parse_line("  * 042 - Export - advanced options");

        match event {
            Some(LineEvent::Topic(record)) => {
                assert_eq!(record.title, "Export - advanced options");
            }
            other => panic!("expected topic, got {:?}", other),
        }
    }

    #[test]
    fn given_header_line_when_parse_line_then_language_tag_extracted() {
        let parser = LineParser::new();

        assert_eq!(
            parser.parse_line("lang:fr"),
            Some(LineEvent::Header("fr".to_string()))
        );
    }

    #[test]
    fn given_header_inside_prose_when_parse_line_then_tag_still_found() {
        let parser = LineParser::new();

        assert_eq!(
            parser.parse_line("generated page, lang:de, do not edit"),
            Some(LineEvent::Header("de".to_string()))
        );
    }

    #[test]
    fn given_bullet_containing_lang_marker_when_parse_line_then_topic_wins() {
        let parser = LineParser::new();

        let event = parser.parse_line("  * 010 - Notes on lang:it support");

        match event {
            Some(LineEvent::Topic(record)) => {
                assert_eq!(record.title, "Notes on lang:it support");
            }
            other => panic!("expected topic, got {:?}", other),
        }
    }

    #[rstest]
    #[case::blank("")]
    #[case::prose("Just some text")]
    #[case::unindented_bullet("* 001 - Home")]
    #[case::odd_indent("   * 001 - Home")]
    #[case::tab_indent("\t* 001 - Home")]
    #[case::two_digit_id("  * 01 - Home")]
    #[case::four_digit_id("  * 0001 - Home")]
    #[case::missing_separator("  * 001 Home")]
    #[case::no_space_after_bullet("  *001 - Home")]
    #[case::uppercase_tag("lang:EN")]
    #[case::long_tag("lang:english")]
    #[case::glued_prefix("slang:en")]
    fn given_unrecognized_line_when_parse_line_then_none(#[case] line: &str) {
        let parser = LineParser::new();

        assert_eq!(parser.parse_line(line), None);
    }
}
