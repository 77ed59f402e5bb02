//! Parsing of the model's free-text analysis reply.
//!
//! The analysis prompt asks for four labelled sections (`**Sentiment:**`,
//! `**Topics:**`, `**Word Count:**`, `**Readability Score:**`) but nothing
//! enforces that format, so extraction is best effort and never fails.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref SENTIMENT: Regex = Regex::new(r"\*\*Sentiment:\*\*\s*(.*)").unwrap();
    static ref TOPICS: Regex = Regex::new(r"\*\*Topics:\*\*\s*(.*)").unwrap();
    static ref WORD_COUNT: Regex = Regex::new(r"\*\*Word Count:\*\*\s*(.*)").unwrap();
    // Readability commentary is the closing section and may span lines
    static ref READABILITY: Regex = Regex::new(r"(?s)\*\*Readability Score:\*\*\s*(.*)").unwrap();
}

/// The fields extracted from an analysis reply.
///
/// Absent labels leave their field empty, except `readability`: when its
/// label is missing the whole trimmed reply lands there, so the user still
/// sees the model's output even if the requested format was ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAnalysis {
    pub sentiment: String,
    pub topics: String,
    pub word_count: String,
    pub readability: String,
}

impl ParsedAnalysis {
    /// Whether any of the line-oriented labels were found.
    pub fn is_structured(&self) -> bool {
        !self.sentiment.is_empty() || !self.topics.is_empty() || !self.word_count.is_empty()
    }
}

/// Extract the labelled fields from an analysis reply.
///
/// Matching is case-sensitive and takes the first occurrence of each label.
/// Arbitrary whitespace after the colon is skipped before the capture.
pub fn parse_analysis(reply: &str) -> ParsedAnalysis {
    ParsedAnalysis {
        sentiment: line_field(&SENTIMENT, reply),
        topics: line_field(&TOPICS, reply),
        word_count: line_field(&WORD_COUNT, reply),
        readability: READABILITY
            .captures(reply)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| reply.trim().to_string()),
    }
}

/// Capture the remainder of the label's line, or empty when the label is absent.
fn line_field(pattern: &Regex, reply: &str) -> String {
    pattern
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "**Sentiment:** Positive\n**Topics:** AI, ethics\n**Word Count:** 120\n**Readability Score:** Grade 8, clear and concise.";

    #[test]
    fn extracts_all_four_fields() {
        let parsed = parse_analysis(WELL_FORMED);
        assert_eq!(parsed.sentiment, "Positive");
        assert_eq!(parsed.topics, "AI, ethics");
        assert_eq!(parsed.word_count, "120");
        assert_eq!(parsed.readability, "Grade 8, clear and concise.");
    }

    #[test]
    fn unformatted_reply_lands_in_readability() {
        let reply = "This text discusses AI without following the requested format.";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.sentiment, "");
        assert_eq!(parsed.topics, "");
        assert_eq!(parsed.word_count, "");
        assert_eq!(parsed.readability, reply);
        assert!(!parsed.is_structured());
    }

    #[test]
    fn missing_readability_label_falls_back_to_whole_reply() {
        let reply = "**Sentiment:** Neutral\n**Topics:** weather\nNo score given.";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.sentiment, "Neutral");
        assert_eq!(parsed.topics, "weather");
        assert_eq!(parsed.readability, reply.trim());
    }

    #[test]
    fn missing_line_fields_stay_empty() {
        let reply = "**Readability Score:** Grade 10.\nExtra commentary\nacross lines.";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.sentiment, "");
        assert_eq!(parsed.topics, "");
        assert_eq!(parsed.word_count, "");
        assert_eq!(parsed.readability, "Grade 10.\nExtra commentary\nacross lines.");
    }

    #[test]
    fn readability_capture_spans_to_end_of_reply() {
        let reply = "**Word Count:** 42\n**Readability Score:**\nGrade 6.\nShort words, short sentences.";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.word_count, "42");
        assert_eq!(parsed.readability, "Grade 6.\nShort words, short sentences.");
    }

    #[test]
    fn whitespace_after_colon_is_tolerated() {
        let reply = "**Sentiment:**    Negative\n**Readability Score:**   Grade 12";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.sentiment, "Negative");
        assert_eq!(parsed.readability, "Grade 12");
    }

    #[test]
    fn first_occurrence_wins() {
        let reply = "**Sentiment:** Positive\n**Sentiment:** Negative\n**Readability Score:** n/a";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.sentiment, "Positive");
    }

    #[test]
    fn label_matching_is_case_sensitive() {
        let reply = "**sentiment:** positive\n**readability score:** n/a";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.sentiment, "");
        // No matching label at all, so the raw reply carries through
        assert_eq!(parsed.readability, reply);
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(parse_analysis(WELL_FORMED), parse_analysis(WELL_FORMED));
        let loose = "no labels here at all";
        assert_eq!(parse_analysis(loose), parse_analysis(loose));
    }

    #[test]
    fn surrounding_prose_does_not_break_extraction() {
        let reply = "Here is the analysis you asked for.\n\n**Sentiment:** Mixed\n**Topics:** economics, policy\n**Word Count:** 310\n**Readability Score:** Grade 11, somewhat dense.\nHope this helps!";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.sentiment, "Mixed");
        assert_eq!(parsed.topics, "economics, policy");
        assert_eq!(parsed.word_count, "310");
        assert_eq!(
            parsed.readability,
            "Grade 11, somewhat dense.\nHope this helps!"
        );
    }
}
