//! Concrete classification rules for EU legal texts.

use std::sync::LazyLock;

use regex::Regex;

use super::rule::{capture, optional_capture, LineRule};
use super::types::{Classification, LineKind};

/// Title line: document type, `(EU) YYYY/NNN` identifier, "of the", issuing body.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(Regulation|Directive|Decision|Recommendation|Opinion)\s+(\(EU\)\s*\d{4}/\d+)\s+of\s+the\s+(.+?)\s*$",
    )
    .expect("valid regex")
});

/// Chapter line: case-insensitive keyword, number with optional lowercase suffix.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?i:chapter)\s+(\d+[a-z]?)(?:\s+(.*?))?\s*$").expect("valid regex")
});

/// Section line: case-insensitive keyword, purely numeric number.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?i:section)\s+(\d+)(?:\s+(.*?))?\s*$").expect("valid regex")
});

/// Article line: case-insensitive keyword, number with optional lowercase suffix.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?i:article)\s+(\d+[a-z]?)(?:\s+(.*?))?\s*$").expect("valid regex")
});

/// Paragraph line: optional "N." marker followed by the remaining text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAPH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d+\.)(?:\s+|$))?(.*?)\s*$").expect("valid regex")
});

/// Subparagraph line: optional "a)" or "(a)" marker followed by the remaining text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBPARAGRAPH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:([a-z]\)|\([a-z]\))(?:\s+|$))?(.*?)\s*$").expect("valid regex")
});

/// Leading list marker that makes a line a continuation instead of a paragraph.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LIST_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[a-z]\)|\([a-z]\))(?:\s|$)").expect("valid regex"));

/// Check whether a line starts with a lettered list marker ("a)" or "(a)").
#[must_use]
pub fn starts_with_list_marker(line: &str) -> bool {
    LIST_MARKER_PATTERN.is_match(line)
}

/// Document title rule.
pub struct TitleRule;

impl LineRule for TitleRule {
    fn kind(&self) -> LineKind {
        LineKind::Title
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        let caps = TITLE_PATTERN.captures(line)?;
        Some(Classification::Title {
            doc_type: capture(&caps, 1),
            identifier: capture(&caps, 2),
            body: capture(&caps, 3),
        })
    }
}

/// Chapter heading rule.
pub struct ChapterRule;

impl LineRule for ChapterRule {
    fn kind(&self) -> LineKind {
        LineKind::Chapter
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        let caps = CHAPTER_PATTERN.captures(line)?;
        Some(Classification::Chapter {
            number: capture(&caps, 1),
            title: capture(&caps, 2),
        })
    }
}

/// Section heading rule.
pub struct SectionRule;

impl LineRule for SectionRule {
    fn kind(&self) -> LineKind {
        LineKind::Section
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        let caps = SECTION_PATTERN.captures(line)?;
        Some(Classification::Section {
            number: capture(&caps, 1),
            title: capture(&caps, 2),
        })
    }
}

/// Article heading rule.
pub struct ArticleRule;

impl LineRule for ArticleRule {
    fn kind(&self) -> LineKind {
        LineKind::Article
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        let caps = ARTICLE_PATTERN.captures(line)?;
        Some(Classification::Article {
            number: capture(&caps, 1),
            title: capture(&caps, 2),
        })
    }
}

/// Paragraph rule.
///
/// Accepts every non-blank line except those opening with a lettered list
/// marker, which are left to [`SubparagraphRule`].
pub struct ParagraphRule;

impl LineRule for ParagraphRule {
    fn kind(&self) -> LineKind {
        LineKind::Paragraph
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        if line.trim().is_empty() || starts_with_list_marker(line) {
            return None;
        }

        let caps = PARAGRAPH_PATTERN.captures(line)?;
        Some(Classification::Paragraph {
            number: optional_capture(&caps, 1),
            content: capture(&caps, 2),
        })
    }
}

/// Subparagraph (continuation) rule.
pub struct SubparagraphRule;

impl LineRule for SubparagraphRule {
    fn kind(&self) -> LineKind {
        LineKind::Subparagraph
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        if line.trim().is_empty() {
            return None;
        }

        let caps = SUBPARAGRAPH_PATTERN.captures(line)?;
        Some(Classification::Subparagraph {
            marker: optional_capture(&caps, 1),
            content: capture(&caps, 2),
        })
    }
}
