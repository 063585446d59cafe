//! Types produced by line classification.

use std::fmt;

/// Structural category of a line, without its captured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Title,
    Chapter,
    Section,
    Article,
    Paragraph,
    Subparagraph,
}

impl LineKind {
    /// All kinds in classification priority order.
    pub const PRIORITY: [LineKind; 6] = [
        Self::Title,
        Self::Chapter,
        Self::Section,
        Self::Article,
        Self::Paragraph,
        Self::Subparagraph,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Article => "article",
            Self::Paragraph => "paragraph",
            Self::Subparagraph => "subparagraph",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified line with the fields its category captures.
///
/// All strings are trimmed; nothing else is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Document title line.
    Title {
        /// Document type as written (e.g., "Regulation").
        doc_type: String,
        /// EU identifier (e.g., "(EU) 2016/679").
        identifier: String,
        /// Issuing body (e.g., "European Parliament and of the Council").
        body: String,
    },
    Chapter {
        number: String,
        title: String,
    },
    Section {
        number: String,
        title: String,
    },
    Article {
        number: String,
        title: String,
    },
    /// New paragraph, optionally numbered ("1.").
    Paragraph {
        number: Option<String>,
        content: String,
    },
    /// Continuation of the previous paragraph, optionally marked ("a)").
    Subparagraph {
        marker: Option<String>,
        content: String,
    },
}

impl Classification {
    /// The category of this classification.
    #[must_use]
    pub fn kind(&self) -> LineKind {
        match self {
            Self::Title { .. } => LineKind::Title,
            Self::Chapter { .. } => LineKind::Chapter,
            Self::Section { .. } => LineKind::Section,
            Self::Article { .. } => LineKind::Article,
            Self::Paragraph { .. } => LineKind::Paragraph,
            Self::Subparagraph { .. } => LineKind::Subparagraph,
        }
    }

    /// Full document title for a title line, `None` otherwise.
    ///
    /// Formatted as `"{type} {identifier} of the {body}"`.
    #[must_use]
    pub fn document_title(&self) -> Option<String> {
        match self {
            Self::Title {
                doc_type,
                identifier,
                body,
            } => Some(format!("{doc_type} {identifier} of the {body}")),
            _ => None,
        }
    }
}
