//! Core data types for parsed documents.
//!
//! The tree is plain owned data: a [`Document`] owns its chapters and
//! unassigned articles, each chapter owns its sections and articles, and so
//! on down to paragraphs. Field names serialize in the shape consumers of the
//! JSON output expect (`unassignedArticles`, optional paragraph `number`).

use serde::{Deserialize, Serialize};

use crate::error::ParseWarning;

/// A numbered (or unnumbered) paragraph of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph marker including its trailing period (e.g., "1.").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Paragraph text, continuation lines joined with `\n`.
    pub content: String,
}

impl Paragraph {
    /// Create a new paragraph.
    #[must_use]
    pub fn new(number: Option<String>, content: impl Into<String>) -> Self {
        Self {
            number,
            content: content.into(),
        }
    }

    /// Append a continuation line on a new line.
    pub fn append_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }
}

/// A single article (e.g., "Article 12a Definitions").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article number, possibly with a letter suffix (e.g., "12a").
    pub number: String,

    pub title: String,

    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl Article {
    /// Create a new article without paragraphs.
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }
}

/// A section inside a chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Section {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            articles: Vec::new(),
        }
    }
}

/// A chapter with its sections and the articles that sit directly under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter number, possibly with a letter suffix (e.g., "2a").
    pub number: String,

    pub title: String,

    #[serde(default)]
    pub sections: Vec<Section>,

    /// Articles that belong to the chapter but not to any section.
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Chapter {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            sections: Vec::new(),
            articles: Vec::new(),
        }
    }

    /// Iterate over all articles of this chapter in document order.
    ///
    /// Chapter-level articles and section articles cannot interleave in the
    /// input: a section line closes the chapter-level run for good, so the
    /// chapter's own articles always come first.
    pub fn all_articles(&self) -> impl Iterator<Item = &Article> {
        self.articles
            .iter()
            .chain(self.sections.iter().flat_map(|s| s.articles.iter()))
    }
}

/// A complete parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document title (e.g., "Regulation (EU) 2016/679 of the European
    /// Parliament and of the Council"). Empty when no title line was seen.
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub chapters: Vec<Chapter>,

    /// Articles that appeared before any chapter.
    #[serde(default)]
    pub unassigned_articles: Vec<Article>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether nothing was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.chapters.is_empty() && self.unassigned_articles.is_empty()
    }

    /// Iterate over every article in document order.
    ///
    /// Unassigned articles come first since they can only appear before the
    /// first chapter line.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.unassigned_articles
            .iter()
            .chain(self.chapters.iter().flat_map(Chapter::all_articles))
    }

    /// Total number of articles across all containers.
    #[must_use]
    pub fn article_count(&self) -> usize {
        self.articles().count()
    }

    /// Find the first article with the given number.
    #[must_use]
    pub fn find_article(&self, number: &str) -> Option<&Article> {
        self.articles().find(|a| a.number == number)
    }
}

/// A parsed document together with the lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub document: Document,
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// Check whether any lines were dropped.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_document() -> Document {
        let mut chapter = Chapter::new("1", "General provisions");
        chapter.articles.push(Article::new("2", "Definitions"));
        let mut section = Section::new("1", "Scope");
        section.articles.push(Article::new("3", "Material scope"));
        chapter.sections.push(section);

        Document {
            title: "Regulation (EU) 2020/123 of the European Parliament".to_string(),
            chapters: vec![chapter],
            unassigned_articles: vec![Article::new("1", "Subject matter")],
        }
    }

    #[test]
    fn test_paragraph_append_line() {
        let mut paragraph = Paragraph::new(Some("1.".to_string()), "Member States shall:");
        paragraph.append_line("a) adopt measures;");
        assert_eq!(paragraph.content, "Member States shall:\na) adopt measures;");
    }

    #[test]
    fn test_document_new_is_empty() {
        let document = Document::new();
        assert!(document.is_empty());
        assert_eq!(document.article_count(), 0);
    }

    #[test]
    fn test_document_articles_in_order() {
        let document = sample_document();
        let numbers: Vec<&str> = document.articles().map(|a| a.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
        assert_eq!(document.article_count(), 3);
    }

    #[test]
    fn test_document_find_article() {
        let document = sample_document();
        assert_eq!(
            document.find_article("3").map(|a| a.title.as_str()),
            Some("Material scope")
        );
        assert!(document.find_article("99").is_none());
    }

    #[test]
    fn test_document_serialization_shape() {
        let mut document = Document::new();
        let mut article = Article::new("1", "Scope");
        article
            .paragraphs
            .push(Paragraph::new(Some("1.".to_string()), "This applies."));
        article.paragraphs.push(Paragraph::new(None, "Unnumbered."));
        document.unassigned_articles.push(article);

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "",
                "chapters": [],
                "unassignedArticles": [{
                    "number": "1",
                    "title": "Scope",
                    "paragraphs": [
                        {"number": "1.", "content": "This applies."},
                        {"content": "Unnumbered."}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_document_deserialization() {
        let json = r#"{"title":"T","chapters":[{"number":"1","title":"General"}],"unassignedArticles":[]}"#;
        let document: Document = serde_json::from_str(json).unwrap();
        assert_eq!(document.chapters[0].number, "1");
        assert!(document.chapters[0].sections.is_empty());
    }
}
