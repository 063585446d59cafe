//! Document builder state machine.
//!
//! The builder consumes classified lines in input order and grows a
//! [`Document`] in place. It keeps three cursors (current chapter, section
//! and article); each one always points at the tail of its container, so the
//! cursors are stored as positions and resolved with `last_mut()` instead of
//! holding references into the tree.

use crate::classifier::{Classification, LineKind};
use crate::error::WarningKind;
use crate::types::{Article, Chapter, Document, Paragraph, Section};

/// Container the current article was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleCursor {
    /// Last article of the current chapter's last section.
    Section,
    /// Last chapter-level article of the current chapter.
    Chapter,
    /// Last unassigned article of the document.
    Unassigned,
}

/// Why a classified line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Section line while no chapter is open.
    NoChapter,
    /// Paragraph or subparagraph line while no article is open.
    NoArticle,
    /// Subparagraph line whose article has no paragraph to extend.
    NoParagraph,
}

impl SkipReason {
    /// Warning category reported for this reason.
    #[must_use]
    pub fn warning_kind(&self) -> WarningKind {
        match self {
            Self::NoChapter => WarningKind::MalformedContext,
            Self::NoArticle | Self::NoParagraph => WarningKind::OrphanContinuation,
        }
    }
}

/// Outcome of applying one classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The line changed the document.
    Applied(LineKind),
    /// The line was dropped; the builder state is unchanged.
    Skipped(SkipReason),
}

/// Incremental document builder.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,

    // The chapter cursor is implicit: once a chapter exists the current
    // chapter is always the last one, chapters are never closed.
    section_open: bool,
    article: Option<ArticleCursor>,
}

impl DocumentBuilder {
    /// Create a builder with all cursors unset and an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classified line.
    pub fn apply(&mut self, classification: Classification) -> Transition {
        match classification {
            Classification::Title { .. } => {
                if let Some(title) = classification.document_title() {
                    self.document.title = title;
                }
                Transition::Applied(LineKind::Title)
            }
            Classification::Chapter { number, title } => {
                self.document.chapters.push(Chapter::new(number, title));
                self.section_open = false;
                self.article = None;
                Transition::Applied(LineKind::Chapter)
            }
            Classification::Section { number, title } => {
                let Some(chapter) = self.document.chapters.last_mut() else {
                    return Transition::Skipped(SkipReason::NoChapter);
                };
                chapter.sections.push(Section::new(number, title));
                self.section_open = true;
                self.article = None;
                Transition::Applied(LineKind::Section)
            }
            Classification::Article { number, title } => {
                self.open_article(Article::new(number, title));
                Transition::Applied(LineKind::Article)
            }
            Classification::Paragraph { number, content } => {
                let Some(article) = self.current_article_mut() else {
                    return Transition::Skipped(SkipReason::NoArticle);
                };
                article.paragraphs.push(Paragraph::new(number, content));
                Transition::Applied(LineKind::Paragraph)
            }
            Classification::Subparagraph { marker, content } => {
                let Some(article) = self.current_article_mut() else {
                    return Transition::Skipped(SkipReason::NoArticle);
                };
                let Some(paragraph) = article.paragraphs.last_mut() else {
                    return Transition::Skipped(SkipReason::NoParagraph);
                };
                paragraph.append_line(&continuation_text(marker, content));
                Transition::Applied(LineKind::Subparagraph)
            }
        }
    }

    /// Attach a new article to the innermost open container.
    fn open_article(&mut self, article: Article) {
        let cursor = match self.document.chapters.last_mut() {
            Some(chapter) => match chapter.sections.last_mut() {
                Some(section) if self.section_open => {
                    section.articles.push(article);
                    ArticleCursor::Section
                }
                _ => {
                    chapter.articles.push(article);
                    ArticleCursor::Chapter
                }
            },
            None => {
                self.document.unassigned_articles.push(article);
                ArticleCursor::Unassigned
            }
        };
        self.article = Some(cursor);
    }

    fn current_article_mut(&mut self) -> Option<&mut Article> {
        let articles = match self.article? {
            ArticleCursor::Section => {
                &mut self.document.chapters.last_mut()?.sections.last_mut()?.articles
            }
            ArticleCursor::Chapter => &mut self.document.chapters.last_mut()?.articles,
            ArticleCursor::Unassigned => &mut self.document.unassigned_articles,
        };
        articles.last_mut()
    }

    /// Where the current article lives, if one is open.
    #[must_use]
    pub fn article_cursor(&self) -> Option<ArticleCursor> {
        self.article
    }

    /// Whether a section is currently open.
    #[must_use]
    pub fn has_open_section(&self) -> bool {
        self.section_open
    }

    /// The document built so far.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Finish building and return the document as is.
    #[must_use]
    pub fn finish(self) -> Document {
        self.document
    }
}

/// Text appended to a paragraph for a continuation line, marker first.
fn continuation_text(marker: Option<String>, content: String) -> String {
    match marker {
        Some(marker) if content.is_empty() => marker,
        Some(marker) => format!("{marker} {content}"),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chapter(number: &str, title: &str) -> Classification {
        Classification::Chapter {
            number: number.to_string(),
            title: title.to_string(),
        }
    }

    fn section(number: &str, title: &str) -> Classification {
        Classification::Section {
            number: number.to_string(),
            title: title.to_string(),
        }
    }

    fn article(number: &str, title: &str) -> Classification {
        Classification::Article {
            number: number.to_string(),
            title: title.to_string(),
        }
    }

    fn paragraph(number: Option<&str>, content: &str) -> Classification {
        Classification::Paragraph {
            number: number.map(str::to_string),
            content: content.to_string(),
        }
    }

    fn subparagraph(marker: Option<&str>, content: &str) -> Classification {
        Classification::Subparagraph {
            marker: marker.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let builder = DocumentBuilder::new();
        assert!(builder.article_cursor().is_none());
        assert!(!builder.has_open_section());
        assert!(builder.document().is_empty());
    }

    #[test]
    fn test_title_sets_document_title() {
        let mut builder = DocumentBuilder::new();
        let transition = builder.apply(Classification::Title {
            doc_type: "Directive".to_string(),
            identifier: "(EU) 2019/790".to_string(),
            body: "Council".to_string(),
        });
        assert_eq!(transition, Transition::Applied(LineKind::Title));
        assert_eq!(builder.document().title, "Directive (EU) 2019/790 of the Council");
    }

    #[test]
    fn test_article_placement_unassigned() {
        let mut builder = DocumentBuilder::new();
        builder.apply(article("1", "Scope"));
        assert_eq!(builder.article_cursor(), Some(ArticleCursor::Unassigned));
        assert_eq!(builder.document().unassigned_articles.len(), 1);
    }

    #[test]
    fn test_article_placement_chapter_and_section() {
        let mut builder = DocumentBuilder::new();
        builder.apply(chapter("1", "General"));
        builder.apply(article("1", "Scope"));
        assert_eq!(builder.article_cursor(), Some(ArticleCursor::Chapter));

        builder.apply(section("1", "Definitions"));
        assert!(builder.article_cursor().is_none());
        builder.apply(article("2", "Terms"));
        assert_eq!(builder.article_cursor(), Some(ArticleCursor::Section));

        let document = builder.finish();
        assert_eq!(document.chapters[0].articles.len(), 1);
        assert_eq!(document.chapters[0].sections[0].articles.len(), 1);
        assert_eq!(document.chapters[0].sections[0].articles[0].number, "2");
    }

    #[test]
    fn test_chapter_resets_section_and_article() {
        let mut builder = DocumentBuilder::new();
        builder.apply(chapter("1", "General"));
        builder.apply(section("1", "Scope"));
        builder.apply(article("1", "Subject matter"));
        builder.apply(chapter("2", "Rights"));

        assert!(!builder.has_open_section());
        assert!(builder.article_cursor().is_none());

        // Paragraph after the new chapter has no article to attach to
        assert_eq!(
            builder.apply(paragraph(Some("1."), "Dropped.")),
            Transition::Skipped(SkipReason::NoArticle)
        );

        builder.apply(article("2", "Access"));
        let document = builder.finish();
        assert_eq!(document.chapters[1].articles[0].number, "2");
        assert!(document.chapters[0].sections[0].articles[0].paragraphs.is_empty());
    }

    #[test]
    fn test_section_without_chapter_is_skipped() {
        let mut builder = DocumentBuilder::new();
        builder.apply(article("1", "Scope"));

        let transition = builder.apply(section("1", "Orphan"));
        assert_eq!(transition, Transition::Skipped(SkipReason::NoChapter));

        // Skipping leaves the article cursor untouched
        assert_eq!(builder.article_cursor(), Some(ArticleCursor::Unassigned));
        builder.apply(paragraph(None, "Still in article 1."));
        assert_eq!(builder.document().unassigned_articles[0].paragraphs.len(), 1);
    }

    #[test]
    fn test_paragraphs_and_continuations() {
        let mut builder = DocumentBuilder::new();
        builder.apply(article("5", "Principles"));
        builder.apply(paragraph(Some("1."), "Personal data shall be:"));
        builder.apply(subparagraph(Some("a)"), "processed lawfully;"));
        builder.apply(subparagraph(Some("(b)"), "collected for specified purposes;"));
        builder.apply(paragraph(Some("2."), "The controller shall be responsible."));

        let document = builder.finish();
        let paragraphs = &document.unassigned_articles[0].paragraphs;
        assert_eq!(
            paragraphs,
            &vec![
                Paragraph::new(
                    Some("1.".to_string()),
                    "Personal data shall be:\na) processed lawfully;\n(b) collected for specified purposes;"
                ),
                Paragraph::new(Some("2.".to_string()), "The controller shall be responsible."),
            ]
        );
    }

    #[test]
    fn test_subparagraph_without_paragraph_is_skipped() {
        let mut builder = DocumentBuilder::new();
        assert_eq!(
            builder.apply(subparagraph(Some("a)"), "item")),
            Transition::Skipped(SkipReason::NoArticle)
        );

        builder.apply(article("1", "Scope"));
        assert_eq!(
            builder.apply(subparagraph(Some("a)"), "item")),
            Transition::Skipped(SkipReason::NoParagraph)
        );
        assert!(builder.document().unassigned_articles[0].paragraphs.is_empty());
    }

    #[test]
    fn test_continuation_text() {
        assert_eq!(
            continuation_text(Some("a)".to_string()), "item".to_string()),
            "a) item"
        );
        assert_eq!(continuation_text(Some("b)".to_string()), String::new()), "b)");
        assert_eq!(continuation_text(None, "plain".to_string()), "plain");
    }

    #[test]
    fn test_skip_reason_warning_kind() {
        assert_eq!(
            SkipReason::NoChapter.warning_kind(),
            WarningKind::MalformedContext
        );
        assert_eq!(
            SkipReason::NoParagraph.warning_kind(),
            WarningKind::OrphanContinuation
        );
    }
}
