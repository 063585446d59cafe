//! Parser service that ties the classifier and the builder together.

use std::sync::LazyLock;

use crate::builder::{DocumentBuilder, Transition};
use crate::classifier::{create_eu_rule_registry, RuleRegistry};
use crate::error::ParseWarning;
use crate::types::{Document, ParseOutcome};

/// Shared default registry; rules are immutable once built.
static DEFAULT_REGISTRY: LazyLock<RuleRegistry> = LazyLock::new(create_eu_rule_registry);

/// Parse plain text into a document tree.
///
/// Never fails: lines that do not fit the current context are dropped.
/// Use [`parse_with_warnings`] to find out which ones.
///
/// # Examples
/// ```
/// use eulex_parser::parse;
///
/// let document = parse("Chapter 1 General\nArticle 2 Definitions\n");
/// assert_eq!(document.chapters[0].articles[0].title, "Definitions");
/// ```
#[must_use]
pub fn parse(plain_text: &str) -> Document {
    parse_with_warnings(plain_text).document
}

/// Parse plain text and report the lines that were dropped.
#[must_use]
pub fn parse_with_warnings(plain_text: &str) -> ParseOutcome {
    Parser::new(&DEFAULT_REGISTRY).parse(plain_text)
}

/// Line-by-line parser over a rule registry.
///
/// Each call to [`Parser::parse`] runs a private [`DocumentBuilder`], so a
/// single parser can serve concurrent callers.
#[derive(Clone, Copy)]
pub struct Parser<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> Parser<'r> {
    #[must_use]
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// Parse newline-delimited text (`\n` or `\r\n`).
    ///
    /// A leading byte order mark is ignored.
    #[must_use]
    pub fn parse(&self, plain_text: &str) -> ParseOutcome {
        let mut builder = DocumentBuilder::new();
        let mut warnings = Vec::new();
        let text = plain_text.strip_prefix('\u{feff}').unwrap_or(plain_text);

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let Some(classification) = self.registry.classify(line) else {
                continue;
            };

            let kind = classification.kind();
            match builder.apply(classification) {
                Transition::Applied(_) => {
                    tracing::trace!(line_number, kind = %kind, "Applied line");
                }
                Transition::Skipped(reason) => {
                    let warning =
                        ParseWarning::new(reason.warning_kind(), line_number, line.trim());
                    tracing::debug!(
                        line_number,
                        kind = %kind,
                        warning = warning.kind.as_str(),
                        "Dropped line"
                    );
                    warnings.push(warning);
                }
            }
        }

        let document = builder.finish();
        tracing::debug!(
            chapters = document.chapters.len(),
            articles = document.article_count(),
            warnings = warnings.len(),
            "Parsed document"
        );

        ParseOutcome { document, warnings }
    }
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("rules", &self.registry.kinds())
            .finish()
    }
}
