//! Ordered rule registry.

use super::rule::LineRule;
use super::rules::{
    ArticleRule, ChapterRule, ParagraphRule, SectionRule, SubparagraphRule, TitleRule,
};
use super::types::{Classification, LineKind};

/// Ordered list of classification rules.
///
/// Rules are evaluated in registration order and the first match wins, so
/// categories are mutually exclusive per line.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LineRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule with the lowest priority so far.
    pub fn register(&mut self, rule: impl LineRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Classify a line with the first matching rule.
    ///
    /// Returns `None` for lines no rule accepts (blank lines with the
    /// default rule set).
    #[must_use]
    pub fn classify(&self, line: &str) -> Option<Classification> {
        self.rules.iter().find_map(|rule| rule.classify(line))
    }

    /// Categories in priority order.
    #[must_use]
    pub fn kinds(&self) -> Vec<LineKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the rule registry for EU regulations and directives.
///
/// Priority order: title, chapter, section, article, paragraph, subparagraph.
#[must_use]
pub fn create_eu_rule_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();

    // Structural lines
    registry.register(TitleRule);
    registry.register(ChapterRule);
    registry.register(SectionRule);
    registry.register(ArticleRule);

    // Continuation lines
    registry.register(ParagraphRule);
    registry.register(SubparagraphRule);

    registry
}
