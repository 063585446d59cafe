//! Line classification for plain-text legal documents.
//!
//! Each input line is mapped to at most one structural category by an
//! ordered list of rules. Precedence lives in the registry, not in the rules
//! themselves, so it can be inspected and tested on its own.

mod registry;
mod rule;
mod rules;
mod types;

pub use registry::{create_eu_rule_registry, RuleRegistry};
pub use rule::{capture, optional_capture, LineRule};
pub use rules::{
    starts_with_list_marker, ArticleRule, ChapterRule, ParagraphRule, SectionRule,
    SubparagraphRule, TitleRule,
};
pub use types::{Classification, LineKind};
