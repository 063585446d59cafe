//! Line rule trait definition.

use regex::Captures;

use super::types::{Classification, LineKind};

/// Trait for line classification rules.
///
/// A rule recognizes exactly one [`LineKind`]. Rules are tried in the order
/// they were registered; the first one returning `Some` wins, so a rule only
/// has to decide whether the line looks like its own category.
pub trait LineRule: Send + Sync {
    /// The category this rule produces.
    fn kind(&self) -> LineKind;

    /// Classify a single line (without its line terminator).
    fn classify(&self, line: &str) -> Option<Classification>;
}

/// Get a capture group as a trimmed owned string, empty when absent.
pub fn capture(caps: &Captures<'_>, group: usize) -> String {
    caps.get(group)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Get an optional capture group as a trimmed string, `None` when absent or blank.
pub fn optional_capture(caps: &Captures<'_>, group: usize) -> Option<String> {
    caps.get(group)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
