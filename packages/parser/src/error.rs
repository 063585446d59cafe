//! Error types for the parser crate.
//!
//! Structural parsing never fails: malformed lines become [`ParseWarning`]s
//! collected next to the document. `EulexError` covers everything around
//! the parser, most notably retrieving the text in the first place.

use std::fmt;

use thiserror::Error;

/// Main error type for the library and CLI.
#[derive(Debug, Error)]
pub enum EulexError {
    /// URL is not an absolute http(s) URL.
    #[error("Invalid URL: '{0}'. Expected an absolute http:// or https:// URL")]
    InvalidUrl(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Retrieving the document text failed.
    #[error("Failed to retrieve document from {url}: {source}")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts exhausted.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Response body exceeds the configured limit.
    #[error("Response too large: {size} bytes exceeds limit of {limit} bytes")]
    ResponseTooLarge { size: u64, limit: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Strict mode rejected a document that produced warnings.
    #[error("Parsing produced {count} warning(s) in strict mode")]
    StrictMode { count: usize },
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, EulexError>;

/// Kind of non-fatal problem found while building a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A section line appeared while no chapter was open.
    MalformedContext,
    /// A paragraph or continuation line had nothing to attach to.
    OrphanContinuation,
}

impl WarningKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedContext => "malformed_context",
            Self::OrphanContinuation => "orphan_continuation",
        }
    }
}

/// A dropped line, reported alongside the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub kind: WarningKind,

    /// 1-based line number in the input.
    pub line_number: usize,

    /// The dropped line, trimmed.
    pub line: String,
}

impl ParseWarning {
    #[must_use]
    pub fn new(kind: WarningKind, line_number: usize, line: impl Into<String>) -> Self {
        Self {
            kind,
            line_number,
            line: line.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            WarningKind::MalformedContext => "section outside of any chapter",
            WarningKind::OrphanContinuation => "text outside of any article",
        };
        write!(f, "line {}: {reason}: {}", self.line_number, self.line)
    }
}
