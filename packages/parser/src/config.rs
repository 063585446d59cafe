//! Configuration constants and validation functions.

use std::fmt;
use std::str::FromStr;

use crate::error::{EulexError, Result};

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (20 MB).
///
/// Consolidated EU acts in plain text stay well below this; the cap guards
/// against pointing the fetcher at something that is not a document.
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 20 * 1024 * 1024;

/// Maximum number of retry attempts for transient failures.
pub const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
pub const RETRY_BASE_DELAY_MS: u64 = 500;

/// Text wrap width for outline output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// User agent string identifying this tool.
pub const USER_AGENT: &str = concat!("eulex-parser/", env!("CARGO_PKG_VERSION"));

/// Rendering format for a parsed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML document.
    Yaml,
    /// Human-readable indented outline.
    Outline,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Outline => "outline",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "outline" | "text" => Ok(Self::Outline),
            other => Err(format!(
                "unknown format '{other}', expected one of: json, yaml, outline"
            )),
        }
    }
}

/// Validate that a URL is an absolute http(s) URL.
///
/// # Examples
/// ```
/// use eulex_parser::config::validate_url;
///
/// assert!(validate_url("https://eur-lex.europa.eu/doc.txt").is_ok());
/// assert!(validate_url("file:///etc/passwd").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    let valid = rest.is_some_and(|host| {
        !host.is_empty() && !host.starts_with('/') && !url.contains(char::is_whitespace)
    });

    if valid {
        Ok(())
    } else {
        Err(EulexError::InvalidUrl(url.to_string()))
    }
}
