//! eulex-parser - Reconstruct the structure of plain-text EU legal acts.
//!
//! This crate takes the plain text of an EU regulation or directive and
//! rebuilds its hierarchy: title, chapters, sections, articles, paragraphs
//! and lettered continuations, without relying on any markup.
//!
//! # Example
//!
//! ```
//! use eulex_parser::parse;
//!
//! let text = "Regulation (EU) 2020/123 of the European Parliament\n\
//!             Article 1 Scope\n\
//!             1. This applies.\n";
//! let document = parse(text);
//!
//! assert_eq!(document.title, "Regulation (EU) 2020/123 of the European Parliament");
//! assert_eq!(document.unassigned_articles[0].paragraphs[0].content, "This applies.");
//! ```
//!
//! # Architecture
//!
//! - [`classifier`]: Ordered line classification rules
//! - [`builder`]: Document builder state machine
//! - [`parser`]: Parser service combining both
//! - [`types`]: Document tree types
//! - [`error`]: Error and warning types, Result alias
//! - [`config`]: Configuration constants and validation
//! - [`http`]: HTTP retrieval of document text
//! - [`output`]: JSON, YAML and outline rendering
//! - [`cli`]: Command-line interface

pub mod builder;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod output;
pub mod parser;
pub mod types;

// Re-export main functions
pub use parser::{parse, parse_with_warnings, Parser};

// Re-export commonly used items
pub use error::{EulexError, ParseWarning, Result, WarningKind};
pub use types::{Article, Chapter, Document, Paragraph, ParseOutcome, Section};
