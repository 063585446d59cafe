//! Output generation for parsed documents.

mod text;
mod writer;

pub use text::{heading, wrap_block};
pub use writer::{render, render_outline, save_output, to_json, to_yaml};
