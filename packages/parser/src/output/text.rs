//! Text wrapping helpers for outline output.

use textwrap::{fill, Options};

/// Wrap a block of text with hanging indentation.
///
/// Every line of `text` is wrapped on its own so continuation lines keep
/// their own line. The first output line starts with `first_indent`, all
/// following lines with `rest_indent`.
pub fn wrap_block(text: &str, width: usize, first_indent: &str, rest_indent: &str) -> String {
    let mut wrapped: Vec<String> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let initial = if index == 0 { first_indent } else { rest_indent };
        if line.trim().is_empty() {
            wrapped.push(initial.trim_end().to_string());
            continue;
        }
        let options = Options::new(width)
            .initial_indent(initial)
            .subsequent_indent(rest_indent);
        wrapped.push(fill(line, &options));
    }

    if wrapped.is_empty() {
        return first_indent.trim_end().to_string();
    }

    wrapped.join("\n")
}

/// Format a heading as "Keyword number: title", dropping the colon when untitled.
pub fn heading(keyword: &str, number: &str, title: &str) -> String {
    if title.is_empty() {
        format!("{keyword} {number}")
    } else {
        format!("{keyword} {number}: {title}")
    }
}
