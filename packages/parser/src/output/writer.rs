//! Rendering and saving parsed documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::text::{heading, wrap_block};
use crate::config::{OutputFormat, TEXT_WRAP_WIDTH};
use crate::error::Result;
use crate::types::{Article, Document};

/// Render a document as pretty-printed JSON with a trailing newline.
pub fn to_json(document: &Document) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Render a document as YAML with a document start marker.
pub fn to_yaml(document: &Document) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(document)?;

    // Clean up trailing whitespace
    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Render a document as an indented, human-readable outline.
///
/// ```text
/// Regulation (EU) 2020/123 of the European Parliament
///
/// Chapter 1: General
///   Article 1: Scope
///     1. This applies.
/// ```
#[must_use]
pub fn render_outline(document: &Document, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !document.title.is_empty() {
        lines.push(document.title.clone());
        lines.push(String::new());
    }

    for article in &document.unassigned_articles {
        push_article(&mut lines, article, 0, width);
    }

    for chapter in &document.chapters {
        lines.push(heading("Chapter", &chapter.number, &chapter.title));
        for article in &chapter.articles {
            push_article(&mut lines, article, 1, width);
        }
        for section in &chapter.sections {
            lines.push(format!(
                "  {}",
                heading("Section", &section.number, &section.title)
            ));
            for article in &section.articles {
                push_article(&mut lines, article, 2, width);
            }
        }
    }

    let mut outline = lines.join("\n");
    outline.push('\n');
    outline
}

fn push_article(lines: &mut Vec<String>, article: &Article, depth: usize, width: usize) {
    let indent = "  ".repeat(depth);
    lines.push(format!(
        "{indent}{}",
        heading("Article", &article.number, &article.title)
    ));

    let body_indent = "  ".repeat(depth + 1);
    for paragraph in &article.paragraphs {
        let first = match &paragraph.number {
            Some(number) => format!("{body_indent}{number} "),
            None => body_indent.clone(),
        };
        let rest = " ".repeat(first.chars().count());
        lines.push(wrap_block(&paragraph.content, width, &first, &rest));
    }
}

/// Render a document in the requested format.
pub fn render(document: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(document),
        OutputFormat::Yaml => to_yaml(document),
        OutputFormat::Outline => Ok(render_outline(document, TEXT_WRAP_WIDTH)),
    }
}

/// Save rendered output to a file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// Missing parent directories are created.
///
/// # Returns
/// Path to the saved file
pub fn save_output(content: &str, path: &Path) -> Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let temp_file = parent.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    Ok(path.to_path_buf())
}
