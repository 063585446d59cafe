//! Command-line interface for the parser.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{OutputFormat, DEFAULT_MAX_RESPONSE_SIZE};
use crate::error::{EulexError, Result};
use crate::http::{create_client, fetch_text};
use crate::output::{render, save_output};
use crate::parser::parse_with_warnings;
use crate::types::ParseOutcome;

/// eulex-parser - Reconstruct the structure of plain-text EU legal acts.
#[derive(Parser)]
#[command(name = "eulex-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a plain-text document from a file or stdin.
    Parse {
        /// Input file (default: stdin, also when "-")
        input: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch a plain-text document over HTTP and parse it.
    Fetch {
        /// Document URL (http or https)
        url: String,

        /// Maximum response size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_RESPONSE_SIZE)]
        max_size: u64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Options shared by all commands that produce a document.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format: json, yaml or outline
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail when any line had to be dropped
    #[arg(long)]
    pub strict: bool,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input, output } => parse_command(input.as_deref(), &output),
        Commands::Fetch {
            url,
            max_size,
            output,
        } => fetch_command(&url, max_size, &output),
    }
}

/// Read the input text from a file, or stdin for `None` / "-".
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Execute the parse command.
fn parse_command(input: Option<&Path>, args: &OutputArgs) -> Result<()> {
    let text = read_input(input)?;
    let outcome = parse_with_warnings(&text);
    emit(&outcome, args)
}

/// Execute the fetch command.
fn fetch_command(url: &str, max_size: u64, args: &OutputArgs) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Fetching {url}..."));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let text = match create_client().and_then(|client| fetch_text(&client, url, max_size)) {
        Ok(text) => text,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Parsing document...");
    let outcome = parse_with_warnings(&text);
    pb.finish_and_clear();

    emit(&outcome, args)
}

/// Report warnings, then render and write the document.
fn emit(outcome: &ParseOutcome, args: &OutputArgs) -> Result<()> {
    report_warnings(outcome);

    if args.strict && outcome.has_warnings() {
        return Err(EulexError::StrictMode {
            count: outcome.warnings.len(),
        });
    }

    let content = render(&outcome.document, args.format)?;

    match &args.output {
        Some(path) => {
            let saved = save_output(&content, path)?;
            eprintln!(
                "{} {} ({} articles)",
                style("Saved to:").green().bold(),
                saved.display(),
                outcome.document.article_count()
            );
        }
        None => print!("{content}"),
    }

    Ok(())
}

fn report_warnings(outcome: &ParseOutcome) {
    if !outcome.has_warnings() {
        return;
    }

    for warning in &outcome.warnings {
        eprintln!("  {} {warning}", style(warning.kind.as_str()).yellow());
    }
    eprintln!(
        "{} {} line(s) dropped",
        style("Warnings:").yellow().bold(),
        outcome.warnings.len()
    );
}
