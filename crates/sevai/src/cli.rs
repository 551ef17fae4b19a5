//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sevai ingest [FILES]...` | Load JSON sources, normalize and index them |
//! | `sevai ask <QUESTION>` | Answer one question (`--dry-run` prints the prompt) |
//! | `sevai chat` | Read questions from stdin until `quit` or `exit` |
//! | `sevai stats` | Print collection statistics |
//!
//! Command handlers write to any [`Write`] so they can be driven from tests.

use clap::{Parser, Subcommand};
use sevai_application::domain_services::detect;
use sevai_application::ports::services::IndexingResult;
use sevai_application::use_cases::apology;
use sevai_domain::entities::RecordKind;
use sevai_domain::error::{Error, Result};
use sevai_infrastructure::config::{AppConfig, ConfigLoader, SourceConfig};
use sevai_infrastructure::di::{AppContext, init_app};
use sevai_infrastructure::logging::init_logging;
use sevai_infrastructure::sources::SourceLoader;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Words that end a chat session
const CHAT_EXIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Command line interface for Sevai
#[derive(Parser, Debug)]
#[command(name = "sevai")]
#[command(about = "Sevai - bilingual assistant for government schemes and services")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Normalize and index corpus files
    Ingest {
        /// JSON files to ingest (defaults to `ingestion.sources`)
        files: Vec<PathBuf>,

        /// Kind applied to records without a `kind` field
        #[arg(long, value_parser = parse_kind)]
        kind: Option<RecordKind>,

        /// Drop the collection before indexing
        #[arg(long)]
        rebuild: bool,
    },

    /// Answer a single question
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Print the assembled prompt instead of calling the model
        #[arg(long)]
        dry_run: bool,
    },

    /// Interactive question loop on stdin
    Chat,

    /// Show index statistics
    Stats,
}

fn parse_kind(value: &str) -> std::result::Result<RecordKind, String> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| format!("unknown record kind '{value}' (department, scheme, service, qa)"))
}

/// Load configuration, initialize logging and the context, then dispatch
///
/// Exits with failure when an `ask` turn ended in an apology.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    let context = init_app(config).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Ingest {
            files,
            kind,
            rebuild,
        } => ingest(&context, &files, kind, rebuild, &mut out).await?,
        Command::Ask { question, dry_run } => {
            let outcome = ask(&context, &question.join(" "), dry_run, &mut out).await?;
            if outcome == AskOutcome::Apologized {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Chat => chat(&context, std::io::stdin().lock(), &mut out).await?,
        Command::Stats => stats(&context, &mut out).await?,
    }
    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Ingest the given files, or the configured sources when none are given
pub async fn ingest<W: Write>(
    context: &AppContext,
    files: &[PathBuf],
    kind: Option<RecordKind>,
    rebuild: bool,
    out: &mut W,
) -> Result<()> {
    let sources: Vec<SourceConfig> = if files.is_empty() {
        context.config.ingestion.sources.clone()
    } else {
        files
            .iter()
            .map(|path| SourceConfig::new(path.clone(), kind))
            .collect()
    };

    let indexing = context.indexing_service();
    let collection = context.collection();
    if rebuild {
        indexing.clear_collection(collection).await?;
    }

    let batch = SourceLoader::load_all(&sources).await;
    if batch.records.is_empty() && !batch.failures.is_empty() {
        return Err(Error::invalid_argument(format!(
            "No source could be loaded: {}",
            batch.failures.join("; ")
        )));
    }

    let result = indexing.ingest_records(collection, &batch.records).await?;
    info!(
        collection,
        indexed = result.chunks_indexed,
        unchanged = result.chunks_unchanged,
        skipped = result.records_skipped,
        "Ingestion finished"
    );
    write_ingest_summary(out, collection, &batch.failures, &result)
}

fn write_ingest_summary<W: Write>(
    out: &mut W,
    collection: &str,
    failures: &[String],
    result: &IndexingResult,
) -> Result<()> {
    writeln!(out, "Collection: {collection}")?;
    writeln!(
        out,
        "Records: {} seen, {} skipped",
        result.records_seen, result.records_skipped
    )?;
    writeln!(
        out,
        "Chunks: {} indexed, {} unchanged, {} duplicates",
        result.chunks_indexed, result.chunks_unchanged, result.duplicates
    )?;
    for problem in failures.iter().chain(&result.errors) {
        writeln!(out, "  warning: {problem}")?;
    }
    Ok(())
}

/// How an `ask` turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskOutcome {
    /// An answer or a prompt was printed
    Answered,
    /// The turn failed and an apology was printed
    Apologized,
}

/// Answer one question, or print its prompt with `dry_run`
///
/// Query-time failures are logged and replaced by an apology in the
/// question's language. Only a missing completion provider is returned as an
/// error.
pub async fn ask<W: Write>(
    context: &AppContext,
    question: &str,
    dry_run: bool,
    out: &mut W,
) -> Result<AskOutcome> {
    let service = context.answer_service()?;
    let turn = if dry_run {
        service.prepare(question).await.map(|prompt| {
            let mut text = format!("{}\n---\n", prompt.render());
            let _ = writeln!(text, "Language: {}", prompt.language.name());
            let _ = write!(text, "Sources: {}", format_sources(&prompt.included_chunk_ids));
            text
        })
    } else {
        service.answer(question).await.map(|answer| {
            if answer.used_context {
                format!("{}\n\nSources: {}", answer.text, format_sources(&answer.sources))
            } else {
                answer.text
            }
        })
    };

    match turn {
        Ok(text) => {
            writeln!(out, "{text}")?;
            Ok(AskOutcome::Answered)
        }
        Err(e) => {
            let language = detect(question);
            error!(error = %e, language = language.tag(), "Failed to answer question");
            writeln!(out, "{}", apology(language, &e))?;
            Ok(AskOutcome::Apologized)
        }
    }
}

/// Read one question per line until end of input or an exit word
///
/// Every turn is independent; failures become apologies in the question's
/// language.
pub async fn chat<R: BufRead, W: Write>(context: &AppContext, input: R, out: &mut W) -> Result<()> {
    let service = context.answer_service()?;
    writeln!(out, "Sevai: ask about government schemes and services (type 'quit' to exit)")?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let question = line.trim();
        if CHAT_EXIT_WORDS
            .iter()
            .any(|word| question.eq_ignore_ascii_case(word))
        {
            break;
        }
        if !question.is_empty() {
            let reply = service.respond(question).await;
            writeln!(out, "{reply}")?;
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Print collection statistics as `key: value` lines
pub async fn stats<W: Write>(context: &AppContext, out: &mut W) -> Result<()> {
    let collection = context.collection();
    let stats = context
        .indexing_service()
        .collection_stats(collection)
        .await?;

    let mut entries: Vec<_> = stats.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    writeln!(out, "Collection: {collection}")?;
    for (key, value) in entries {
        match value {
            serde_json::Value::String(text) => writeln!(out, "{key}: {text}")?,
            other => writeln!(out, "{key}: {other}")?,
        }
    }
    Ok(())
}

fn format_sources(ids: &[String]) -> String {
    if ids.is_empty() {
        "none".to_string()
    } else {
        ids.join(", ")
    }
}
