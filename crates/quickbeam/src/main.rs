//! Quickbeam command-line interface
//!
//! Two subcommands: `check` runs the lint rules over a file or directory,
//! `ast` dumps simplified syntax trees as JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use indexmap::IndexMap;

use quickbeam::lint::fn_body::DEFAULT_MAX_FN_LINES;
use quickbeam::lint::fn_params::DEFAULT_MAX_PARAMS;
use quickbeam::{ast, lint, AstNode, FnBodyLength, FnParamCount, Lint, MagicNumber, Report,
    SourceCache};

#[derive(Parser, Debug)]
#[command(name = "quickbeam")]
#[command(version)]
#[command(about = "AST-walking lint tool for Rust source trees", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check source files with the lint rules
    Check {
        /// File or directory to check
        path: PathBuf,

        /// Maximum lines in a function body (0 disables the rule)
        #[arg(long, default_value_t = DEFAULT_MAX_FN_LINES)]
        max_fn_lines: usize,

        /// Maximum parameters in a function signature (0 disables the rule)
        #[arg(long, default_value_t = DEFAULT_MAX_PARAMS)]
        max_params: usize,

        /// Extra values the magic number rule should allow (repeatable)
        #[arg(long = "allow")]
        allow: Vec<i64>,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Dump simplified syntax trees as JSON
    Ast {
        /// File or directory to dump
        path: PathBuf,

        /// Write the dump to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    /// One line per finding
    Text,
    /// Pretty-printed JSON report
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Check {
            path,
            max_fn_lines,
            max_params,
            allow,
            format,
            out,
        } => run_check(&path, max_fn_lines, max_params, allow, format, out),
        Command::Ast { path, out } => run_ast(&path, out),
    }
}

fn run_check(
    path: &Path,
    max_fn_lines: usize,
    max_params: usize,
    allow: Vec<i64>,
    format: OutputFormat,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    anyhow::ensure!(path.exists(), "no such path: {}", path.display());
    let cache = SourceCache::new();
    let rules: Vec<Box<dyn Lint>> = vec![
        Box::new(FnBodyLength::new(max_fn_lines)),
        Box::new(FnParamCount::new(max_params)),
        Box::new(MagicNumber::new(allow)),
    ];

    let report = if path.is_dir() {
        lint::check_all(path, &cache, &rules)?
    } else {
        let started = Instant::now();
        let mut report = Report::new();
        let diagnostics = lint::check_file(path, &cache, &rules)?;
        report.add_file(path, diagnostics);
        report.finish(1, 0, started.elapsed());
        report
    };

    let summary = report.summary().clone();
    match format {
        OutputFormat::Json => {
            let text = report.render_json()?;
            write_output(&text, out.as_deref())?;
        }
        OutputFormat::Text => {
            write_output(&report.render_text(), out.as_deref())?;
        }
    }
    tracing::info!(
        passed = summary.passed,
        failed = summary.failed,
        findings = summary.diagnostics,
        pass_rate = summary.pass_rate(),
        elapsed_ms = summary.elapsed_ms,
        "check complete"
    );
    Ok(())
}

fn run_ast(path: &Path, out: Option<PathBuf>) -> anyhow::Result<()> {
    anyhow::ensure!(path.exists(), "no such path: {}", path.display());
    let cache = SourceCache::new();
    let files = if path.is_dir() {
        cache.source_files_in(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut dumps: IndexMap<String, AstNode> = IndexMap::new();
    let (mut passed, mut failed) = (0usize, 0usize);
    for file in files {
        match ast::dump_ast(&file, &cache) {
            Ok(node) => {
                passed += 1;
                tracing::debug!(file = %file.display(), nodes = node.node_count(), "dumped");
                dumps.insert(file.display().to_string(), node);
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(file = %file.display(), %err, "skipping file");
            }
        }
    }

    let text = serde_json::to_string_pretty(&dumps)?;
    write_output(&text, out.as_deref())?;
    tracing::info!(
        passed,
        failed,
        pass_rate = quickbeam::percent(passed, failed),
        "ast dump complete"
    );
    Ok(())
}

fn write_output(text: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
