//! # Quickbeam
//!
//! An AST-walking lint tool for Rust source trees.
//!
//! Quickbeam discovers source files under a directory, parses them with
//! [`syn`], walks each syntax tree once with a set of lint rules attached,
//! and reports the violations it finds as text or JSON. It can also dump a
//! simplified, serializable view of a file's syntax tree.
//!
//! ## Architecture
//!
//! - **Source cache**: bounded read-through cache from paths to code
//! - **Lint engine**: one traversal per file, rules attached as trait objects
//! - **Rules**: function body length, parameter count, magic numbers
//! - **Reporting**: per-file diagnostics, run summary, text or JSON output
//!
//! The `demos/` directory holds the walkthrough sources the tool is
//! exercised against; the matching runnable routines live in [`sample`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lint;
pub mod report;
pub mod sample;
pub mod source;

// Re-export main types
pub use ast::{dump_ast, dump_file, AstNode};
pub use error::{QuickbeamError, Result};
pub use lint::{
    check_all, check_file, default_rules, FnBodyLength, FnParamCount, Lint, MagicNumber, Walker,
};
pub use report::{percent, Diagnostic, Report, Summary};
pub use source::SourceCache;

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
