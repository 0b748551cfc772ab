//! Diagnostics and run reports
//!
//! A [`Diagnostic`] records one rule violation at one source position. A
//! [`Report`] groups diagnostics per file in discovery order and carries the
//! run [`Summary`]. Reports render either as plain text for terminals or as
//! JSON for downstream tooling.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{QuickbeamError, Result};

/// One rule violation at one source position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Stable rule identifier, e.g. `RS-000002`
    pub rule_id: String,
    /// Short rule name, e.g. `magic_number_use`
    pub rule_name: String,
    /// Human-readable description of the violation
    pub message: String,
    /// Kind of the offending AST node
    pub kind: String,
    /// Path of the file the violation was found in
    pub file: String,
    /// Line of the violation (1-indexed)
    pub line: usize,
    /// Column of the violation (1-indexed)
    pub column: usize,
    /// Flattened source snippet of the offending node
    pub snippet: String,
}

/// Counters for one lint or dump run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Files that parsed and were checked
    pub passed: usize,
    /// Files that could not be read or parsed
    pub failed: usize,
    /// Total diagnostics across all files
    pub diagnostics: usize,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u128,
}

impl Summary {
    /// Share of passed files as a percentage with two decimals.
    pub fn pass_rate(&self) -> f64 {
        percent(self.passed, self.failed)
    }
}

/// Percentage of `x / (x + y)`, truncated to two decimals.
pub fn percent(x: usize, y: usize) -> f64 {
    if x == 0 {
        return 0.0;
    }
    let ratio = x as f64 / (x + y) as f64;
    (10_000.0 * ratio).trunc() / 100.0
}

/// Diagnostics of a whole run, grouped per file.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    files: IndexMap<String, Vec<Diagnostic>>,
    summary: Summary,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the diagnostics found in one file.
    ///
    /// Files are kept in the order they were added, clean files included,
    /// so a rendered report lists everything that was checked.
    pub fn add_file(&mut self, file: &Path, diagnostics: Vec<Diagnostic>) {
        self.summary.diagnostics += diagnostics.len();
        self.files
            .entry(file.display().to_string())
            .or_default()
            .extend(diagnostics);
    }

    /// Close the report with the run counters.
    pub fn finish(&mut self, passed: usize, failed: usize, elapsed: Duration) {
        self.summary.passed = passed;
        self.summary.failed = failed;
        self.summary.elapsed_ms = elapsed.as_millis();
    }

    /// Run counters.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Total number of diagnostics in the report.
    pub fn total(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Iterate over every diagnostic in file order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.files.values().flatten()
    }

    /// Render the report as plain text, one line per diagnostic.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (file, diagnostics) in &self.files {
            if diagnostics.is_empty() {
                continue;
            }
            for d in diagnostics {
                let _ = writeln!(
                    out,
                    "{}:{}:{}: [{}] {}",
                    file, d.line, d.column, d.rule_name, d.message
                );
            }
        }
        let _ = writeln!(
            out,
            "findings: {}, files: {}, failed to parse: {}",
            self.summary.diagnostics,
            self.files.len(),
            self.summary.failed
        );
        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON rendering of the report to a file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let text = self.render_json()?;
        fs::write(path, text).map_err(|source| QuickbeamError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
