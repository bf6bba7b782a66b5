//! Command handlers for the keel CLI.
//!
//! Each submodule implements one command. Handlers write to the writers
//! they are given, so the binary passes stdout/stderr and tests pass
//! buffers. Shared pieces (reading files, the parallel parse, diagnostic
//! rendering) live here.

mod check;
mod explain;
mod lex;
mod parse;

use std::io::Write;
use std::path::{Path, PathBuf};

use keel_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use keel_diagnostic::Severity;
use keel_ir::ParseOptions;
use keel_parse::ParseResult;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::DriverError;

pub use check::check_files;
pub use explain::explain_code;
pub use lex::{lex_file, render_tokens};
pub use parse::parse_files;

/// How a command finished when it could run at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// At least one error diagnostic was reported.
    Errors,
}

impl Outcome {
    pub fn from_errors(error_count: usize) -> Self {
        if error_count == 0 {
            Outcome::Clean
        } else {
            Outcome::Errors
        }
    }
}

/// One parsed input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub source: String,
    pub result: ParseResult,
}

impl FileReport {
    /// `(errors, warnings)` among the file's diagnostics.
    pub fn counts(&self) -> (usize, usize) {
        self.result
            .diagnostics()
            .iter()
            .fold((0, 0), |(errors, warnings), d| match d.severity {
                Severity::Error => (errors + 1, warnings),
                Severity::Warning => (errors, warnings + 1),
            })
    }
}

/// Read a source file, classifying the failure.
pub(crate) fn read_file(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::from_io(path.to_path_buf(), e))
}

/// Read and parse every file in parallel. Reports come back in input order;
/// the first unreadable file fails the whole batch.
pub(crate) fn parse_all(files: &[PathBuf], options: ParseOptions) -> Result<Vec<FileReport>, DriverError> {
    info!(files = files.len(), version = %options.language_version, "parsing");
    files
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            let result = keel_parse::parse(&source, options);
            debug!(path = %path.display(), bytes = source.len(), diagnostics = result.diagnostics().len(), "parsed");
            Ok(FileReport {
                path: path.clone(),
                source,
                result,
            })
        })
        .collect()
}

/// Render a report's diagnostics against its source text. Returns the
/// error and warning counts.
pub(crate) fn emit_report<W: Write>(report: &FileReport, emitter: &mut TerminalEmitter<W>) -> (usize, usize) {
    emitter.set_source(report.path.display().to_string(), report.source.as_str());
    emitter.emit_all(&report.result.diagnostics());
    emitter.clear_source();
    report.counts()
}

#[cfg(test)]
mod tests;
