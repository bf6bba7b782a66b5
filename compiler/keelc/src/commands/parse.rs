//! The `parse` command: print each file's tree, then its diagnostics.

use std::io::Write;

use keel_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use keel_syntax::{dump_tree, DumpOptions};

use super::{emit_report, parse_all, Outcome};
use crate::config::DriverConfig;
use crate::DriverError;

/// Parse `config.files` in parallel. Trees go to `out` in input order;
/// diagnostics go to `emitter`.
pub fn parse_files<O: Write, E: Write>(
    config: &DriverConfig,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> Result<Outcome, DriverError> {
    let reports = parse_all(&config.files, config.options)?;
    let mut errors = 0;
    let mut warnings = 0;
    for report in &reports {
        let _ = writeln!(out, "{}:", report.path.display());
        let _ = write!(out, "{}", dump_tree(&report.result.root, DumpOptions::FULL));
        let (e, w) = emit_report(report, emitter);
        errors += e;
        warnings += w;
    }
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    Ok(Outcome::from_errors(errors))
}
