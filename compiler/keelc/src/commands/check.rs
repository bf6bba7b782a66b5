//! The `check` command: diagnostics only.

use std::io::Write;

use keel_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

use super::{emit_report, parse_all, Outcome};
use crate::config::DriverConfig;
use crate::DriverError;

/// Parse `config.files` and report their diagnostics. Each file without
/// diagnostics gets an `OK` line on `out`.
pub fn check_files<O: Write, E: Write>(
    config: &DriverConfig,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> Result<Outcome, DriverError> {
    let reports = parse_all(&config.files, config.options)?;
    let mut errors = 0;
    let mut warnings = 0;
    for report in &reports {
        let (e, w) = emit_report(report, emitter);
        if e == 0 && w == 0 {
            let _ = writeln!(out, "OK: {}", report.path.display());
        }
        errors += e;
        warnings += w;
    }
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    Ok(Outcome::from_errors(errors))
}
