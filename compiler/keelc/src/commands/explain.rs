//! The `--explain` command: documentation for a diagnostic code.

use std::io::Write;

use keel_diagnostic::{ErrorCode, ErrorDocs};

use crate::DriverError;

/// Write the documentation for `code` (`CS1002` or just `1002`).
pub fn explain_code<O: Write>(code: &str, out: &mut O) -> Result<(), DriverError> {
    let parsed = code
        .parse::<ErrorCode>()
        .map_err(|()| DriverError::UnknownCode(code.to_owned()))?;
    let doc = ErrorDocs::get(parsed).ok_or_else(|| DriverError::NoDocs(parsed.to_string()))?;
    let _ = writeln!(out, "{doc}");
    Ok(())
}
