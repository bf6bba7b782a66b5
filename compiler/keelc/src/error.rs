//! Driver-level failures.
//!
//! Syntax errors in the input are not driver errors: they are diagnostics,
//! rendered and counted. A `DriverError` means the command itself could not
//! run, and the binary exits with status 2.

use std::io;
use std::path::PathBuf;

use keel_ir::LanguageVersionError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Language(#[from] LanguageVersionError),

    #[error("{0}")]
    Color(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("`{command}` needs at least one file")]
    MissingFiles { command: &'static str },

    #[error("`lex` takes exactly one file")]
    LexArity,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`--explain` needs an error code, e.g. `keel --explain CS1002`")]
    MissingCode,

    #[error("unknown error code `{0}` (codes look like CS1002)")]
    UnknownCode(String),

    #[error("no documentation available for {0}")]
    NoDocs(String),
}

impl DriverError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read { path, source },
        }
    }
}
