//! Command-line options shared by `parse`, `check` and `lex`.

use std::path::PathBuf;

use keel_diagnostic::emitter::ColorMode;
use keel_ir::{LanguageVersion, ParseOptions};

use crate::DriverError;

/// Environment variable consulted for the language version when no
/// `--lang` flag is given.
pub const LANG_ENV: &str = "KEEL_LANG";

/// Options for one command invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub options: ParseOptions,
    pub color: ColorMode,
    pub files: Vec<PathBuf>,
}

impl DriverConfig {
    /// Read the arguments after the command name. `env_lang` is the value
    /// of [`LANG_ENV`], if set; a `--lang` flag wins over it.
    pub fn from_args(args: &[String], env_lang: Option<&str>) -> Result<Self, DriverError> {
        let mut version = match env_lang {
            Some(value) => value.parse::<LanguageVersion>()?,
            None => LanguageVersion::default(),
        };
        let mut color = ColorMode::Auto;
        let mut files = Vec::new();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--lang=") {
                version = value.parse()?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = value.parse().map_err(DriverError::Color)?;
            } else if arg.starts_with('-') {
                return Err(DriverError::UnknownOption(arg.clone()));
            } else {
                files.push(PathBuf::from(arg));
            }
        }

        Ok(DriverConfig {
            options: ParseOptions::new(version),
            color,
            files,
        })
    }

    /// Fail with [`DriverError::MissingFiles`] when no file was named.
    pub fn require_files(self, command: &'static str) -> Result<Self, DriverError> {
        if self.files.is_empty() {
            Err(DriverError::MissingFiles { command })
        } else {
            Ok(self)
        }
    }
}
