//! The [`Diagnostic`] value and its builder methods.

use std::fmt;

use keel_ir::{Feature, LanguageVersion, Span};

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic.
///
/// Spans are absolute byte offsets into the parsed text. The message is not
/// stored: it is rendered from the code's template and `args` on demand,
/// which keeps diagnostics small and comparable in tests.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be attached or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub span: Span,
    pub args: Vec<String>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with the code's default severity.
    #[cold]
    pub fn new(code: ErrorCode, span: Span) -> Self {
        let severity = if code.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        };
        Diagnostic {
            code,
            severity,
            span,
            args: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            severity: Severity::Error,
            ..Self::new(code, span)
        }
    }

    #[cold]
    pub fn warning(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::new(code, span)
        }
    }

    /// `Syntax error, '<text>' expected` (CS1003).
    #[cold]
    pub fn expected(text: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::CS1003, span).with_arg(text)
    }

    /// Feature-availability diagnostic for `feature` under `version`.
    ///
    /// `None` when the feature is available, or when it is a preview feature
    /// (those select a different parse rather than report).
    pub fn feature_unavailable(
        feature: Feature,
        version: LanguageVersion,
        span: Span,
    ) -> Option<Self> {
        if version.supports(feature) || feature.is_preview() {
            return None;
        }
        let code = ErrorCode::feature_unavailable_in(version)?;
        Some(
            Self::new(code, span)
                .with_arg(feature.name())
                .with_arg(feature.required_version().display_number()),
        )
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The rendered message.
    pub fn message(&self) -> String {
        self.code.format_message(&self.args)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// First argument, if any. Most codes take at most one.
    pub fn arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity,
            self.code,
            self.span,
            self.message()
        )
    }
}
