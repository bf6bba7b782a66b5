//! Lexer diagnostics.
//!
//! Each problem the cooker can find maps to one constructor here, so the
//! codes and arguments used for lexical errors live in one place.

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::Span;

pub(crate) fn unexpected_character(span: Span, ch: char) -> Diagnostic {
    Diagnostic::new(ErrorCode::CS1056, span).with_arg(ch.to_string())
}

/// A regular string or character literal hit a line break or end of file.
pub(crate) fn newline_in_constant(span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::CS1010, span)
}

pub(crate) fn unterminated_verbatim_string(span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::CS1039, span)
}

pub(crate) fn unterminated_comment(span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::CS1035, span)
}

pub(crate) fn empty_char_literal(span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::CS1011, span)
}

pub(crate) fn too_many_chars(span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::CS1012, span)
}

pub(crate) fn lowercase_long_suffix(span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::CS0078, span)
}
