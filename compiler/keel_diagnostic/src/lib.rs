//! Diagnostic system for the keel parser.
//!
//! A [`Diagnostic`] is a plain value: an [`ErrorCode`], a [`Severity`], an
//! absolute [`Span`](keel_ir::Span) and the positional arguments of the
//! code's message template. Diagnostics are attached to the syntax tree by
//! the parser and collected afterwards; nothing here aborts or unwinds.
//!
//! Rendering is separate from construction: [`emitter::TerminalEmitter`]
//! turns diagnostics into human-readable text with line/column and a source
//! snippet, and [`ErrorDocs`] backs `--explain`.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, ErrorPhase};
pub use errors::ErrorDocs;
