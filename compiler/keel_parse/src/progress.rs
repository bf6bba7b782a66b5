//! Progress tracking for list and body loops.
//!
//! Every loop in the grammar either consumes at least one token per
//! iteration or exits. A loop that cannot tell in advance whether its
//! body will consume anything checks afterwards and skips the current
//! token as bad, so termination never depends on every production being
//! perfect.

use keel_diagnostic::ErrorCode;
use tracing::debug;

use crate::cursor::Checkpoint;
use crate::Parser;

/// Whether a parse step consumed tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Progress {
    /// One or more tokens were consumed.
    Made,
    /// Nothing was consumed.
    None,
}

impl Progress {
    pub fn none(self) -> bool {
        matches!(self, Progress::None)
    }
}

impl Parser {
    pub(crate) fn progress_since(&self, start: Checkpoint) -> Progress {
        if self.cursor.mark() > start {
            Progress::Made
        } else {
            Progress::None
        }
    }

    /// Skip the current token with `code` if nothing was consumed since
    /// `start`. Returns the progress observed before any skip.
    pub(crate) fn ensure_progress(&mut self, start: Checkpoint, code: ErrorCode) -> Progress {
        let progress = self.progress_since(start);
        if progress.none() && !self.cursor.is_at_end() {
            debug!(kind = %self.current_kind(), "no progress, skipping");
            self.skip_with(code);
        }
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_ir::ParseOptions;
    use keel_lexer::lex;

    #[test]
    fn predicates() {
        assert!(!Progress::Made.none());
        assert!(Progress::None.none());
    }

    #[test]
    fn stalled_loop_skips_one_token() {
        let mut p = Parser::new(lex(") x"), ParseOptions::default());
        let start = p.cursor.mark();
        assert_eq!(p.ensure_progress(start, ErrorCode::CS1022), Progress::None);
        assert_eq!(p.current().text(), "x");
        assert_eq!(p.skipped.len(), 1);

        let start = p.cursor.mark();
        p.bump();
        assert_eq!(p.ensure_progress(start, ErrorCode::CS1022), Progress::Made);
        assert!(p.skipped.is_empty());
    }
}
