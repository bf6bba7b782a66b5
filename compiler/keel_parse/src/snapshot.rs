//! Parser snapshots for speculative parsing.
//!
//! Most decisions use the pure predicates in `disambiguate`, which only
//! peek. A few need a real trial parse (statement attribute lists) and use
//! [`Parser::try_parse`]; the trial's tokens, diagnostics and skipped
//! tokens are all discarded when it fails.
//!
//! Snapshots must be restored in strictly nested order.

use keel_syntax::SyntaxToken;

use crate::context::ParseContext;
use crate::cursor::Checkpoint;
use crate::Parser;

/// Parser state at a point in the token stream.
///
/// The pending skipped list is cloned; it is almost always empty.
#[derive(Clone, Debug)]
pub(crate) struct ParserSnapshot {
    checkpoint: Checkpoint,
    context: ParseContext,
    skipped: Vec<SyntaxToken>,
}

impl Parser {
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            checkpoint: self.cursor.mark(),
            context: self.context,
            skipped: self.skipped.clone(),
        }
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.reset(snapshot.checkpoint);
        self.context = snapshot.context;
        self.skipped = snapshot.skipped;
    }

    /// Run `f` and rewind, whatever it returns.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = f(self);
        self.restore(snapshot);
        result
    }

    /// Run `f`; keep its effects if it returns `Some`, rewind otherwise.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let result = f(self);
        if result.is_none() {
            self.restore(snapshot);
        }
        result
    }
}
