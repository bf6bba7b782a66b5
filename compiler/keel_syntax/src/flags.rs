//! Cached per-token and per-node facts.
//!
//! Node flags are the union of everything below the node, computed once when
//! the node is built, so "does this subtree contain a missing token?" is a
//! bit test instead of a walk.

use bitflags::bitflags;

use crate::SyntaxToken;

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Synthesized by recovery; has no text.
        const MISSING = 1 << 0;
        /// Written with an `@` prefix; never a keyword.
        const VERBATIM = 1 << 1;
        /// Composed by the parser from adjacent tokens (`>>`, `>>=`, ...).
        const COMPOSED = 1 << 2;
        /// Carries at least one diagnostic of its own.
        const HAS_DIAGNOSTIC = 1 << 3;
        /// Trailing trivia ends with a line break.
        const LINE_BREAK_AFTER = 1 << 4;
        /// Leading trivia holds skipped tokens.
        const HAS_SKIPPED = 1 << 5;
    }
}

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u8 {
        const CONTAINS_MISSING = 1 << 0;
        const CONTAINS_DIAGNOSTICS = 1 << 1;
        const CONTAINS_SKIPPED = 1 << 2;
    }
}

impl NodeFlags {
    /// The subtree facts a single token contributes, counting diagnostics
    /// on skipped tokens in its trivia.
    pub fn from_token(token: &SyntaxToken) -> Self {
        let mut out = NodeFlags::empty();
        if token.is_missing() {
            out |= NodeFlags::CONTAINS_MISSING;
        }
        if token.has_diagnostics() {
            out |= NodeFlags::CONTAINS_DIAGNOSTICS;
        }
        if token.flags().contains(TokenFlags::HAS_SKIPPED) {
            out |= NodeFlags::CONTAINS_SKIPPED;
        }
        out
    }
}
