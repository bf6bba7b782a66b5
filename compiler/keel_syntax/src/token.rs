//! Tokens with their trivia and diagnostics.

use keel_diagnostic::Diagnostic;
use keel_ir::{ContextualKeyword, Span, TokenKind};
use smallvec::SmallVec;

use crate::trivia::width_of;
use crate::{TokenFlags, Trivia, TriviaList};

/// A token in the tree.
///
/// `full_start` is the absolute offset where the token's leading trivia
/// begins. The token's own text starts after the leading trivia; see
/// [`span`](Self::span). A missing token has empty text and no trivia and
/// sits at `full_start`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxToken {
    kind: TokenKind,
    text: String,
    full_start: u32,
    leading: TriviaList,
    trailing: TriviaList,
    diagnostics: Vec<Diagnostic>,
    contextual: Option<ContextualKeyword>,
    flags: TokenFlags,
}

impl SyntaxToken {
    pub fn new(kind: TokenKind, text: impl Into<String>, full_start: u32) -> Self {
        SyntaxToken {
            kind,
            text: text.into(),
            full_start,
            leading: SmallVec::new(),
            trailing: SmallVec::new(),
            diagnostics: Vec::new(),
            contextual: None,
            flags: TokenFlags::empty(),
        }
    }

    /// A zero-width placeholder for a token recovery had to invent.
    pub fn missing(kind: TokenKind, position: u32) -> Self {
        let mut token = SyntaxToken::new(kind, String::new(), position);
        token.flags |= TokenFlags::MISSING;
        token
    }

    #[must_use]
    pub fn with_leading(mut self, leading: TriviaList) -> Self {
        if leading.iter().any(|t| matches!(t, Trivia::Skipped(_))) {
            self.flags |= TokenFlags::HAS_SKIPPED;
        }
        self.leading = leading;
        self
    }

    #[must_use]
    pub fn with_trailing(mut self, trailing: TriviaList) -> Self {
        self.flags.set(
            TokenFlags::LINE_BREAK_AFTER,
            trailing.last().is_some_and(Trivia::is_end_of_line),
        );
        self.trailing = trailing;
        self
    }

    #[must_use]
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self.flags |= TokenFlags::HAS_DIAGNOSTIC;
        self
    }

    #[must_use]
    pub fn with_contextual(mut self, keyword: Option<ContextualKeyword>) -> Self {
        self.contextual = keyword;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Reclassify the token, keeping its text and trivia. Used when a
    /// contextual keyword is promoted and when a token is reinterpreted.
    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Prepend skipped tokens to the leading trivia. The token's full start
    /// moves back to the first skipped token.
    #[must_use]
    pub fn with_skipped_before(mut self, skipped: Vec<SyntaxToken>) -> Self {
        if skipped.is_empty() {
            return self;
        }
        if let Some(first) = skipped.first() {
            self.full_start = first.full_start;
        }
        let mut leading: TriviaList = skipped
            .into_iter()
            .map(|token| Trivia::Skipped(Box::new(token)))
            .collect();
        leading.extend(std::mem::take(&mut self.leading));
        self.leading = leading;
        self.flags |= TokenFlags::HAS_SKIPPED;
        self
    }

    /// Merge `next` into this token as one composed token (`>` `>` → `>>`).
    /// The caller guarantees the two are adjacent with no trivia between.
    #[must_use]
    pub fn compose(mut self, next: SyntaxToken, kind: TokenKind) -> Self {
        debug_assert!(self.trailing.is_empty() && next.leading.is_empty());
        self.text.push_str(&next.text);
        self.kind = kind;
        self.diagnostics.extend(next.diagnostics);
        self.flags |= TokenFlags::COMPOSED | (next.flags & TokenFlags::HAS_DIAGNOSTIC);
        self.with_trailing(next.trailing)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn leading(&self) -> &[Trivia] {
        &self.leading
    }

    pub fn trailing(&self) -> &[Trivia] {
        &self.trailing
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn contextual_keyword(&self) -> Option<ContextualKeyword> {
        self.contextual
    }

    #[inline]
    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.flags.contains(TokenFlags::MISSING)
    }

    #[inline]
    pub fn is_verbatim(&self) -> bool {
        self.flags.contains(TokenFlags::VERBATIM)
    }

    /// Whether the trailing trivia ends the line.
    #[inline]
    pub fn ends_line(&self) -> bool {
        self.flags.contains(TokenFlags::LINE_BREAK_AFTER)
    }

    #[inline]
    pub fn full_start(&self) -> u32 {
        self.full_start
    }

    pub fn leading_width(&self) -> u32 {
        self.leading.iter().map(Trivia::width).sum()
    }

    pub fn trailing_width(&self) -> u32 {
        self.trailing.iter().map(Trivia::width).sum()
    }

    pub fn text_width(&self) -> u32 {
        width_of(&self.text)
    }

    pub fn full_width(&self) -> u32 {
        self.leading_width() + self.text_width() + self.trailing_width()
    }

    /// The token's own text, without trivia.
    pub fn span(&self) -> Span {
        let start = self.full_start + self.leading_width();
        Span::new(start, start + self.text_width())
    }

    /// Text plus leading and trailing trivia.
    pub fn full_span(&self) -> Span {
        Span::new(self.full_start, self.full_start + self.full_width())
    }

    /// Skipped tokens carried in trivia, in source order.
    pub fn skipped_tokens(&self) -> impl Iterator<Item = &SyntaxToken> {
        self.leading
            .iter()
            .chain(self.trailing.iter())
            .filter_map(Trivia::skipped_token)
    }

    /// Write trivia and text back out.
    pub fn write_to(&self, out: &mut String) {
        for trivia in &self.leading {
            trivia.write_to(out);
        }
        out.push_str(&self.text);
        for trivia in &self.trailing {
            trivia.write_to(out);
        }
    }

    /// Append this token's diagnostics and those of its skipped trivia to
    /// `out`, in source order.
    pub fn collect_diagnostics(&self, out: &mut Vec<Diagnostic>) {
        for trivia in &self.leading {
            if let Trivia::Skipped(token) = trivia {
                token.collect_diagnostics(out);
            }
        }
        out.extend(self.diagnostics.iter().cloned());
        for trivia in &self.trailing {
            if let Trivia::Skipped(token) = trivia {
                token.collect_diagnostics(out);
            }
        }
    }

    /// Whether this token or its skipped trivia carries any diagnostic.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
            || self.skipped_tokens().any(SyntaxToken::has_diagnostics)
    }
}

#[cfg(test)]
mod tests;
