//! Token cursor for navigating the lexed token buffer.
//!
//! The cursor owns the token list and a position into it. `peek`, `mark`
//! and `reset` are pure reads: only [`Cursor::advance`] hands a token out to
//! be placed in the tree.
//!
//! The buffer always ends with an `Eof` token and the cursor never moves
//! past it, so `current()` is always valid and `peek(n)` past the end
//! yields `Eof`.
//!
//! Bracket pairs are resolved once, up front. A closer pairs with the
//! nearest open bracket of its own kind; openers it skips over stay
//! unmatched, and a closer with no opener of its kind pairs with nothing.

use keel_ir::TokenKind;
use keel_syntax::SyntaxToken;
use tracing::trace;

/// A rewind point. Checkpoints are plain buffer indices and must be used
/// in a strictly nested fashion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

pub struct Cursor {
    tokens: Vec<SyntaxToken>,
    /// For each opener, the index of its closer.
    closers: Vec<Option<usize>>,
    pos: usize,
}

impl Cursor {
    /// Wrap a token list. An `Eof` is appended when the list does not end
    /// with one.
    pub fn new(mut tokens: Vec<SyntaxToken>) -> Self {
        if tokens.last().map(SyntaxToken::kind) != Some(TokenKind::Eof) {
            let end = tokens
                .last()
                .map_or(0, |last| last.full_start() + last.full_width());
            tokens.push(SyntaxToken::new(TokenKind::Eof, "", end));
        }
        let closers = pair_brackets(&tokens);
        Cursor { tokens, closers, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> &SyntaxToken {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind()
    }

    /// The token `offset` places ahead; `peek(0)` is `current()`.
    #[inline]
    pub fn peek(&self, offset: usize) -> &SyntaxToken {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    #[inline]
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.peek(offset).kind()
    }

    /// The token just before the current one, if any.
    pub fn previous(&self) -> Option<&SyntaxToken> {
        self.pos.checked_sub(1).map(|idx| &self.tokens[idx])
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Whether the tokens at `offset` and `offset + 1` touch, with no trivia
    /// between them. Used to compose `>` `>` into a shift operator.
    pub fn adjacent(&self, offset: usize) -> bool {
        let first = self.peek(offset);
        let second = self.peek(offset + 1);
        first.trailing().is_empty()
            && second.leading().is_empty()
            && first.kind() != TokenKind::Eof
            && second.kind() != TokenKind::Eof
    }

    /// Offset of the closer paired with the opener at `offset`. `None` when
    /// that token is not an opener or nothing closes it.
    pub fn matching_close(&self, offset: usize) -> Option<usize> {
        let at = self.pos + offset;
        let close = (*self.closers.get(at)?)?;
        Some(close - self.pos)
    }

    #[inline]
    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn reset(&mut self, checkpoint: Checkpoint) {
        trace!(from = self.pos, to = checkpoint.0, "reset");
        self.pos = checkpoint.0;
    }

    /// Consume the current token and return it for placement in the tree.
    ///
    /// At `Eof` the position does not move; the parser only advances over
    /// `Eof` once, when the compilation unit takes it.
    pub fn advance(&mut self) -> SyntaxToken {
        let token = self.tokens[self.pos].clone();
        trace!(
            pos = self.pos,
            kind = %token.kind(),
            start = token.span().start,
            end = token.span().end,
            "advance"
        );
        if token.kind() != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

fn closer_of(kind: TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::LParen => Some(TokenKind::RParen),
        TokenKind::LBracket => Some(TokenKind::RBracket),
        TokenKind::LBrace => Some(TokenKind::RBrace),
        _ => None,
    }
}

fn bracket_slot(closer: TokenKind) -> Option<usize> {
    match closer {
        TokenKind::RParen => Some(0),
        TokenKind::RBracket => Some(1),
        TokenKind::RBrace => Some(2),
        _ => None,
    }
}

/// Single pass over the buffer with a stack of open brackets. `open`
/// counts the stack entries of each kind, so a closer with no opener of
/// its kind is dropped without walking the stack.
fn pair_brackets(tokens: &[SyntaxToken]) -> Vec<Option<usize>> {
    let mut closers = vec![None; tokens.len()];
    let mut stack: Vec<(TokenKind, usize)> = Vec::new();
    let mut open = [0usize; 3];
    for (idx, token) in tokens.iter().enumerate() {
        let kind = token.kind();
        if let Some(closer) = closer_of(kind) {
            if let Some(slot) = bracket_slot(closer) {
                open[slot] += 1;
            }
            stack.push((closer, idx));
            continue;
        }
        let Some(slot) = bracket_slot(kind) else {
            continue;
        };
        if open[slot] == 0 {
            continue;
        }
        while let Some((expected, opener)) = stack.pop() {
            if let Some(popped) = bracket_slot(expected) {
                open[popped] -= 1;
            }
            if expected == kind {
                closers[opener] = Some(idx);
                break;
            }
        }
    }
    closers
}

#[cfg(test)]
mod tests;
