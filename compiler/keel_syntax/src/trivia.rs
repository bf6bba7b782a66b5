//! Trivia: the text between tokens.

use smallvec::SmallVec;

use crate::SyntaxToken;

/// Most tokens carry zero to two pieces of trivia on each side.
pub type TriviaList = SmallVec<[Trivia; 2]>;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    Whitespace,
    EndOfLine,
    SingleLineComment,
    MultiLineComment,
    SkippedToken,
}

/// One piece of trivia.
///
/// A skipped token keeps its own text, trivia and diagnostics, so skipping a
/// token moves it into trivia without losing anything.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Trivia {
    Whitespace(String),
    EndOfLine(String),
    SingleLineComment(String),
    MultiLineComment(String),
    Skipped(Box<SyntaxToken>),
}

impl Trivia {
    pub fn kind(&self) -> TriviaKind {
        match self {
            Trivia::Whitespace(_) => TriviaKind::Whitespace,
            Trivia::EndOfLine(_) => TriviaKind::EndOfLine,
            Trivia::SingleLineComment(_) => TriviaKind::SingleLineComment,
            Trivia::MultiLineComment(_) => TriviaKind::MultiLineComment,
            Trivia::Skipped(_) => TriviaKind::SkippedToken,
        }
    }

    /// Width in bytes, including a skipped token's own trivia.
    pub fn width(&self) -> u32 {
        match self {
            Trivia::Whitespace(text)
            | Trivia::EndOfLine(text)
            | Trivia::SingleLineComment(text)
            | Trivia::MultiLineComment(text) => width_of(text),
            Trivia::Skipped(token) => token.full_width(),
        }
    }

    pub fn write_to(&self, out: &mut String) {
        match self {
            Trivia::Whitespace(text)
            | Trivia::EndOfLine(text)
            | Trivia::SingleLineComment(text)
            | Trivia::MultiLineComment(text) => out.push_str(text),
            Trivia::Skipped(token) => token.write_to(out),
        }
    }

    pub fn is_end_of_line(&self) -> bool {
        matches!(self, Trivia::EndOfLine(_))
    }

    pub fn skipped_token(&self) -> Option<&SyntaxToken> {
        match self {
            Trivia::Skipped(token) => Some(token),
            _ => None,
        }
    }
}

pub(crate) fn width_of(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}
