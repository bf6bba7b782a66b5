//! Parse context flags for context-sensitive parsing.
//!
//! A few contextual words change meaning with the enclosing construct:
//! `await` is an operator only inside async code (or at top level), and a
//! stray `;` after a method body is only worth a targeted diagnostic inside
//! a type. The parser carries that state as a small flag set, saved and
//! restored around the productions that change it.

/// Context flags for parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Inside an `async` method, local function or lambda.
    /// `await` is the await operator.
    pub const IN_ASYNC: Self = Self(1 << 0);

    /// Parsing top-level statements. `await` is also an operator here.
    pub const TOP_LEVEL: Self = Self(1 << 1);

    /// Inside a type declaration body.
    pub const IN_TYPE_BODY: Self = Self(1 << 2);

    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// `await` reads as the operator.
    #[inline]
    pub const fn allows_await(self) -> bool {
        self.has(Self::IN_ASYNC) || self.has(Self::TOP_LEVEL)
    }

    #[inline]
    pub const fn in_type_body(self) -> bool {
        self.has(Self::IN_TYPE_BODY)
    }
}
