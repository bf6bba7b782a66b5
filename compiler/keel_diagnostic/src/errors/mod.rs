//! Embedded documentation for `keel --explain`.
//!
//! Each code has a markdown file in this directory, embedded at compile time.
//! To document a new code, add `CSxxxx.md` here and an entry to `DOCS`.

use crate::ErrorCode;

/// Lookup of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// The markdown explanation for `code`, if one exists.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Lexer
    (ErrorCode::CS0078, include_str!("CS0078.md")),
    (ErrorCode::CS1010, include_str!("CS1010.md")),
    (ErrorCode::CS1011, include_str!("CS1011.md")),
    (ErrorCode::CS1012, include_str!("CS1012.md")),
    (ErrorCode::CS1035, include_str!("CS1035.md")),
    (ErrorCode::CS1039, include_str!("CS1039.md")),
    (ErrorCode::CS1056, include_str!("CS1056.md")),
    // Syntax
    (ErrorCode::CS0270, include_str!("CS0270.md")),
    (ErrorCode::CS1001, include_str!("CS1001.md")),
    (ErrorCode::CS1002, include_str!("CS1002.md")),
    (ErrorCode::CS1003, include_str!("CS1003.md")),
    (ErrorCode::CS1019, include_str!("CS1019.md")),
    (ErrorCode::CS1020, include_str!("CS1020.md")),
    (ErrorCode::CS1022, include_str!("CS1022.md")),
    (ErrorCode::CS1026, include_str!("CS1026.md")),
    (ErrorCode::CS1031, include_str!("CS1031.md")),
    (ErrorCode::CS1037, include_str!("CS1037.md")),
    (ErrorCode::CS1041, include_str!("CS1041.md")),
    (ErrorCode::CS1513, include_str!("CS1513.md")),
    (ErrorCode::CS1514, include_str!("CS1514.md")),
    (ErrorCode::CS1519, include_str!("CS1519.md")),
    (ErrorCode::CS1524, include_str!("CS1524.md")),
    (ErrorCode::CS1525, include_str!("CS1525.md")),
    (ErrorCode::CS1553, include_str!("CS1553.md")),
    (ErrorCode::CS1597, include_str!("CS1597.md")),
    (ErrorCode::CS1733, include_str!("CS1733.md")),
    (ErrorCode::CS8124, include_str!("CS8124.md")),
    // Contextual checks
    (ErrorCode::CS0106, include_str!("CS0106.md")),
    (ErrorCode::CS7014, include_str!("CS7014.md")),
    (ErrorCode::CS8803, include_str!("CS8803.md")),
    // Feature availability
    (ErrorCode::CS8936, include_str!("CS8936.md")),
    (ErrorCode::CS9058, include_str!("CS9058.md")),
    (ErrorCode::CS9202, include_str!("CS9202.md")),
];

#[cfg(test)]
mod tests;
