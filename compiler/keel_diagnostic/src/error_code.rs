//! Diagnostic codes.
//!
//! Codes follow the `CSnnnn` numbering the grammar's users already know, so
//! messages can be searched for. Each code owns its message template; the
//! positional placeholders `{0}`, `{1}` are filled from the diagnostic's
//! arguments at render time.

use std::fmt;

use keel_ir::LanguageVersion;

/// Which stage of the pipeline reports a code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorPhase {
    Lexer,
    Parser,
    /// Post-parse checks over the finished tree.
    Contextual,
    /// Version gating of constructs that otherwise parse normally.
    Feature,
}

/// Every diagnostic code keel can report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer errors
    /// Lowercase `l` integer suffix (warning)
    CS0078,
    /// Newline inside a string or character literal
    CS1010,
    /// Empty character literal
    CS1011,
    /// Character literal with more than one character
    CS1012,
    /// Unterminated multi-line comment
    CS1035,
    /// Unterminated string literal
    CS1039,
    /// Character the lexer does not recognise
    CS1056,

    // Syntax errors
    /// Array size in a variable declaration's type
    CS0270,
    /// Identifier expected
    CS1001,
    /// Semicolon expected
    CS1002,
    /// Specific token expected
    CS1003,
    /// Unary operator expected in an operator declaration
    CS1019,
    /// Binary operator expected in an operator declaration
    CS1020,
    /// Stray token at namespace level
    CS1022,
    /// Closing parenthesis expected
    CS1026,
    /// Type expected
    CS1031,
    /// Operator expected in an operator declaration
    CS1037,
    /// Identifier expected, keyword found
    CS1041,
    /// Closing brace expected
    CS1513,
    /// Opening brace expected
    CS1514,
    /// Stray token in a type body
    CS1519,
    /// `try` block without `catch` or `finally`
    CS1524,
    /// Token cannot start an expression
    CS1525,
    /// Conversion operator written without `operator`
    CS1553,
    /// Semicolon after a method or accessor block
    CS1597,
    /// Expression expected at end of input
    CS1733,
    /// Tuple type with a single element
    CS8124,

    // Contextual checks
    /// Modifier not valid on this declaration
    CS0106,
    /// Attributes on a statement
    CS7014,
    /// Top-level statement after a declaration
    CS8803,

    // Feature availability
    /// Feature needs a version newer than C# 10
    CS8936,
    /// Feature needs a version newer than C# 11
    CS9058,
    /// Feature needs a version newer than C# 12
    CS9202,
}

impl ErrorCode {
    /// All codes, for exhaustive tests and `FromStr`.
    ///
    /// Kept in sync with `as_str()`; `all_codes_are_listed` catches omissions.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::CS0078,
        ErrorCode::CS1010,
        ErrorCode::CS1011,
        ErrorCode::CS1012,
        ErrorCode::CS1035,
        ErrorCode::CS1039,
        ErrorCode::CS1056,
        ErrorCode::CS0270,
        ErrorCode::CS1001,
        ErrorCode::CS1002,
        ErrorCode::CS1003,
        ErrorCode::CS1019,
        ErrorCode::CS1020,
        ErrorCode::CS1022,
        ErrorCode::CS1026,
        ErrorCode::CS1031,
        ErrorCode::CS1037,
        ErrorCode::CS1041,
        ErrorCode::CS1513,
        ErrorCode::CS1514,
        ErrorCode::CS1519,
        ErrorCode::CS1524,
        ErrorCode::CS1525,
        ErrorCode::CS1553,
        ErrorCode::CS1597,
        ErrorCode::CS1733,
        ErrorCode::CS8124,
        ErrorCode::CS0106,
        ErrorCode::CS7014,
        ErrorCode::CS8803,
        ErrorCode::CS8936,
        ErrorCode::CS9058,
        ErrorCode::CS9202,
    ];

    /// The code as written in output, e.g. `"CS1002"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::CS0078 => "CS0078",
            ErrorCode::CS1010 => "CS1010",
            ErrorCode::CS1011 => "CS1011",
            ErrorCode::CS1012 => "CS1012",
            ErrorCode::CS1035 => "CS1035",
            ErrorCode::CS1039 => "CS1039",
            ErrorCode::CS1056 => "CS1056",
            ErrorCode::CS0270 => "CS0270",
            ErrorCode::CS1001 => "CS1001",
            ErrorCode::CS1002 => "CS1002",
            ErrorCode::CS1003 => "CS1003",
            ErrorCode::CS1019 => "CS1019",
            ErrorCode::CS1020 => "CS1020",
            ErrorCode::CS1022 => "CS1022",
            ErrorCode::CS1026 => "CS1026",
            ErrorCode::CS1031 => "CS1031",
            ErrorCode::CS1037 => "CS1037",
            ErrorCode::CS1041 => "CS1041",
            ErrorCode::CS1513 => "CS1513",
            ErrorCode::CS1514 => "CS1514",
            ErrorCode::CS1519 => "CS1519",
            ErrorCode::CS1524 => "CS1524",
            ErrorCode::CS1525 => "CS1525",
            ErrorCode::CS1553 => "CS1553",
            ErrorCode::CS1597 => "CS1597",
            ErrorCode::CS1733 => "CS1733",
            ErrorCode::CS8124 => "CS8124",
            ErrorCode::CS0106 => "CS0106",
            ErrorCode::CS7014 => "CS7014",
            ErrorCode::CS8803 => "CS8803",
            ErrorCode::CS8936 => "CS8936",
            ErrorCode::CS9058 => "CS9058",
            ErrorCode::CS9202 => "CS9202",
        }
    }

    /// Message template with `{N}` placeholders.
    pub const fn template(self) -> &'static str {
        match self {
            ErrorCode::CS0078 => {
                "The 'l' suffix is easily confused with the digit '1' -- use 'L' for clarity"
            }
            ErrorCode::CS1010 => "Newline in constant",
            ErrorCode::CS1011 => "Empty character literal",
            ErrorCode::CS1012 => "Too many characters in character literal",
            ErrorCode::CS1035 => "End-of-file found, '*/' expected",
            ErrorCode::CS1039 => "Unterminated string literal",
            ErrorCode::CS1056 => "Unexpected character '{0}'",
            ErrorCode::CS0270 => {
                "Array size cannot be specified in a variable declaration (try initializing with a 'new' expression)"
            }
            ErrorCode::CS1001 => "Identifier expected",
            ErrorCode::CS1002 => "; expected",
            ErrorCode::CS1003 => "Syntax error, '{0}' expected",
            ErrorCode::CS1019 => "Overloadable unary operator expected",
            ErrorCode::CS1020 => "Overloadable binary operator expected",
            ErrorCode::CS1022 => "Type or namespace definition, or end-of-file expected",
            ErrorCode::CS1026 => ") expected",
            ErrorCode::CS1031 => "Type expected",
            ErrorCode::CS1037 => "Overloadable operator expected",
            ErrorCode::CS1041 => "Identifier expected; '{0}' is a keyword",
            ErrorCode::CS1513 => "} expected",
            ErrorCode::CS1514 => "{ expected",
            ErrorCode::CS1519 => "Invalid token '{0}' in a member declaration",
            ErrorCode::CS1524 => "Expected catch or finally",
            ErrorCode::CS1525 => "Invalid expression term '{0}'",
            ErrorCode::CS1553 => {
                "Declaration is not valid; use '{0} operator <dest-type> (...' instead"
            }
            ErrorCode::CS1597 => "Semicolon after method or accessor block is not valid",
            ErrorCode::CS1733 => "Expected expression",
            ErrorCode::CS8124 => "Tuple must contain at least two elements.",
            ErrorCode::CS0106 => "The modifier '{0}' is not valid for this item",
            ErrorCode::CS7014 => "Attributes are not valid in this context.",
            ErrorCode::CS8803 => {
                "Top-level statements must precede namespace and type declarations."
            }
            ErrorCode::CS8936 => {
                "Feature '{0}' is not available in C# 10.0. Please use language version {1} or greater."
            }
            ErrorCode::CS9058 => {
                "Feature '{0}' is not available in C# 11.0. Please use language version {1} or greater."
            }
            ErrorCode::CS9202 => {
                "Feature '{0}' is not available in C# 12.0. Please use language version {1} or greater."
            }
        }
    }

    pub const fn phase(self) -> ErrorPhase {
        match self {
            ErrorCode::CS0078
            | ErrorCode::CS1010
            | ErrorCode::CS1011
            | ErrorCode::CS1012
            | ErrorCode::CS1035
            | ErrorCode::CS1039
            | ErrorCode::CS1056 => ErrorPhase::Lexer,
            ErrorCode::CS0270
            | ErrorCode::CS1001
            | ErrorCode::CS1002
            | ErrorCode::CS1003
            | ErrorCode::CS1019
            | ErrorCode::CS1020
            | ErrorCode::CS1022
            | ErrorCode::CS1026
            | ErrorCode::CS1031
            | ErrorCode::CS1037
            | ErrorCode::CS1041
            | ErrorCode::CS1513
            | ErrorCode::CS1514
            | ErrorCode::CS1519
            | ErrorCode::CS1524
            | ErrorCode::CS1525
            | ErrorCode::CS1553
            | ErrorCode::CS1597
            | ErrorCode::CS1733
            | ErrorCode::CS8124 => ErrorPhase::Parser,
            ErrorCode::CS0106
            | ErrorCode::CS7014
            | ErrorCode::CS8803 => ErrorPhase::Contextual,
            ErrorCode::CS8936
            | ErrorCode::CS9058
            | ErrorCode::CS9202 => ErrorPhase::Feature,
        }
    }

    pub fn is_lexer_error(self) -> bool {
        self.phase() == ErrorPhase::Lexer
    }

    pub fn is_parser_error(self) -> bool {
        self.phase() == ErrorPhase::Parser
    }

    pub fn is_contextual_error(self) -> bool {
        self.phase() == ErrorPhase::Contextual
    }

    pub fn is_feature_error(self) -> bool {
        self.phase() == ErrorPhase::Feature
    }

    /// Codes reported as warnings rather than errors.
    pub fn is_warning(self) -> bool {
        matches!(self, ErrorCode::CS0078)
    }

    /// Number of `{N}` placeholders the message template takes.
    pub fn arity(self) -> usize {
        let template = self.template();
        (0..4)
            .take_while(|n| template.contains(&format!("{{{n}}}")))
            .count()
    }

    /// The feature-availability code for a parse targeting `version`.
    ///
    /// `None` for versions that never report availability (a feature known
    /// to be missing from C# 13 is a preview feature, which changes the parse
    /// instead).
    pub const fn feature_unavailable_in(version: LanguageVersion) -> Option<ErrorCode> {
        match version {
            LanguageVersion::CSharp10 => Some(ErrorCode::CS8936),
            LanguageVersion::CSharp11 => Some(ErrorCode::CS9058),
            LanguageVersion::CSharp12 => Some(ErrorCode::CS9202),
            LanguageVersion::CSharp13 | LanguageVersion::Preview => None,
        }
    }

    /// Render the template, substituting `{N}` with `args[N]`.
    ///
    /// Placeholders without a matching argument are left verbatim.
    pub fn format_message<S: AsRef<str>>(self, args: &[S]) -> String {
        let template = self.template();
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}');
            let index = close.and_then(|close| after[..close].parse::<usize>().ok());
            match (close, index) {
                (Some(close), Some(index)) if index < args.len() => {
                    out.push_str(args[index].as_ref());
                    rest = &after[close + 1..];
                }
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code like `"CS1002"`; case-insensitive, and the `CS` prefix is
/// optional (`keel --explain 1002`).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let wanted = if upper.starts_with("CS") {
            upper
        } else {
            format!("CS{upper}")
        };
        Self::ALL
            .iter()
            .find(|code| code.as_str() == wanted)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
