//! Reserved keyword resolution.
//!
//! Every word scans as an identifier; the cooker asks [`lookup`] whether it
//! is a reserved keyword. The table is bucketed by length (reserved
//! keywords are 2 to 9 bytes long) so most identifiers are rejected by a
//! length check and a first-byte check before any string comparison.
//!
//! Contextual keywords are not resolved here. They stay identifiers with a
//! [`ContextualKeyword`](keel_ir::ContextualKeyword) hint and the parser
//! decides per position.

use keel_ir::TokenKind;

/// The reserved keyword spelled `text`, if any. Case-sensitive.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(2..=9).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "as" => Some(TokenKind::KwAs),
            "do" => Some(TokenKind::KwDo),
            "if" => Some(TokenKind::KwIf),
            "in" => Some(TokenKind::KwIn),
            "is" => Some(TokenKind::KwIs),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::KwFor),
            "int" => Some(TokenKind::KwInt),
            "new" => Some(TokenKind::KwNew),
            "out" => Some(TokenKind::KwOut),
            "ref" => Some(TokenKind::KwRef),
            "try" => Some(TokenKind::KwTry),
            _ => None,
        },
        4 => match text {
            "base" => Some(TokenKind::KwBase),
            "bool" => Some(TokenKind::KwBool),
            "byte" => Some(TokenKind::KwByte),
            "case" => Some(TokenKind::KwCase),
            "char" => Some(TokenKind::KwChar),
            "else" => Some(TokenKind::KwElse),
            "enum" => Some(TokenKind::KwEnum),
            "goto" => Some(TokenKind::KwGoto),
            "lock" => Some(TokenKind::KwLock),
            "long" => Some(TokenKind::KwLong),
            "null" => Some(TokenKind::KwNull),
            "this" => Some(TokenKind::KwThis),
            "true" => Some(TokenKind::KwTrue),
            "uint" => Some(TokenKind::KwUint),
            "void" => Some(TokenKind::KwVoid),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::KwBreak),
            "catch" => Some(TokenKind::KwCatch),
            "class" => Some(TokenKind::KwClass),
            "const" => Some(TokenKind::KwConst),
            "event" => Some(TokenKind::KwEvent),
            "false" => Some(TokenKind::KwFalse),
            "float" => Some(TokenKind::KwFloat),
            "sbyte" => Some(TokenKind::KwSbyte),
            "short" => Some(TokenKind::KwShort),
            "throw" => Some(TokenKind::KwThrow),
            "ulong" => Some(TokenKind::KwUlong),
            "using" => Some(TokenKind::KwUsing),
            "while" => Some(TokenKind::KwWhile),
            _ => None,
        },
        6 => match text {
            "double" => Some(TokenKind::KwDouble),
            "extern" => Some(TokenKind::KwExtern),
            "object" => Some(TokenKind::KwObject),
            "params" => Some(TokenKind::KwParams),
            "public" => Some(TokenKind::KwPublic),
            "return" => Some(TokenKind::KwReturn),
            "sealed" => Some(TokenKind::KwSealed),
            "sizeof" => Some(TokenKind::KwSizeof),
            "static" => Some(TokenKind::KwStatic),
            "string" => Some(TokenKind::KwString),
            "struct" => Some(TokenKind::KwStruct),
            "switch" => Some(TokenKind::KwSwitch),
            "typeof" => Some(TokenKind::KwTypeof),
            "unsafe" => Some(TokenKind::KwUnsafe),
            "ushort" => Some(TokenKind::KwUshort),
            _ => None,
        },
        7 => match text {
            "checked" => Some(TokenKind::KwChecked),
            "decimal" => Some(TokenKind::KwDecimal),
            "default" => Some(TokenKind::KwDefault),
            "finally" => Some(TokenKind::KwFinally),
            "foreach" => Some(TokenKind::KwForeach),
            "private" => Some(TokenKind::KwPrivate),
            "virtual" => Some(TokenKind::KwVirtual),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(TokenKind::KwAbstract),
            "continue" => Some(TokenKind::KwContinue),
            "delegate" => Some(TokenKind::KwDelegate),
            "explicit" => Some(TokenKind::KwExplicit),
            "implicit" => Some(TokenKind::KwImplicit),
            "internal" => Some(TokenKind::KwInternal),
            "operator" => Some(TokenKind::KwOperator),
            "override" => Some(TokenKind::KwOverride),
            "readonly" => Some(TokenKind::KwReadonly),
            "volatile" => Some(TokenKind::KwVolatile),
            _ => None,
        },
        9 => match text {
            "interface" => Some(TokenKind::KwInterface),
            "namespace" => Some(TokenKind::KwNamespace),
            "protected" => Some(TokenKind::KwProtected),
            "unchecked" => Some(TokenKind::KwUnchecked),
            _ => None,
        },        _ => None,
    }
}

#[cfg(test)]
mod tests;
