use super::*;
use keel_ir::ContextualKeyword;
use pretty_assertions::assert_eq;

const RESERVED: &[&str] = &["as", "do", "if", "in", "is", "for", "int", "new", "out", "ref", "try", "base", "bool", "byte", "case", "char", "else", "enum", "goto", "lock", "long", "null", "this", "true", "uint", "void", "break", "catch", "class", "const", "event", "false", "float", "sbyte", "short", "throw", "ulong", "using", "while", "double", "extern", "object", "params", "public", "return", "sealed", "sizeof", "static", "string", "struct", "switch", "typeof", "unsafe", "ushort", "checked", "decimal", "default", "finally", "foreach", "private", "virtual", "abstract", "continue", "delegate", "explicit", "implicit", "internal", "operator", "override", "readonly", "volatile", "interface", "namespace", "protected", "unchecked"];

#[test]
fn every_reserved_keyword_resolves_to_its_kind() {
    assert_eq!(RESERVED.len(), 75);
    for &text in RESERVED {
        let Some(kind) = lookup(text) else {
            panic!("{text} not found");
        };
        assert!(kind.is_reserved_keyword(), "{text}");
        assert_eq!(kind.fixed_text(), Some(text));
    }
}

#[test]
fn contextual_keywords_are_not_reserved() {
    for keyword in ContextualKeyword::ALL {
        assert_eq!(lookup(keyword.text()), None, "{keyword}");
    }
}

#[test]
fn near_misses() {
    assert_eq!(lookup("Class"), None);
    assert_eq!(lookup("classes"), None);
    assert_eq!(lookup("i"), None);
    assert_eq!(lookup("interfaces"), None);
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup("stackalloc"), None);
    assert_eq!(lookup(""), None);
}
