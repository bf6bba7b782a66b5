use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_matches_as_str() {
    assert_eq!(ErrorCode::CS1002.to_string(), "CS1002");
    assert_eq!(ErrorCode::CS8803.as_str(), "CS8803");
}

#[test]
fn all_codes_are_listed() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    let mut sorted = ErrorCode::ALL.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ErrorCode::ALL.len());
}

#[test]
fn from_str_is_lenient() {
    assert_eq!("cs1002".parse(), Ok(ErrorCode::CS1002));
    assert_eq!("1513".parse(), Ok(ErrorCode::CS1513));
    assert_eq!(" CS7014 ".parse(), Ok(ErrorCode::CS7014));
    assert_eq!("CS9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn phases_partition_the_codes() {
    let mut counts = [0usize; 4];
    for code in ErrorCode::ALL {
        let flags = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_contextual_error(),
            code.is_feature_error(),
        ];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{code}");
        for (slot, flag) in counts.iter_mut().zip(flags) {
            *slot += usize::from(flag);
        }
    }
    assert!(counts.iter().all(|c| *c > 0));
}

#[test]
fn only_the_suffix_code_is_a_warning() {
    let warnings: Vec<_> = ErrorCode::ALL.iter().filter(|c| c.is_warning()).collect();
    assert_eq!(warnings, vec![&ErrorCode::CS0078]);
}

#[test]
fn format_substitutes_positional_arguments() {
    assert_eq!(
        ErrorCode::CS1003.format_message(&[","]),
        "Syntax error, ',' expected"
    );
    assert_eq!(
        ErrorCode::CS9058.format_message(&["file types", "11.0"]),
        "Feature 'file types' is not available in C# 11.0. Please use language version 11.0 or greater."
    );
}

#[test]
fn format_keeps_braces_that_are_not_placeholders() {
    assert_eq!(ErrorCode::CS1514.format_message::<&str>(&[]), "{ expected");
    assert_eq!(ErrorCode::CS1513.format_message::<&str>(&[]), "} expected");
}

#[test]
fn format_leaves_unfilled_placeholders() {
    assert_eq!(
        ErrorCode::CS0106.format_message::<&str>(&[]),
        "The modifier '{0}' is not valid for this item"
    );
}

#[test]
fn feature_code_depends_on_version() {
    assert_eq!(
        ErrorCode::feature_unavailable_in(LanguageVersion::CSharp10),
        Some(ErrorCode::CS8936)
    );
    assert_eq!(
        ErrorCode::feature_unavailable_in(LanguageVersion::CSharp12),
        Some(ErrorCode::CS9202)
    );
    assert_eq!(ErrorCode::feature_unavailable_in(LanguageVersion::Preview), None);
}

#[test]
fn arity_counts_placeholders() {
    assert_eq!(ErrorCode::CS1002.arity(), 0);
    assert_eq!(ErrorCode::CS1003.arity(), 1);
    assert_eq!(ErrorCode::CS1519.arity(), 1);
    assert_eq!(ErrorCode::CS9202.arity(), 2);
}
