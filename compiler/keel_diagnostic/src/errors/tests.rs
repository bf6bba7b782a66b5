use super::*;

#[test]
fn every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(*code), "{code} has no explain page");
    }
    assert_eq!(ErrorDocs::all_codes().count(), ErrorCode::ALL.len());
}

#[test]
fn docs_start_with_their_own_code() {
    for code in ErrorDocs::all_codes() {
        let Some(doc) = ErrorDocs::get(code) else {
            panic!("{code} listed but not retrievable");
        };
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} doc has the wrong heading"
        );
    }
}

#[test]
fn docs_quote_the_message_template() {
    let Some(doc) = ErrorDocs::get(ErrorCode::CS1514) else {
        panic!("CS1514 should be documented");
    };
    assert!(doc.contains("{ expected"));
    assert!(doc.contains("```csharp"));
}
