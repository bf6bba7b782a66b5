//! Language-version gating.
//!
//! Released features parse the same on every version; when the target
//! version predates them, the token that introduces the construct carries
//! the feature-availability diagnostic. Preview features are never
//! reported: callers test [`Parser::supports`] and take a different branch.

use keel_diagnostic::Diagnostic;
use keel_ir::Feature;
use keel_syntax::SyntaxToken;
use tracing::debug;

use crate::Parser;

impl Parser {
    #[inline]
    pub(crate) fn supports(&self, feature: Feature) -> bool {
        self.options.supports(feature)
    }

    /// Attach the availability diagnostic for `feature` to `token` when
    /// the target version lacks it.
    pub(crate) fn check_feature(&self, feature: Feature, token: SyntaxToken) -> SyntaxToken {
        match Diagnostic::feature_unavailable(feature, self.options.language_version, token.span()) {
            Some(diagnostic) => {
                debug!(%feature, version = %self.options.language_version, "feature unavailable");
                token.with_diagnostic(diagnostic)
            }
            None => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use keel_diagnostic::ErrorCode;
    use keel_ir::{LanguageVersion, ParseOptions};
    use keel_lexer::lex;
    use pretty_assertions::assert_eq;

    use super::*;

    fn checked(version: LanguageVersion, feature: Feature) -> Vec<ErrorCode> {
        let mut p = Parser::new(lex("x"), ParseOptions::new(version));
        let token = p.bump();
        p.check_feature(feature, token)
            .diagnostics()
            .iter()
            .map(|d| d.code)
            .collect()
    }

    #[test]
    fn code_follows_target_version() {
        assert_eq!(
            checked(LanguageVersion::CSharp10, Feature::RefStructInterfaces),
            vec![ErrorCode::CS8936]
        );
        assert_eq!(
            checked(LanguageVersion::CSharp11, Feature::RefStructInterfaces),
            vec![ErrorCode::CS9058]
        );
        assert_eq!(
            checked(LanguageVersion::CSharp12, Feature::RefStructInterfaces),
            vec![ErrorCode::CS9202]
        );
        assert!(checked(LanguageVersion::CSharp13, Feature::RefStructInterfaces).is_empty());
    }

    #[test]
    fn preview_features_never_report() {
        assert!(checked(LanguageVersion::CSharp10, Feature::ExtensionTypes).is_empty());
    }
}
