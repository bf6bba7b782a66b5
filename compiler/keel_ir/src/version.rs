//! Language versions and version-gated features.
//!
//! A [`ParseOptions`] value is built once per parse and threaded through the
//! parser by value. Two kinds of gating exist:
//!
//! - features whose syntax is unambiguous parse the same on every version
//!   and report a feature-availability diagnostic when unavailable;
//! - preview features change *which* production is chosen, so an older
//!   version simply never takes the specialised branch.

use std::fmt;
use std::str::FromStr;

/// Language version the parser targets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord, Default)]
pub enum LanguageVersion {
    CSharp10,
    CSharp11,
    CSharp12,
    CSharp13,
    #[default]
    Preview,
}

impl LanguageVersion {
    /// Latest released version (what `latest` selects).
    pub const LATEST: LanguageVersion = LanguageVersion::CSharp13;

    pub const ALL: &[LanguageVersion] = &[
        LanguageVersion::CSharp10,
        LanguageVersion::CSharp11,
        LanguageVersion::CSharp12,
        LanguageVersion::CSharp13,
        LanguageVersion::Preview,
    ];

    /// The `N.0` form used in diagnostics, or `preview`.
    pub const fn display_number(self) -> &'static str {
        match self {
            LanguageVersion::CSharp10 => "10.0",
            LanguageVersion::CSharp11 => "11.0",
            LanguageVersion::CSharp12 => "12.0",
            LanguageVersion::CSharp13 => "13.0",
            LanguageVersion::Preview => "preview",
        }
    }

    #[inline]
    pub fn supports(self, feature: Feature) -> bool {
        self >= feature.required_version()
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageVersion::Preview => f.write_str("preview"),
            other => write!(f, "C# {}", other.display_number()),
        }
    }
}

/// A `--lang` / `KEEL_LANG` value that names no known version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language version `{0}` (expected 10, 11, 12, 13, preview or latest)")]
pub struct LanguageVersionError(pub String);

impl FromStr for LanguageVersion {
    type Err = LanguageVersionError;

    /// Accepts `10`, `10.0`, `csharp10`, `cs10`, `preview` and `latest`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("csharp")
            .or_else(|| lower.strip_prefix("cs"))
            .unwrap_or(&lower);
        let digits = digits.strip_suffix(".0").unwrap_or(digits);
        match digits {
            "10" => Ok(LanguageVersion::CSharp10),
            "11" => Ok(LanguageVersion::CSharp11),
            "12" => Ok(LanguageVersion::CSharp12),
            "13" => Ok(LanguageVersion::CSharp13),
            "preview" => Ok(LanguageVersion::Preview),
            "latest" => Ok(LanguageVersion::LATEST),
            _ => Err(LanguageVersionError(s.to_string())),
        }
    }
}

/// Version-gated language features.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Feature {
    FileTypes,
    RequiredMembers,
    UnsignedRightShift,
    CollectionExpressions,
    PrimaryConstructors,
    RefStructInterfaces,
    ExtensionTypes,
    CollectionWithElement,
}

impl Feature {
    pub const fn required_version(self) -> LanguageVersion {
        match self {
            Feature::FileTypes | Feature::RequiredMembers | Feature::UnsignedRightShift => {
                LanguageVersion::CSharp11
            }
            Feature::CollectionExpressions | Feature::PrimaryConstructors => {
                LanguageVersion::CSharp12
            }
            Feature::RefStructInterfaces => LanguageVersion::CSharp13,
            Feature::ExtensionTypes | Feature::CollectionWithElement => LanguageVersion::Preview,
        }
    }

    /// Name quoted in feature-availability diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::FileTypes => "file types",
            Feature::RequiredMembers => "required members",
            Feature::UnsignedRightShift => "unsigned right shift",
            Feature::CollectionExpressions => "collection expressions",
            Feature::PrimaryConstructors => "primary constructors",
            Feature::RefStructInterfaces => "ref struct interfaces",
            Feature::ExtensionTypes => "extension types",
            Feature::CollectionWithElement => "collection expression arguments",
        }
    }

    /// Preview features pick a different parse instead of reporting.
    pub fn is_preview(self) -> bool {
        self.required_version() == LanguageVersion::Preview
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for a single parse. Immutable once built.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParseOptions {
    pub language_version: LanguageVersion,
}

impl ParseOptions {
    pub const fn new(language_version: LanguageVersion) -> Self {
        ParseOptions { language_version }
    }

    #[inline]
    pub fn supports(self, feature: Feature) -> bool {
        self.language_version.supports(feature)
    }
}
