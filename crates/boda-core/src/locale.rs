//! Supported locales and locale resolution.
//!
//! The site speaks exactly two languages. Anything that arrives from the
//! outside world (a URL segment, a config value) is funnelled through
//! [`Locale::resolve`], which always yields a member of the closed set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported site locale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Castellano (default).
    #[default]
    Es,
    /// Euskera.
    Eus,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::Eus];

    /// The locale used when none (or an unknown one) is requested.
    pub const DEFAULT: Locale = Locale::Es;

    /// URL/tag form, e.g. `"eus"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::Eus => "eus",
        }
    }

    /// Name of the language in that language, for the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Es => "Castellano",
            Self::Eus => "Euskera",
        }
    }

    /// Resolve a candidate tag to a supported locale.
    ///
    /// Absent, empty, or unknown candidates resolve to [`Locale::DEFAULT`].
    /// Matching is exact: `"ES"` is not `"es"`.
    pub fn resolve(candidate: Option<&str>) -> Locale {
        candidate
            .and_then(|c| c.parse().ok())
            .unwrap_or(Self::DEFAULT)
    }

    /// Resolve the locale from the first non-empty segment of a URL path.
    pub fn from_path(pathname: &str) -> Locale {
        Self::resolve(pathname.split('/').find(|s| !s.is_empty()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by the strict [`FromStr`] parse for tags outside the set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Self::Es),
            "eus" => Ok(Self::Eus),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tags() {
        assert_eq!(Locale::resolve(Some("es")), Locale::Es);
        assert_eq!(Locale::resolve(Some("eus")), Locale::Eus);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Locale::resolve(None), Locale::Es);
        assert_eq!(Locale::resolve(Some("")), Locale::Es);
        assert_eq!(Locale::resolve(Some("fr")), Locale::Es);
        assert_eq!(Locale::resolve(Some("EUS")), Locale::Es);
        assert_eq!(Locale::resolve(Some(" eus")), Locale::Es);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Locale::from_path("/eus/media"), Locale::Eus);
        assert_eq!(Locale::from_path("/es"), Locale::Es);
        assert_eq!(Locale::from_path("//eus/rsvp"), Locale::Eus);
        assert_eq!(Locale::from_path("/"), Locale::Es);
        assert_eq!(Locale::from_path(""), Locale::Es);
        assert_eq!(Locale::from_path("/media/eus"), Locale::Es);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err, UnknownLocale("fr".to_string()));
        assert_eq!(err.to_string(), "unknown locale 'fr'");
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Locale::Eus).unwrap();
        assert_eq!(json, "\"eus\"");
        let back: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(back, Locale::Es);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Locale::Es.label(), "Castellano");
        assert_eq!(Locale::Eus.label(), "Euskera");
    }
}
