//! The two user-facing preferences and their persisted string forms.

use std::{fmt, str::FromStr};

use crate::storage::Environment;

/// Returned when a string is not one of a preference's stored values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported value {value:?} for preference `{key}`")]
pub struct ParsePreferenceError {
    /// Storage key of the preference that was being parsed.
    pub key: &'static str,
    /// The rejected input.
    pub value: String,
}

/// A persisted, closed-set setting.
///
/// Each implementor owns one storage key. Stored strings are matched
/// exactly against [`Preference::as_str`]; anything else is treated as
/// absent and resolves through [`Preference::environment_default`].
pub trait Preference: Copy + Eq + fmt::Debug + 'static {
    /// Key under which the value lives in the key-value store.
    const KEY: &'static str;

    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Snapshot used when no interactive environment exists.
    const FALLBACK: Self;

    /// Persisted string form.
    fn as_str(self) -> &'static str;

    /// Default used when nothing valid is stored.
    fn environment_default(environment: &dyn Environment) -> Self;

    /// Exact match against the persisted forms of [`Preference::ALL`].
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == raw)
    }
}

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Chinese, the base language every label falls back to.
    #[default]
    Zh,
    /// English.
    En,
}

impl Language {
    /// The other language, for click-to-flip controls.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }
}

impl Preference for Language {
    const ALL: &'static [Self] = &[Self::Zh, Self::En];
    const FALLBACK: Self = Self::Zh;
    const KEY: &'static str = "language";

    fn as_str(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    fn environment_default(_environment: &dyn Environment) -> Self {
        Self::Zh
    }
}

/// Color theme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light background, the fallback when the environment says nothing.
    #[default]
    Light,
    /// Dark background; marks the document root with the dark class.
    Dark,
}

impl Theme {
    /// The other theme, for click-to-flip controls.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the root dark marker should be present.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl Preference for Theme {
    const ALL: &'static [Self] = &[Self::Light, Self::Dark];
    const FALLBACK: Self = Self::Light;
    const KEY: &'static str = "theme";

    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn environment_default(environment: &dyn Environment) -> Self {
        if environment.prefers_dark_color_scheme() {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

macro_rules! impl_text_forms {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = ParsePreferenceError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Preference>::parse(s).ok_or_else(|| ParsePreferenceError {
                        key: <$ty as Preference>::KEY,
                        value: s.to_string(),
                    })
                }
            }
        )+
    };
}

impl_text_forms!(Language, Theme);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StaticEnvironment;

    #[test]
    fn parses_only_exact_stored_forms() {
        assert_eq!(Language::parse("zh"), Some(Language::Zh));
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("EN"), None);
        assert_eq!(Language::parse(" en"), None);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("system"), None);
    }

    #[test]
    fn from_str_reports_key_and_value() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err.key, "language");
        assert_eq!(err.value, "fr");
        assert_eq!(err.to_string(), "unsupported value \"fr\" for preference `language`");
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    }

    #[test]
    fn display_matches_persisted_form() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string(), lang.as_str());
        }
        for theme in Theme::ALL {
            assert_eq!(theme.to_string(), theme.as_str());
        }
    }

    #[test]
    fn theme_default_follows_color_scheme() {
        let dark = StaticEnvironment { prefers_dark: true };
        let plain = StaticEnvironment::default();
        assert_eq!(Theme::environment_default(&dark), Theme::Dark);
        assert_eq!(Theme::environment_default(&plain), Theme::Light);
        assert_eq!(Language::environment_default(&dark), Language::Zh);
    }

    #[test]
    fn toggled_flips_between_the_two_states() {
        assert_eq!(Language::Zh.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Light.toggled().is_dark());
    }
}
