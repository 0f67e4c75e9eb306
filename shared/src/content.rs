//! Static site content: the outbound link list and the UI string table.
//!
//! Both collections are supplied as JSON at build time and displayed as
//! given. Parsing is the only processing.

use serde::{Deserialize, Serialize};

use crate::preference::Language;

/// Why the bundled content could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The link list is not valid JSON of the expected shape.
    #[error("invalid link list: {0}")]
    Links(#[source] serde_json::Error),
    /// The translation table is not valid JSON of the expected shape.
    #[error("invalid translation table: {0}")]
    Translations(#[source] serde_json::Error),
}

/// Text with a mandatory base-language form and an optional English form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Base-language text; every lookup can fall back to it.
    pub zh: String,
    /// English text, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    /// Text for `lang`, or the base-language text when that language has
    /// no entry.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Zh => &self.zh,
            Language::En => self
                .en
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(&self.zh),
        }
    }
}

/// One outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Stable identifier, also the render key.
    pub id: String,
    /// Anchor text per language.
    pub label: LocalizedText,
    /// Destination URL.
    pub href: String,
    /// Short text shown beside the label, usually a domain.
    pub display: String,
}

impl LinkItem {
    /// Anchor text in `lang`.
    pub fn label(&self, lang: Language) -> &str {
        self.label.get(lang)
    }

    /// Trailing hint rendered after the label.
    pub fn display_suffix(&self) -> String {
        format!("{} \u{2197}", self.display)
    }
}

/// UI strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationItem {
    /// Site name, used as the page heading.
    pub name: String,
    /// Copyright holder shown in the footer.
    pub owner: String,
    /// Legal-notice (ICP registration) text.
    pub icp: String,
    /// Where the legal notice links to.
    pub icp_href: String,
    /// This language's own name, labelling its option in the switch.
    pub lang_name: String,
    /// Label of the light theme option.
    pub theme_light: String,
    /// Label of the dark theme option.
    pub theme_dark: String,
    /// Accessible name of the language switch.
    pub language_switch: String,
    /// Accessible name of the theme switch.
    pub theme_switch: String,
    /// Value for the document root `lang` attribute.
    pub html_lang: String,
}

/// UI strings keyed by language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTable {
    /// Chinese strings.
    pub zh: TranslationItem,
    /// English strings.
    pub en: TranslationItem,
}

impl TranslationTable {
    /// Strings for `lang`.
    pub fn get(&self, lang: Language) -> &TranslationItem {
        match lang {
            Language::Zh => &self.zh,
            Language::En => &self.en,
        }
    }
}

/// Everything the page displays that is not a preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    /// Links in display order.
    pub links: Vec<LinkItem>,
    /// UI strings.
    pub translations: TranslationTable,
}

impl SiteContent {
    /// Parses the two JSON collections.
    pub fn from_json(links: &str, translations: &str) -> Result<Self, ContentError> {
        let links = serde_json::from_str(links).map_err(ContentError::Links)?;
        let translations =
            serde_json::from_str(translations).map_err(ContentError::Translations)?;
        Ok(Self {
            links,
            translations,
        })
    }
}
