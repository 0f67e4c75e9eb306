//! Strings that are not part of the bundled translation table.

pub mod en;
pub mod zh_cn;

use link_hub_shared::{Language, TranslationItem, TranslationTable};

pub struct ErrorBannerText {
    pub title: &'static str,
    pub close_aria: &'static str,
}

pub fn error_banner(lang: Language) -> ErrorBannerText {
    match lang {
        Language::Zh => ErrorBannerText {
            title: zh_cn::error_banner::TITLE,
            close_aria: zh_cn::error_banner::CLOSE_ARIA,
        },
        Language::En => ErrorBannerText {
            title: en::error_banner::TITLE,
            close_aria: en::error_banner::CLOSE_ARIA,
        },
    }
}

macro_rules! builtin_item {
    ($lang:ident) => {
        TranslationItem {
            name: $lang::builtin::NAME.to_string(),
            owner: $lang::builtin::OWNER.to_string(),
            icp: String::new(),
            icp_href: String::new(),
            lang_name: $lang::builtin::LANG_NAME.to_string(),
            theme_light: $lang::builtin::THEME_LIGHT.to_string(),
            theme_dark: $lang::builtin::THEME_DARK.to_string(),
            language_switch: $lang::builtin::LANGUAGE_SWITCH.to_string(),
            theme_switch: $lang::builtin::THEME_SWITCH.to_string(),
            html_lang: $lang::builtin::HTML_LANG.to_string(),
        }
    };
}

/// Minimal table used when the bundled one cannot be parsed, so the header
/// and both switches keep working.
pub fn builtin_table() -> TranslationTable {
    TranslationTable {
        zh: builtin_item!(zh_cn),
        en: builtin_item!(en),
    }
}

/// Footer copyright line.
pub fn copyright(year: u32, owner: &str) -> String {
    if owner.trim().is_empty() {
        format!("© {year}")
    } else {
        format!("© {year} {owner}")
    }
}
