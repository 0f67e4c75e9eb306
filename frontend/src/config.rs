//! Configuration for the frontend application

/// Class put on the document root while the dark theme is active
pub const DARK_CLASS: &str = "dark";

/// Media query answering "does the system prefer a dark color scheme"
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Native event fired in other tabs after a `localStorage` write
pub const NATIVE_STORAGE_EVENT: &str = "storage";

/// Static content, embedded at build time
pub const LINKS_JSON: &str = include_str!("../../data/links.json");
pub const TRANSLATIONS_JSON: &str = include_str!("../../data/translations.json");

/// Console log level
/// - debug builds: every preference read/write is traced
/// - release builds: only warnings about storage and content problems
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
