pub mod error_banner {
    pub const TITLE: &str = "Failed to load content";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod builtin {
    pub const NAME: &str = "Links";
    pub const OWNER: &str = "";
    pub const LANG_NAME: &str = "EN";
    pub const THEME_LIGHT: &str = "Light";
    pub const THEME_DARK: &str = "Dark";
    pub const LANGUAGE_SWITCH: &str = "Switch language";
    pub const THEME_SWITCH: &str = "Switch theme";
    pub const HTML_LANG: &str = "en";
}
