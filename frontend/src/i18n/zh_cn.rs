pub mod error_banner {
    pub const TITLE: &str = "内容加载失败";
    pub const CLOSE_ARIA: &str = "关闭错误提示";
}

pub mod builtin {
    pub const NAME: &str = "链接";
    pub const OWNER: &str = "";
    pub const LANG_NAME: &str = "中文";
    pub const THEME_LIGHT: &str = "浅色";
    pub const THEME_DARK: &str = "深色";
    pub const LANGUAGE_SWITCH: &str = "切换语言";
    pub const THEME_SWITCH: &str = "切换主题";
    pub const HTML_LANG: &str = "zh-CN";
}
