use link_hub_shared::Theme;
use web_sys::{window, Element};

use crate::config::DARK_CLASS;

fn root() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Adds or removes the dark marker on `<html>`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = root() else {
        return;
    };
    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1(DARK_CLASS)
    } else {
        class_list.remove_1(DARK_CLASS)
    };
    if let Err(err) = result {
        log::warn!("failed to apply theme {theme}: {err:?}");
    }
}

/// Sets the `lang` attribute of `<html>`.
pub fn set_document_lang(lang: &str) {
    let Some(root) = root() else {
        return;
    };
    if let Err(err) = root.set_attribute("lang", lang) {
        log::warn!("failed to set document lang {lang}: {err:?}");
    }
}
