use std::rc::Rc;

use link_hub_shared::SiteContent;
use yew::AttrValue;

use crate::{
    config::{LINKS_JSON, TRANSLATIONS_JSON},
    i18n,
};

/// Bundled content plus the reason it could not be parsed, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedContent {
    pub site: Rc<SiteContent>,
    pub error: Option<AttrValue>,
}

/// Parses the embedded JSON. On failure the link list is empty and the
/// built-in string table takes over.
pub fn load() -> LoadedContent {
    from_json(LINKS_JSON, TRANSLATIONS_JSON)
}

fn from_json(links: &str, translations: &str) -> LoadedContent {
    match SiteContent::from_json(links, translations) {
        Ok(site) => {
            log::debug!("loaded {} links", site.links.len());
            LoadedContent {
                site: Rc::new(site),
                error: None,
            }
        },
        Err(err) => {
            log::error!("bundled content is invalid: {err}");
            LoadedContent {
                site: Rc::new(SiteContent {
                    links: Vec::new(),
                    translations: i18n::builtin_table(),
                }),
                error: Some(AttrValue::from(err.to_string())),
            }
        },
    }
}
