use link_hub_shared::{
    Environment, KeyValueStorage, Language, Preference, PreferenceStore, StorageError, Theme,
};
use web_sys::{window, Storage, StorageEvent};

use crate::config::DARK_SCHEME_QUERY;

/// `window.localStorage`, looked up on every call since access can start
/// throwing at any time (privacy mode, blocked cookies).
pub struct BrowserStorage;

fn local_storage() -> Result<Storage, StorageError> {
    let win = window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    match win.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("localStorage missing".to_string())),
        Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Reads `prefers-color-scheme` through `matchMedia`.
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn prefers_dark_color_scheme(&self) -> bool {
        window()
            .and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

/// Store backed by this tab's `localStorage`, or `None` outside a browser.
pub fn browser_store() -> Option<PreferenceStore> {
    window()?;
    Some(PreferenceStore::new(BrowserStorage, BrowserEnvironment))
}

/// Whether a native `storage` event can change a preference. `None` is
/// what `localStorage.clear()` reports.
pub fn concerns_preferences(key: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == Language::KEY || key == Theme::KEY,
    }
}

/// Hands a write made by another tab to the store's subscribers.
pub fn forward_storage_event(store: &PreferenceStore, event: &StorageEvent) {
    let key = event.key();
    if concerns_preferences(key.as_deref()) {
        log::debug!("storage event from another tab: {key:?}");
        store.notifier().deliver_external();
    }
}
