//! Preference store: typed reads and writes over a [`KeyValueStorage`].

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    notifier::Notifier,
    preference::Preference,
    storage::{Environment, KeyValueStorage},
};

struct Inner {
    storage: Box<dyn KeyValueStorage>,
    environment: Box<dyn Environment>,
    notifier: Notifier,
    // Values whose write failed; read back for the rest of the session.
    session: RefCell<HashMap<&'static str, &'static str>>,
}

/// Shared handle to the persisted preferences of one browsing context.
///
/// Clones point at the same store. Equality is identity, which lets the
/// handle travel through a UI context without forcing re-renders.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Rc<Inner>,
}

impl PartialEq for PreferenceStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("notifier", &self.inner.notifier)
            .field("session", &self.inner.session.borrow())
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Builds a store with its own notifier.
    pub fn new(
        storage: impl KeyValueStorage + 'static,
        environment: impl Environment + 'static,
    ) -> Self {
        Self::with_notifier(storage, environment, Notifier::new())
    }

    /// Builds a store that publishes through an existing notifier.
    pub fn with_notifier(
        storage: impl KeyValueStorage + 'static,
        environment: impl Environment + 'static,
        notifier: Notifier,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                storage: Box::new(storage),
                environment: Box::new(environment),
                notifier,
                session: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Notifier fired after every write; also the target for cross-context
    /// deliveries.
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// Current value of `P`.
    ///
    /// Resolution order: a value kept for this session after a failed
    /// write, then a valid stored value, then the environment default.
    /// Never fails and never writes.
    pub fn get<P: Preference>(&self) -> P {
        if let Some(value) = self.inner.session.borrow().get(P::KEY).and_then(|raw| P::parse(raw))
        {
            return value;
        }

        match self.inner.storage.get_item(P::KEY) {
            Ok(Some(raw)) => match P::parse(&raw) {
                Some(value) => return value,
                None => tracing::debug!(key = P::KEY, %raw, "ignoring unsupported stored value"),
            },
            Ok(None) => {},
            Err(err) => tracing::debug!(key = P::KEY, %err, "preference read failed"),
        }

        P::environment_default(self.inner.environment.as_ref())
    }

    /// Persists `value` and notifies subscribers.
    ///
    /// A failed write is logged and the value is remembered for this
    /// session instead; subscribers are notified either way.
    pub fn set<P: Preference>(&self, value: P) {
        match self.inner.storage.set_item(P::KEY, value.as_str()) {
            Ok(()) => {
                self.inner.session.borrow_mut().remove(P::KEY);
                tracing::debug!(key = P::KEY, value = value.as_str(), "preference saved");
            },
            Err(err) => {
                tracing::warn!(
                    key = P::KEY,
                    value = value.as_str(),
                    %err,
                    "preference not persisted, keeping it for this session"
                );
                self.inner.session.borrow_mut().insert(P::KEY, value.as_str());
            },
        }
        self.inner.notifier.publish();
    }

    /// Applies a user selection. Re-selecting the current value is a no-op
    /// and returns `false`.
    pub fn select<P: Preference>(&self, value: P) -> bool {
        if self.get::<P>() == value {
            return false;
        }
        self.set(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        preference::{Language, Theme},
        storage::{MemoryStorage, StaticEnvironment, StorageError},
    };

    fn store_with(storage: &MemoryStorage, prefers_dark: bool) -> PreferenceStore {
        PreferenceStore::new(storage.clone(), StaticEnvironment { prefers_dark })
    }

    #[test]
    fn set_then_get_returns_the_value() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage, false);
        for &lang in Language::ALL {
            store.set(lang);
            assert_eq!(store.get::<Language>(), lang);
        }
        for &theme in Theme::ALL {
            store.set(theme);
            assert_eq!(store.get::<Theme>(), theme);
        }
        assert_eq!(storage.raw("theme").as_deref(), Some("dark"));
        assert_eq!(storage.raw("language").as_deref(), Some("en"));
    }

    #[test]
    fn missing_values_use_environment_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(store_with(&storage, false).get::<Language>(), Language::Zh);
        assert_eq!(store_with(&storage, false).get::<Theme>(), Theme::Light);
        assert_eq!(store_with(&storage, true).get::<Theme>(), Theme::Dark);
    }

    #[test]
    fn invalid_stored_values_resolve_to_defaults() {
        let storage = MemoryStorage::new();
        storage.insert_raw("language", "fr");
        storage.insert_raw("theme", "Dark");
        let store = store_with(&storage, false);
        assert_eq!(store.get::<Language>(), Language::Zh);
        assert_eq!(store.get::<Theme>(), Theme::Light);
    }

    #[test]
    fn stored_theme_beats_color_scheme() {
        let storage = MemoryStorage::new();
        storage.insert_raw("theme", "light");
        assert_eq!(store_with(&storage, true).get::<Theme>(), Theme::Light);
    }

    #[test]
    fn failed_write_is_kept_for_the_session() {
        let storage = MemoryStorage::unavailable();
        let store = store_with(&storage, false);
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            store.notifier().subscribe(move || hits.set(hits.get() + 1))
        };

        store.set(Theme::Dark);

        assert_eq!(store.get::<Theme>(), Theme::Dark);
        assert_eq!(storage.raw("theme"), None);
        assert_eq!(hits.get(), 1);

        // A fresh context on the same blocked origin sees only defaults.
        assert_eq!(store_with(&storage, false).get::<Theme>(), Theme::Light);
    }

    /// Reads work but every write is refused, like a full `localStorage`.
    struct QuotaExceeded(MemoryStorage);

    impl KeyValueStorage for QuotaExceeded {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    #[test]
    fn rejected_write_wins_over_readable_stored_value() {
        let storage = MemoryStorage::new();
        storage.insert_raw("theme", "light");
        let store =
            PreferenceStore::new(QuotaExceeded(storage.clone()), StaticEnvironment::default());
        let delivered = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let delivered = delivered.clone();
            let reader = store.clone();
            store
                .notifier()
                .subscribe(move || delivered.borrow_mut().push(reader.get::<Theme>()))
        };

        assert!(store.select(Theme::Dark));

        assert_eq!(store.get::<Theme>(), Theme::Dark);
        assert_eq!(*delivered.borrow(), vec![Theme::Dark]);
        assert_eq!(storage.raw("theme").as_deref(), Some("light"));
        // The picked value is now current, so clicking it again does nothing.
        assert!(!store.select(Theme::Dark));
        assert_eq!(delivered.borrow().len(), 1);
    }

    #[test]
    fn successful_write_clears_session_value() {
        let storage = MemoryStorage::unavailable();
        let store = store_with(&storage, false);
        store.set(Language::En);
        storage.set_available(true);
        store.set(Language::Zh);
        assert_eq!(store.get::<Language>(), Language::Zh);

        storage.insert_raw("language", "garbage");
        assert_eq!(store.get::<Language>(), Language::Zh);
    }

    #[test]
    fn select_is_idempotent() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage, false);
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            store.notifier().subscribe(move || hits.set(hits.get() + 1))
        };

        assert!(!store.select(Language::Zh));
        assert_eq!(hits.get(), 0);
        assert_eq!(storage.raw("language"), None);

        assert!(store.select(Language::En));
        assert!(!store.select(Language::En));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn equality_is_identity() {
        let storage = MemoryStorage::new();
        let a = store_with(&storage, false);
        let b = store_with(&storage, false);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
