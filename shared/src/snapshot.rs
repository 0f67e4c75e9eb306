//! Binding between an observable store and a UI that renders snapshots.
//!
//! A UI hook owns a [`SnapshotBinding`]: it renders the initial snapshot,
//! then [`SnapshotBinding::connect`]s and receives each new value exactly
//! when it differs from the last one delivered.

use std::{cell::RefCell, marker::PhantomData, rc::Rc};

use crate::{
    notifier::{Listener, Subscription},
    preference::Preference,
    store::PreferenceStore,
};

/// A store that can be observed through subscribe + snapshot.
pub trait ExternalStore: Clone + 'static {
    /// Value rendered by the UI.
    type Snapshot: Clone + PartialEq + 'static;

    /// Registers a listener fired after any change.
    fn subscribe(&self, listener: Listener) -> Subscription;

    /// Reads the current value. Must be cheap and side-effect-free.
    fn snapshot(&self) -> Self::Snapshot;
}

/// One preference of a [`PreferenceStore`] viewed as an [`ExternalStore`].
pub struct PreferenceSource<P> {
    store: PreferenceStore,
    _preference: PhantomData<fn() -> P>,
}

impl<P> Clone for PreferenceSource<P> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _preference: PhantomData,
        }
    }
}

impl<P: Preference> PreferenceSource<P> {
    /// Observes `P` on `store`.
    pub fn new(store: PreferenceStore) -> Self {
        Self {
            store,
            _preference: PhantomData,
        }
    }
}

impl<P: Preference> ExternalStore for PreferenceSource<P> {
    type Snapshot = P;

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.store.notifier().subscribe_rc(listener)
    }

    fn snapshot(&self) -> P {
        self.store.get::<P>()
    }
}

/// Snapshot for the first render. Reads the store synchronously when one
/// exists so the first paint is already correct; otherwise
/// [`Preference::FALLBACK`].
pub fn initial_snapshot<P: Preference>(store: Option<&PreferenceStore>) -> P {
    store.map_or(P::FALLBACK, PreferenceStore::get::<P>)
}

/// Re-reads a store after every notification and forwards changed values.
pub struct SnapshotBinding<S: ExternalStore> {
    source: S,
    last: Rc<RefCell<S::Snapshot>>,
}

impl<S: ExternalStore> SnapshotBinding<S> {
    /// Binds `source`; `rendered` is the value the UI currently shows.
    pub fn new(source: S, rendered: S::Snapshot) -> Self {
        Self {
            source,
            last: Rc::new(RefCell::new(rendered)),
        }
    }

    /// Last value delivered (or the rendered value before any delivery).
    pub fn current(&self) -> S::Snapshot {
        self.last.borrow().clone()
    }

    /// Subscribes and calls `on_change` with each value that differs from
    /// the previous one. Checks once immediately, catching a change made
    /// between render and subscription.
    pub fn connect(&self, on_change: impl Fn(S::Snapshot) + 'static) -> Subscription {
        let check: Listener = {
            let source = self.source.clone();
            let last = self.last.clone();
            Rc::new(move || {
                let next = source.snapshot();
                let changed = {
                    let mut last = last.borrow_mut();
                    if *last == next {
                        false
                    } else {
                        *last = next.clone();
                        true
                    }
                };
                if changed {
                    on_change(next);
                }
            })
        };
        let subscription = self.source.subscribe(check.clone());
        check();
        subscription
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        preference::{Language, Theme},
        storage::{MemoryStorage, StaticEnvironment},
    };

    fn store(storage: &MemoryStorage) -> PreferenceStore {
        PreferenceStore::new(storage.clone(), StaticEnvironment::default())
    }

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn fallback_only_without_a_store() {
        let storage = MemoryStorage::new();
        storage.insert_raw("theme", "dark");
        storage.insert_raw("language", "en");
        let store = store(&storage);

        assert_eq!(initial_snapshot::<Theme>(None), Theme::Light);
        assert_eq!(initial_snapshot::<Language>(None), Language::Zh);
        assert_eq!(initial_snapshot::<Theme>(Some(&store)), Theme::Dark);
        assert_eq!(initial_snapshot::<Language>(Some(&store)), Language::En);
    }

    #[test]
    fn delivers_only_changed_values() {
        let storage = MemoryStorage::new();
        let store = store(&storage);
        let source = PreferenceSource::<Theme>::new(store.clone());
        let binding = SnapshotBinding::new(source, Theme::Light);
        let (seen, sink) = recorder::<Theme>();
        let _sub = binding.connect(sink);

        store.set(Theme::Dark);
        store.notifier().publish();
        store.set(Language::En);
        store.set(Theme::Light);

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
        assert_eq!(binding.current(), Theme::Light);
    }

    #[test]
    fn catches_change_between_render_and_connect() {
        let storage = MemoryStorage::new();
        let store = store(&storage);
        let rendered = initial_snapshot::<Language>(Some(&store));
        store.set(Language::En);

        let binding = SnapshotBinding::new(PreferenceSource::<Language>::new(store), rendered);
        let (seen, sink) = recorder::<Language>();
        let _sub = binding.connect(sink);

        assert_eq!(*seen.borrow(), vec![Language::En]);
    }

    #[test]
    fn never_stale_after_external_write() {
        let storage = MemoryStorage::new();
        let store = store(&storage);
        let source = PreferenceSource::<Theme>::new(store.clone());
        let binding = SnapshotBinding::new(source, Theme::Light);
        let (seen, sink) = recorder::<Theme>();
        let _sub = binding.connect(sink);

        storage.insert_raw("theme", "dark");
        store.notifier().deliver_external();

        assert_eq!(binding.current(), Theme::Dark);
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let storage = MemoryStorage::new();
        let store = store(&storage);
        let source = PreferenceSource::<Theme>::new(store.clone());
        let binding = SnapshotBinding::new(source, Theme::Light);
        let (seen, sink) = recorder::<Theme>();
        drop(binding.connect(sink));

        store.set(Theme::Dark);

        assert!(seen.borrow().is_empty());
        assert_eq!(store.notifier().subscriber_count(), 0);
    }
}
