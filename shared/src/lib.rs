//! Core of the link hub: persisted preferences, change notification and the
//! static content model.
//!
//! Nothing in this crate touches the browser. The frontend plugs
//! `localStorage`, `matchMedia` and the native `storage` event into the
//! [`KeyValueStorage`] / [`Environment`] seams and into
//! [`Notifier::deliver_external`]; everything else (defaults, session
//! fallback, snapshot comparison) lives here and is tested natively.

pub mod content;
pub mod notifier;
pub mod preference;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use content::{
    ContentError, LinkItem, LocalizedText, SiteContent, TranslationItem, TranslationTable,
};
pub use notifier::{Channel, Listener, Notifier, Subscription};
pub use preference::{Language, ParsePreferenceError, Preference, Theme};
pub use snapshot::{initial_snapshot, ExternalStore, PreferenceSource, SnapshotBinding};
pub use storage::{
    Environment, KeyValueStorage, MemoryStorage, StaticEnvironment, StorageError,
};
pub use store::PreferenceStore;
