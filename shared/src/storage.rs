//! Seams to the persistence layer and to the color-scheme probe.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

/// Why a key-value operation could not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists, or it is disabled or blocked.
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    /// The storage area exists but refused the write.
    #[error("storage rejected write of `{key}`: {reason}")]
    Rejected {
        /// Key being written.
        key: String,
        /// Message reported by the storage area.
        reason: String,
    },
}

/// A per-origin string key-value store, `localStorage`-shaped.
pub trait KeyValueStorage {
    /// Reads a key. `Ok(None)` means the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a key, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reports environment signals used to pick defaults.
pub trait Environment {
    /// Whether the environment asks for a dark color scheme.
    fn prefers_dark_color_scheme(&self) -> bool;
}

/// Environment with a fixed answer. Used in tests and wherever no real
/// probe exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    /// Answer returned by [`Environment::prefers_dark_color_scheme`].
    pub prefers_dark: bool,
}

impl Environment for StaticEnvironment {
    fn prefers_dark_color_scheme(&self) -> bool {
        self.prefers_dark
    }
}

/// In-process storage. Clones share the same map, so a set of clones
/// behaves like one storage origin.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    available: Rc<Cell<bool>>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    /// Empty, available storage.
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(BTreeMap::new())),
            available: Rc::new(Cell::new(true)),
        }
    }

    /// Storage that fails every operation, like a blocked `localStorage`.
    pub fn unavailable() -> Self {
        let storage = Self::new();
        storage.set_available(false);
        storage
    }

    /// Switches every clone between working and failing.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Writes a value regardless of availability, as other code sharing
    /// the origin would.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    /// Reads a value regardless of availability.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(StorageError::Unavailable("memory storage disabled".to_string()))
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.insert_raw(key, value);
        Ok(())
    }
}
