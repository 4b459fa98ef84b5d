//! The attribute store: keyed slots with locking and ambiguity detection.

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, trace};

use crate::config::BagConfig;
use crate::error::{Error, Result};
use crate::normalizer::KeyMode;

/// A stored value plus the spelling that created it.
#[derive(Debug, Clone, PartialEq)]
struct Slot<V> {
    original: String,
    value: V,
    seq: u64,
}

/// Key/value storage keyed by (optionally normalized) attribute names.
///
/// Each slot remembers the original spelling of the key that created it.
/// With normalization on, writing the same slot through a different
/// spelling is rejected as [`Error::Ambiguous`] rather than silently merging
/// `fooBar` and `foo_bar` into one value.
///
/// Keys can be locked independently of whether they hold a value; a locked
/// key rejects writes with [`Error::Locked`] until unlocked.
///
/// ```
/// use attrbag::{AttributeStore, BagConfig};
///
/// let mut store = AttributeStore::with_config(&BagConfig::normalized());
/// store.set("fooBar", 1).unwrap();
/// assert_eq!(store.find("foo_bar"), Some(&1));
/// assert!(store.set("foo_bar", 2).unwrap_err().is_ambiguous());
/// ```
#[derive(Debug, Clone)]
pub struct AttributeStore<V> {
    slots: HashMap<String, Slot<V>>,
    locked: HashSet<String>,
    mode: KeyMode,
    strict: bool,
    next_seq: u64,
}

/// Attribute store holding arbitrary JSON-shaped values.
pub type DynamicAttributes = AttributeStore<serde_json::Value>;

impl<V> Default for AttributeStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AttributeStore<V> {
    /// An empty, strict store with verbatim keys.
    pub fn new() -> Self {
        Self::with_config(&BagConfig::default())
    }

    pub fn with_config(config: &BagConfig) -> Self {
        Self {
            slots: HashMap::new(),
            locked: HashSet::new(),
            mode: config.key_mode(),
            strict: config.strict,
            next_seq: 0,
        }
    }

    pub fn with_key_mode(mut self, mode: KeyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn key_mode(&self) -> KeyMode {
        self.mode
    }

    /// Whether [`get`](Self::get) fails on a missing key.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// - [`Error::Locked`] if the key is locked.
    /// - [`Error::Ambiguous`] if normalization is on and the slot was created
    ///   through a different spelling of the same key.
    ///
    /// The stored value is left untouched on error.
    pub fn set(&mut self, key: &str, value: V) -> Result<&mut Self> {
        let normalized = self.mode.resolve(key).into_owned();

        if self.locked.contains(&normalized) {
            debug!(key, normalized = %normalized, "rejected write to locked attribute");
            return Err(Error::Locked { key: normalized });
        }

        match self.slots.get_mut(&normalized) {
            Some(slot) => {
                if self.mode.is_normalized() && slot.original != key {
                    debug!(
                        key,
                        existing = %slot.original,
                        "rejected write through ambiguous attribute key"
                    );
                    return Err(Error::Ambiguous {
                        key: normalized,
                        existing: slot.original.clone(),
                        attempted: key.to_string(),
                    });
                }
                slot.value = value;
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.slots.insert(
                    normalized,
                    Slot {
                        original: key.to_string(),
                        value,
                        seq,
                    },
                );
            }
        }

        trace!(key, "attribute set");
        Ok(self)
    }

    pub fn has(&self, key: &str) -> bool {
        self.slot(key).is_some()
    }

    /// Read the value stored under `key`.
    ///
    /// A miss is [`Error::NotFound`] in strict mode and `Ok(None)` otherwise.
    /// Use [`find`](Self::find) or [`get_or`](Self::get_or) when a miss is
    /// expected.
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        match self.find(key) {
            Some(value) => Ok(Some(value)),
            None if self.strict => Err(Error::NotFound {
                key: key.to_string(),
            }),
            None => Ok(None),
        }
    }

    /// Read the value stored under `key`, never failing.
    pub fn find(&self, key: &str) -> Option<&V> {
        self.slot(key).map(|slot| &slot.value)
    }

    /// Read the value stored under `key`, falling back to `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.find(key).unwrap_or(default)
    }

    /// Remove the value under `key` along with its spelling and lock.
    ///
    /// Absent keys are left alone, including any lock placed on them ahead
    /// of time.
    pub fn unset(&mut self, key: &str) -> &mut Self {
        let normalized = self.mode.resolve(key);
        if self.slots.remove(&*normalized).is_some() {
            self.locked.remove(&*normalized);
            trace!(key, "attribute unset");
        }
        self
    }

    /// Lock `key` against writes. The key does not need to exist yet.
    pub fn lock(&mut self, key: &str) -> &mut Self {
        let normalized = self.mode.resolve(key).into_owned();
        trace!(key, "attribute locked");
        self.locked.insert(normalized);
        self
    }

    pub fn unlock(&mut self, key: &str) -> &mut Self {
        let normalized = self.mode.resolve(key);
        if self.locked.remove(&*normalized) {
            trace!(key, "attribute unlocked");
        }
        self
    }

    pub fn is_locked(&self, key: &str) -> bool {
        self.locked.contains(&*self.mode.resolve(key))
    }

    /// All attributes as `(original spelling, value)` in insertion order.
    pub fn list(&self) -> Vec<(&str, &V)> {
        let mut slots: Vec<&Slot<V>> = self.slots.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        slots
            .into_iter()
            .map(|slot| (slot.original.as_str(), &slot.value))
            .collect()
    }

    /// Same order as [`list`](Self::list), which it is built on: the
    /// entries are collected and sorted up front, so this allocates.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.list().into_iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every value and every lock.
    pub fn clear(&mut self) -> &mut Self {
        self.slots.clear();
        self.locked.clear();
        self
    }

    fn slot(&self, key: &str) -> Option<&Slot<V>> {
        self.slots.get(&*self.mode.resolve(key))
    }
}

/// Serializes as a map from original spelling to value, in insertion order.
impl<V: Serialize> Serialize for AttributeStore<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let list = self.list();
        let mut map = serializer.serialize_map(Some(list.len()))?;
        for (key, value) in list {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use serde_json::Value;

    pub struct AttributeFixture {
        pub store: DynamicAttributes,
    }

    impl Default for AttributeFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AttributeFixture {
        pub fn new() -> Self {
            Self {
                store: DynamicAttributes::new(),
            }
        }

        pub fn normalized() -> Self {
            Self {
                store: DynamicAttributes::with_config(&BagConfig::normalized()),
            }
        }

        pub fn lenient(mut self) -> Self {
            self.store = self.store.with_strict(false);
            self
        }

        pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
            self.store.set(key, value.into()).unwrap();
            self
        }

        pub fn with_locked(mut self, key: &str) -> Self {
            self.store.lock(key);
            self
        }
    }
}
