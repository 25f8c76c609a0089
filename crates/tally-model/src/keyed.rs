//! Ordered collection with stable, collection-assigned keys.
//!
//! A [`KeyedList`] is an arena-style sequence: every element carries an opaque
//! [`Key`] minted by the collection itself, used for addressing that stays
//! valid across edits and reordering, unlike a positional index.
//!
//! # Design Invariants
//!
//! 1. **Key stability**: a key obtained from `push`/`cons` addresses the same
//!    logical element for as long as it is in the collection, regardless of
//!    what happens to its neighbors.
//! 2. **No reuse**: keys are never reissued, even after removal. The
//!    generator is scoped to the collection instance and only counts up.
//! 3. **Idempotent removal**: removing an absent key is a no-op, as is
//!    updating one. The UI may hold stale keys; they must never crash us.
//! 4. **Order**: `push` appends, `cons` prepends, everything else preserves
//!    insertion order.
//!
//! Serialization writes values only, in order. Decoding assigns fresh keys by
//! position — keys are collection-private identity and are never persisted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque, collection-scoped stable identifier.
///
/// Distinct from both array position and any domain id the element carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(u64);

/// An ordered sequence of values with stable keys.
#[derive(Debug, Clone)]
pub struct KeyedList<T> {
    next: u64,
    items: Vec<(Key, T)>,
}

impl<T> KeyedList<T> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: 0,
            items: Vec::new(),
        }
    }

    /// Build from plain values, assigning fresh keys by position.
    #[must_use]
    pub fn from_values(values: Vec<T>) -> Self {
        let mut list = Self::new();
        for value in values {
            list.push(value);
        }
        list
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a value, returning its freshly minted key.
    pub fn push(&mut self, value: T) -> Key {
        let key = self.mint();
        self.items.push((key, value));
        key
    }

    /// Prepend a value, returning its freshly minted key.
    pub fn cons(&mut self, value: T) -> Key {
        let key = self.mint();
        self.items.insert(0, (key, value));
        key
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: Key) -> Option<&T> {
        self.items
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Replace the addressed value with `f(value)`; no-op when absent.
    pub fn update(&mut self, key: Key, f: impl FnOnce(T) -> T) {
        if let Some(pos) = self.items.iter().position(|(k, _)| *k == key) {
            let (k, value) = self.items.remove(pos);
            self.items.insert(pos, (k, f(value)));
        }
    }

    /// Remove by key; idempotent when the key is absent.
    pub fn remove(&mut self, key: Key) {
        self.items.retain(|(k, _)| *k != key);
    }

    /// Iterate `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &T)> {
        self.items.iter().map(|(k, v)| (*k, v))
    }

    /// Iterate values in order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|(_, v)| v)
    }

    fn mint(&mut self) -> Key {
        let key = Key(self.next);
        self.next += 1;
        key
    }
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality over values in order; keys are collection-private identity and do
/// not participate (two lists that decode from the same wire form are equal).
impl<T: PartialEq> PartialEq for KeyedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for KeyedList<T> {}

impl<T: Serialize> Serialize for KeyedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for KeyedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_values(Vec::<T>::deserialize(deserializer)?))
    }
}
