//! StrMap: the typed facade over [`ChainMap`]. This is the map most callers
//! use; it speaks the `get`/`set`/`remove` vocabulary and hides the engine's
//! insert-or-update plumbing.

use crate::chain_map::{ChainMap, Iter};
use crate::error::MapError;
use core::hash::BuildHasher;
use std::collections::hash_map::RandomState;

/// String-keyed map of `T` values, backed by one [`ChainMap`] per instance.
///
/// `set` has last-writer-wins overwrite semantics and `remove` is a no-op on
/// absent keys. The value passed to `set` is moved into the map before any
/// bucket is touched, so writing back a value previously read out of the same
/// map is always safe.
pub struct StrMap<T, S = RandomState> {
    inner: ChainMap<T, S>,
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<T> Default for StrMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> StrMap<T, S>
where
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: ChainMap::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bind `key` to `value`, overwriting any previous binding. Fails only
    /// on allocation failure, leaving the map unchanged.
    pub fn set(&mut self, key: &str, value: T) -> Result<(), MapError> {
        self.inner.insert(key, value).map(|_prev| ())
    }

    /// Borrow the value bound to `key`. The reference aliases the map's
    /// stored copy.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.inner.get(key)
    }

    /// Mutably borrow the value bound to `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Unbind `key`, returning the value it held. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.inner.remove(key)
    }

    /// Drop every binding, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Walk all bindings in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: with two keys and one of them overwritten, each key reads
    /// back its latest value.
    #[test]
    fn nums_scenario() {
        let mut nums: StrMap<i32> = StrMap::new();
        nums.set("num1", 10).unwrap();
        nums.set("num2", 20).unwrap();
        nums.set("num2", 30).unwrap();

        assert_eq!(nums.get("num1"), Some(&10));
        assert_eq!(nums.get("num2"), Some(&30));
        assert_eq!(nums.len(), 2);
    }

    /// Invariant: values with owned resources move into the map and back out
    /// through `remove`; drop order never double-frees.
    #[test]
    fn owned_values_move_in_and_out() {
        let mut m: StrMap<String> = StrMap::new();
        m.set("greet", "hello".to_string()).unwrap();
        m.set("greet", "goodbye".to_string()).unwrap();
        assert_eq!(m.get("greet").map(String::as_str), Some("goodbye"));
        let v = m.remove("greet").unwrap();
        assert_eq!(v, "goodbye");
        assert!(m.is_empty());
    }

    /// Invariant: a value read from the map can be written back under
    /// another key (the staging guarantee of the facade).
    #[test]
    fn set_with_value_read_from_same_map() {
        let mut m: StrMap<i32> = StrMap::new();
        m.set("src", 7).unwrap();
        let copied = *m.get("src").unwrap();
        m.set("dst", copied).unwrap();
        assert_eq!(m.get("src"), Some(&7));
        assert_eq!(m.get("dst"), Some(&7));
    }

    /// Invariant: `remove` on an absent key leaves all other bindings and
    /// the count unchanged.
    #[test]
    fn remove_absent_is_noop() {
        let mut m: StrMap<i32> = StrMap::new();
        m.set("keep", 1).unwrap();
        assert_eq!(m.remove("gone"), None);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("keep"), Some(&1));
    }
}
