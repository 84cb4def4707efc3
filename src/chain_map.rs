//! ChainMap: the structural layer. A string-keyed separate-chaining hash map
//! that owns its bucket array and entry storage.

use crate::error::MapError;
use core::hash::BuildHasher;
use core::mem;
use std::collections::hash_map::RandomState;

/// Bucket count used for the first grow out of the zero-bucket state.
const MIN_BUCKETS: usize = 4;

#[derive(Debug)]
struct Entry<V> {
    key: Box<str>,
    value: V,
    hash: u64,
}

/// A chain is one bucket's worth of entries. Order within a chain is
/// unspecified and changes across removals and rehashes.
type Chain<V> = Vec<Entry<V>>;

/// String-keyed hash map with separate chaining and power-of-two bucket
/// arrays. Generic over the stored value type `V` and the hash builder `S`.
///
/// A fresh map owns no buckets at all (`nbuckets() == 0`); the first insert
/// allocates the bucket array. Each entry owns a copy of its key, made once
/// on first insert and never recopied on overwrite. Every entry also stores
/// its full 64-bit hash, so rehashing relinks entries without hashing the
/// keys again.
pub struct ChainMap<V, S = RandomState> {
    hasher: S,
    buckets: Box<[Chain<V>]>,
    len: usize,
}

impl<V> ChainMap<V> {
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<V> Default for ChainMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> ChainMap<V, S>
where
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            buckets: Box::default(),
            len: 0,
        }
    }

    fn make_hash(&self, key: &str) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated buckets: zero until the first insert, a power of
    /// two afterwards. Exposed for inspection; not part of any contract.
    pub fn nbuckets(&self) -> usize {
        self.buckets.len()
    }

    /// Locate the chain and position of `key`, if present.
    fn find_entry(&self, hash: u64, key: &str) -> Option<(usize, usize)> {
        if self.buckets.is_empty() {
            return None;
        }
        let b = (hash as usize) & (self.buckets.len() - 1);
        self.buckets[b]
            .iter()
            .position(|e| e.hash == hash && &*e.key == key)
            .map(|i| (b, i))
    }

    /// Borrow the stored value for `key`. The reference aliases the entry's
    /// storage, not a copy.
    pub fn get(&self, key: &str) -> Option<&V> {
        let hash = self.make_hash(key);
        let (b, i) = self.find_entry(hash, key)?;
        Some(&self.buckets[b][i].value)
    }

    /// Mutably borrow the stored value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let hash = self.make_hash(key);
        let (b, i) = self.find_entry(hash, key)?;
        Some(&mut self.buckets[b][i].value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let hash = self.make_hash(key);
        self.find_entry(hash, key).is_some()
    }

    /// Insert `value` under `key`, returning the previous value when the key
    /// was already present. An overwrite never grows the bucket array and
    /// never recopies the key. A fresh insert grows and rehashes first when
    /// the load factor would be exceeded; on allocation failure the map is
    /// left unchanged.
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>, MapError> {
        let hash = self.make_hash(key);
        if let Some((b, i)) = self.find_entry(hash, key) {
            return Ok(Some(mem::replace(&mut self.buckets[b][i].value, value)));
        }
        if self.needs_grow() {
            self.grow()?;
        }
        let b = (hash as usize) & (self.buckets.len() - 1);
        let chain = &mut self.buckets[b];
        chain.try_reserve(1).map_err(MapError::from)?;
        chain.push(Entry {
            key: key.into(),
            value,
            hash,
        });
        self.len += 1;
        Ok(None)
    }

    /// Unlink the entry for `key` and return its value; `None` (and no state
    /// change) when the key is absent. The bucket array never shrinks.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let hash = self.make_hash(key);
        let (b, i) = self.find_entry(hash, key)?;
        let entry = self.buckets[b].swap_remove(i);
        self.len -= 1;
        Some(entry.value)
    }

    /// Drop every entry but keep the bucket array allocated.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Walk all entries in unspecified order.
    pub fn iter(&self) -> Iter<'_, V> {
        let mut chains = self.buckets.iter();
        let entries = chains.next().map(|c| c.iter()).unwrap_or_default();
        Iter { chains, entries }
    }

    /// True when linking one more entry would exceed the grow threshold of
    /// `nbuckets - nbuckets / 4` live entries (or when no buckets exist yet).
    fn needs_grow(&self) -> bool {
        let n = self.buckets.len();
        n == 0 || self.len + 1 > n - n / 4
    }

    /// Double the bucket array (or allocate the first one) and relink every
    /// entry by its stored hash. `len` is untouched. Every allocation (the
    /// array, each destination chain) is reserved before any entry moves, so
    /// on allocation failure the old array stays fully in place.
    fn grow(&mut self) -> Result<(), MapError> {
        let new_n = match self.buckets.len() {
            0 => MIN_BUCKETS,
            n => n * 2,
        };
        let mut fresh: Vec<Chain<V>> = Vec::new();
        fresh.try_reserve_exact(new_n).map_err(MapError::from)?;
        fresh.resize_with(new_n, Vec::new);

        // Size every destination chain from the stored hashes up front;
        // the relink loop below must not allocate.
        let mut counts: Vec<usize> = Vec::new();
        counts.try_reserve_exact(new_n).map_err(MapError::from)?;
        counts.resize(new_n, 0);
        for chain in self.buckets.iter() {
            for entry in chain {
                counts[(entry.hash as usize) & (new_n - 1)] += 1;
            }
        }
        for (chain, &count) in fresh.iter_mut().zip(&counts) {
            chain.try_reserve_exact(count).map_err(MapError::from)?;
        }

        let old = mem::replace(&mut self.buckets, fresh.into_boxed_slice());
        for chain in old.into_vec() {
            for entry in chain {
                let b = (entry.hash as usize) & (new_n - 1);
                self.buckets[b].push(entry);
            }
        }
        Ok(())
    }
}

/// Iterator over entries in `ChainMap`, bucket by bucket.
pub struct Iter<'a, V> {
    chains: core::slice::Iter<'a, Chain<V>>,
    entries: core::slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.entries.next() {
                return Some((&e.key, &e.value));
            }
            self.entries = self.chains.next()?.iter();
        }
    }
}
