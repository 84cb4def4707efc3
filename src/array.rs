//! Array: a growable contiguous buffer with amortized doubling, range
//! splicing, and fallible growth. Not hash-related; it is the lower-layer
//! companion to the maps.

use crate::error::MapError;
use core::cmp::Ordering;
use core::ops::{Deref, DerefMut};

/// Growable array of `T` with the usual amortized-doubling cost model.
///
/// Reads go through `Deref<Target = [T]>`, so slice methods (`first`, `last`,
/// `len`, indexing, iteration) apply directly. Every operation that may
/// allocate is fallible and leaves the array unchanged on failure. Operations
/// taking indices or ranges panic when out of bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Array<T> {
    data: Vec<T>,
}

impl<T> Array<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Append `value`, growing the buffer if needed.
    pub fn push(&mut self, value: T) -> Result<(), MapError> {
        self.data.try_reserve(1).map_err(MapError::from)?;
        self.data.push(value);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Insert `value` at `idx`, shifting the tail right. `idx` may equal
    /// `len` (append). Panics when `idx > len`.
    pub fn insert(&mut self, idx: usize, value: T) -> Result<(), MapError> {
        assert!(idx <= self.data.len(), "insert index out of bounds");
        self.data.try_reserve(1).map_err(MapError::from)?;
        self.data.insert(idx, value);
        Ok(())
    }

    /// Remove `count` elements starting at `start`, preserving the order of
    /// the survivors. O(n). Panics when the range exceeds `len`.
    pub fn splice(&mut self, start: usize, count: usize) {
        assert!(
            start + count <= self.data.len(),
            "splice range out of bounds"
        );
        self.data.drain(start..start + count);
    }

    /// Remove `count` elements starting at `start` by moving tail elements
    /// into the gap. O(count), but survivor order is not preserved. Panics
    /// when the range exceeds `len`.
    pub fn swapsplice(&mut self, start: usize, count: usize) {
        let len = self.data.len();
        assert!(start + count <= len, "swapsplice range out of bounds");
        for i in 0..count {
            self.data.swap(start + i, len - count + i);
        }
        self.data.truncate(len - count);
    }

    /// Index of the first element equal to `value`, or `None`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data.iter().position(|x| x == value)
    }

    /// Remove the first element equal to `value`, preserving order of the
    /// rest. Returns whether anything was removed.
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(value) {
            Some(idx) => {
                self.splice(idx, 1);
                true
            }
            None => false,
        }
    }

    /// Ensure capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) -> Result<(), MapError> {
        self.data.try_reserve(additional).map_err(MapError::from)
    }

    /// Release unused capacity back down to the current length.
    pub fn compact(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Append every element of `values`. All-or-nothing: on allocation
    /// failure nothing is appended.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), MapError>
    where
        T: Clone,
    {
        self.data.try_reserve(values.len()).map_err(MapError::from)?;
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// In-place sort with a caller-supplied ordering.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.data.sort_by(cmp);
    }

    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Shorten to `len` elements; longer requests are a no-op.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: Vec::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
