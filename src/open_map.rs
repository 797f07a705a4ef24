//! The open map variant: an insertion-ordered string-keyed map whose
//! backing store is deliberately exposed.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{KeyedCollection, MapError};

mod capacity;

/// An insertion-ordered string-keyed map with an exposed backing store.
///
/// `OpenMap` is the "open" half of the pair: its entries live in an
/// [`IndexMap`] that callers may read — and write — directly through
/// [`entries`](OpenMap::entries) and [`entries_mut`](OpenMap::entries_mut),
/// bypassing the guard rules of the [`KeyedCollection`] contract. That
/// makes it the right variant when the collection doubles as a plain
/// record that other code fills in or inspects without going through the
/// contract. When no such access should exist, use
/// [`GuardedMap`](crate::GuardedMap) instead.
///
/// Presence is always a key-existence test on the backing store, so
/// entries holding `0`, `""`, or `false` are found like any other.
///
/// Iteration order is insertion order: [`set`](KeyedCollection::set) keeps
/// an updated entry in place and [`remove`](KeyedCollection::remove) keeps
/// the remaining entries in their original order.
///
/// # Examples
///
/// ```
/// use tandem_map::{KeyedCollection, OpenMap};
///
/// let mut map = OpenMap::new();
/// map.add("x", 0).unwrap();
///
/// // A stored zero is present; presence is key-existence, not the value.
/// assert!(map.contains_key("x"));
/// assert_eq!(map.get("x").unwrap(), &0);
///
/// // The backing store is open: writes through it bypass the guards.
/// map.entries_mut().insert("y".to_owned(), 7);
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenMap<E> {
    entries: IndexMap<String, E>,
}

impl<E> OpenMap<E> {
    /// Creates an empty `OpenMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{KeyedCollection, OpenMap};
    ///
    /// let map: OpenMap<i32> = OpenMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        OpenMap { entries: IndexMap::new() }
    }

    /// Returns the backing store, read-only.
    ///
    /// This is the open storage surface: the same entries the contract
    /// operations manage, as a plain insertion-ordered map.
    #[must_use]
    pub fn entries(&self) -> &IndexMap<String, E> {
        &self.entries
    }

    /// Returns the backing store, writable.
    ///
    /// Writes through this reference bypass the contract's guard rules:
    /// they can overwrite without a [`KeyConflict`](MapError::KeyConflict)
    /// and create without an `add`. The contract operations observe such
    /// writes like any other entry. That bypass is the point of the open
    /// variant; if it is unwanted, use [`GuardedMap`](crate::GuardedMap).
    #[must_use]
    pub fn entries_mut(&mut self) -> &mut IndexMap<String, E> {
        &mut self.entries
    }

    /// Gets an iterator over the entries of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{KeyedCollection, OpenMap};
    ///
    /// let mut map = OpenMap::new();
    /// map.add("a", 1).unwrap();
    /// map.add("b", 2).unwrap();
    ///
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some(("a", &1)));
    /// assert_eq!(iter.next(), Some(("b", &2)));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter { inner: self.entries.iter() }
    }

    /// Gets an iterator over the keys of the map, in insertion order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, E> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in insertion order.
    #[must_use]
    pub fn values(&self) -> Values<'_, E> {
        Values { inner: self.iter() }
    }
}

impl<E> KeyedCollection<E> for OpenMap<E> {
    fn add(&mut self, key: &str, value: E) -> Result<(), MapError> {
        if self.entries.contains_key(key) {
            return Err(MapError::KeyConflict { key: key.to_owned() });
        }
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<&E, MapError> {
        self.entries
            .get(key)
            .ok_or_else(|| MapError::KeyNotFound { key: key.to_owned() })
    }

    fn set(&mut self, key: &str, value: E) -> Result<E, MapError> {
        match self.entries.get_mut(key) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(MapError::KeyNotFound { key: key.to_owned() }),
        }
    }

    fn remove(&mut self, key: &str) -> Result<E, MapError> {
        // shift_remove keeps the remaining entries in insertion order.
        self.entries
            .shift_remove(key)
            .ok_or_else(|| MapError::KeyNotFound { key: key.to_owned() })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &E),
    {
        for (key, value) in &self.entries {
            visit(key, value);
        }
    }
}

impl<E> Default for OpenMap<E> {
    fn default() -> Self {
        OpenMap::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for OpenMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for OpenMap<E> {
    /// Key/value equality, ignoring insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.eq_collection(other)
    }
}

impl<E: Eq> Eq for OpenMap<E> {}

impl<E: PartialEq> PartialEq<crate::GuardedMap<E>> for OpenMap<E> {
    /// Cross-variant key/value equality, ignoring insertion order.
    fn eq(&self, other: &crate::GuardedMap<E>) -> bool {
        self.eq_collection(other)
    }
}

/// Duplicate keys resolve last-wins; a replaced entry keeps its original
/// position, matching [`set`](KeyedCollection::set).
impl<E> Extend<(String, E)> for OpenMap<E> {
    fn extend<I: IntoIterator<Item = (String, E)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.entries.insert(key, value);
        }
    }
}

impl<E> FromIterator<(String, E)> for OpenMap<E> {
    fn from_iter<I: IntoIterator<Item = (String, E)>>(iter: I) -> Self {
        let mut map = OpenMap::new();
        map.extend(iter);
        map
    }
}

impl<E> From<crate::PlainMap<E>> for OpenMap<E> {
    fn from(plain: crate::PlainMap<E>) -> Self {
        plain.into_iter().collect()
    }
}

impl<'a, E> IntoIterator for &'a OpenMap<E> {
    type Item = (&'a str, &'a E);
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<E> IntoIterator for OpenMap<E> {
    type Item = (String, E);
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        IntoIter { inner: self.entries.into_iter() }
    }
}

/// An iterator over the entries of an `OpenMap`.
///
/// This `struct` is created by the [`iter`] method on [`OpenMap`]. See its
/// documentation for more.
///
/// [`iter`]: OpenMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, E> {
    inner: indexmap::map::Iter<'a, String, E>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = (&'a str, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key.as_str(), value))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Iter<'_, E> {}

/// An owning iterator over the entries of an `OpenMap`.
///
/// This `struct` is created by the [`into_iter`] method on [`OpenMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<E> {
    inner: indexmap::map::IntoIter<String, E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = (String, E);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for IntoIter<E> {}

/// An iterator over the keys of an `OpenMap`.
///
/// This `struct` is created by the [`keys`] method on [`OpenMap`]. See its
/// documentation for more.
///
/// [`keys`]: OpenMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, E> {
    inner: Iter<'a, E>,
}

impl<'a, E> Iterator for Keys<'a, E> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Keys<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<E> ExactSizeIterator for Keys<'_, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Keys<'_, E> {}

/// An iterator over the values of an `OpenMap`.
///
/// This `struct` is created by the [`values`] method on [`OpenMap`]. See
/// its documentation for more.
///
/// [`values`]: OpenMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, E> {
    inner: Iter<'a, E>,
}

impl<'a, E> Iterator for Values<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Values<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<E> ExactSizeIterator for Values<'_, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Values<'_, E> {}
