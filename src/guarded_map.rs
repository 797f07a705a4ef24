//! The guarded map variant: an insertion-ordered string-keyed map whose
//! backing sequence is private and only reachable through the contract.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Entry, KeyedCollection, MapError};

mod capacity;

/// An insertion-ordered string-keyed map with a private backing sequence.
///
/// `GuardedMap` is the "guarded" half of the pair: entries live in an
/// internal ordered sequence of [`Entry`] records that is never exposed.
/// The only way to observe or mutate an entry is through the
/// [`KeyedCollection`] operations, so the guard rules — `add` never
/// overwrites, `set` never creates — cannot be bypassed. When the
/// collection should also be writable as a plain record, use
/// [`OpenMap`](crate::OpenMap) instead.
///
/// Every presence check is an explicit key-equality search over the
/// sequence, never a test on the stored value, so entries holding `0`,
/// `""`, or `false` are found like any other.
///
/// Iteration order is insertion order: [`set`](KeyedCollection::set)
/// replaces a value in place and [`remove`](KeyedCollection::remove) keeps
/// the remaining entries in their original order.
///
/// Lookups walk the sequence, so they are O(len); the straightforward
/// backing store is the point, not throughput.
///
/// # Examples
///
/// ```
/// use tandem_map::{GuardedMap, KeyedCollection};
///
/// let mut map = GuardedMap::new();
/// map.add("a", 1).unwrap();
/// map.add("b", 2).unwrap();
///
/// assert_eq!(map.keys_to_vec(), ["a", "b"]); // insertion order
/// assert!(map.add("a", 3).unwrap_err().is_conflict());
/// assert_eq!(map.get("a").unwrap(), &1); // failed add changed nothing
/// ```
#[derive(Clone)]
pub struct GuardedMap<E> {
    entries: Vec<Entry<E>>,
}

impl<E> GuardedMap<E> {
    /// Creates an empty `GuardedMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{GuardedMap, KeyedCollection};
    ///
    /// let map: GuardedMap<i32> = GuardedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        GuardedMap { entries: Vec::new() }
    }

    /// Gets an iterator over the entries of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{GuardedMap, KeyedCollection};
    ///
    /// let mut map = GuardedMap::new();
    /// map.add("a", 1).unwrap();
    /// map.add("b", 2).unwrap();
    ///
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some(("a", &1)));
    /// assert_eq!(iter.next_back(), Some(("b", &2)));
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

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Unconditional insert-or-overwrite used by `Extend` and
    /// deserialization. A replaced entry keeps its position.
    fn upsert(&mut self, key: String, value: E) {
        match self.position(&key) {
            Some(index) => self.entries[index].value = value,
            None => self.entries.push(Entry { key, value }),
        }
    }
}

impl<E> KeyedCollection<E> for GuardedMap<E> {
    fn add(&mut self, key: &str, value: E) -> Result<(), MapError> {
        if self.position(key).is_some() {
            return Err(MapError::KeyConflict { key: key.to_owned() });
        }
        self.entries.push(Entry::new(key, value));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<&E, MapError> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
            .ok_or_else(|| MapError::KeyNotFound { key: key.to_owned() })
    }

    fn set(&mut self, key: &str, value: E) -> Result<E, MapError> {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => Ok(mem::replace(&mut entry.value, value)),
            None => Err(MapError::KeyNotFound { key: key.to_owned() }),
        }
    }

    fn remove(&mut self, key: &str) -> Result<E, MapError> {
        match self.position(key) {
            // Vec::remove shifts, keeping the remaining entries in order.
            Some(index) => Ok(self.entries.remove(index).value),
            None => Err(MapError::KeyNotFound { key: key.to_owned() }),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &E),
    {
        for entry in &self.entries {
            visit(&entry.key, &entry.value);
        }
    }
}

impl<E> Default for GuardedMap<E> {
    fn default() -> Self {
        GuardedMap::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for GuardedMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for GuardedMap<E> {
    /// Key/value equality, ignoring insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.eq_collection(other)
    }
}

impl<E: Eq> Eq for GuardedMap<E> {}

impl<E: PartialEq> PartialEq<crate::OpenMap<E>> for GuardedMap<E> {
    /// Cross-variant key/value equality, ignoring insertion order.
    fn eq(&self, other: &crate::OpenMap<E>) -> bool {
        self.eq_collection(other)
    }
}

/// Duplicate keys resolve last-wins; a replaced entry keeps its original
/// position, matching [`set`](KeyedCollection::set).
impl<E> Extend<(String, E)> for GuardedMap<E> {
    fn extend<I: IntoIterator<Item = (String, E)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<E> FromIterator<(String, E)> for GuardedMap<E> {
    fn from_iter<I: IntoIterator<Item = (String, E)>>(iter: I) -> Self {
        let mut map = GuardedMap::new();
        map.extend(iter);
        map
    }
}

impl<E> From<crate::PlainMap<E>> for GuardedMap<E> {
    fn from(plain: crate::PlainMap<E>) -> Self {
        plain.into_iter().collect()
    }
}

impl<'a, E> IntoIterator for &'a GuardedMap<E> {
    type Item = (&'a str, &'a E);
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<E> IntoIterator for GuardedMap<E> {
    type Item = (String, E);
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        IntoIter { inner: self.entries.into_iter() }
    }
}

/// Serializes as a map in insertion order, matching the plain interchange
/// form.
impl<E: Serialize> Serialize for GuardedMap<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for GuardedMap<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GuardedMapVisitor<E>(PhantomData<E>);

        impl<'de, E: Deserialize<'de>> Visitor<'de> for GuardedMapVisitor<E> {
            type Value = GuardedMap<E>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string-keyed map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = GuardedMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, E>()? {
                    map.upsert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(GuardedMapVisitor(PhantomData))
    }
}

/// An iterator over the entries of a `GuardedMap`.
///
/// This `struct` is created by the [`iter`] method on [`GuardedMap`]. See
/// its documentation for more.
///
/// [`iter`]: GuardedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, E> {
    inner: core::slice::Iter<'a, Entry<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = (&'a str, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key.as_str(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (entry.key.as_str(), &entry.value))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Iter<'_, E> {}

/// An owning iterator over the entries of a `GuardedMap`.
///
/// This `struct` is created by the [`into_iter`] method on [`GuardedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<E> {
    inner: std::vec::IntoIter<Entry<E>>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = (String, E);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(<(String, E)>::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(<(String, E)>::from)
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for IntoIter<E> {}

/// An iterator over the keys of a `GuardedMap`.
///
/// This `struct` is created by the [`keys`] method on [`GuardedMap`]. See
/// its documentation for more.
///
/// [`keys`]: GuardedMap::keys
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

/// An iterator over the values of a `GuardedMap`.
///
/// This `struct` is created by the [`values`] method on [`GuardedMap`].
/// See its documentation for more.
///
/// [`values`]: GuardedMap::values
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
