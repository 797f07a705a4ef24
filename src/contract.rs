use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Entry, GuardedMap, MapError, OpenMap};

/// The plain interchange form: a bare string-keyed mapping.
///
/// This is the only serialized representation the crate produces or
/// consumes. [`to_plain`](KeyedCollection::to_plain) snapshots a collection
/// into it, [`from_plain`](crate::factory::from_plain) builds a collection
/// back out of one, and [`to_json`](KeyedCollection::to_json) is exactly
/// JSON-serialization of the snapshot.
pub type PlainMap<E> = BTreeMap<String, E>;

/// The capability contract shared by [`OpenMap`] and [`GuardedMap`].
///
/// Both variants store an insertion-ordered, key-unique set of
/// `(String, E)` entries and are driven exclusively through these
/// operations; they differ only in backing store and in whether that store
/// is exposed. Operations taking another collection (`merge_from`,
/// `eq_by`) are generic over the trait, so the two variants are
/// interchangeable and can be mixed freely.
///
/// # Mutation guard rules
///
/// The mutating operations are partitioned: [`add`](Self::add) never
/// overwrites, [`set`](Self::set) never creates, and both report the
/// violation instead of proceeding. A failed mutation has no observable
/// effect.
///
/// # Keys
///
/// Keys are expected to be non-empty strings. Emptiness is not validated;
/// an empty key behaves like any other.
///
/// # Iteration order
///
/// Every ordered operation (`for_each`, `to_entries`, `keys_to_vec`,
/// `values_to_vec`) visits entries in insertion order. The order is stable
/// across `set` (an updated entry keeps its position) and `remove` (the
/// remaining entries keep theirs).
///
/// # Reentrancy
///
/// Caller-supplied visitors and predicates run synchronously while the
/// collection is borrowed, so safe Rust cannot mutate a collection from
/// inside its own iteration.
///
/// # Examples
///
/// ```
/// use tandem_map::{GuardedMap, KeyedCollection, OpenMap};
///
/// let mut open = OpenMap::new();
/// open.add("a", 1).unwrap();
/// open.add("b", 2).unwrap();
///
/// let mut guarded = GuardedMap::new();
/// guarded.add("b", 2).unwrap();
/// guarded.add("a", 1).unwrap();
///
/// // Same entries, different variants and insertion orders.
/// assert!(open.eq_collection(&guarded));
/// ```
pub trait KeyedCollection<E> {
    /// Stores a new entry under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyConflict`] if `key` is already present; the
    /// prior value is untouched.
    fn add(&mut self, key: &str, value: E) -> Result<(), MapError>;

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` is absent.
    fn get(&self, key: &str) -> Result<&E, MapError>;

    /// Overwrites the value of an existing entry, returning the previous
    /// value. The entry keeps its position in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` is absent; nothing is
    /// created.
    fn set(&mut self, key: &str, value: E) -> Result<E, MapError>;

    /// Deletes the entry stored under `key`, returning its value. The
    /// remaining entries keep their iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` is absent.
    fn remove(&mut self, key: &str) -> Result<E, MapError>;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns `true` if an entry is stored under `key`.
    ///
    /// This is a key-existence test, never a test on the stored value: an
    /// entry holding `0`, `""`, or `false` is just as present as any other.
    fn contains_key(&self, key: &str) -> bool;

    /// Invokes `visit` once per entry, in insertion order, with no early
    /// exit.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&str, &E);

    /// Returns `true` if the collection holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if some stored value satisfies `eq` against `value`.
    fn contains_by<F>(&self, value: &E, mut eq: F) -> bool
    where
        F: FnMut(&E, &E) -> bool,
    {
        self.any(|_, stored| eq(stored, value))
    }

    /// Returns `true` if some stored value equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{KeyedCollection, OpenMap};
    ///
    /// let mut map = OpenMap::new();
    /// map.add("a", 1).unwrap();
    /// assert!(map.contains(&1));
    /// assert!(!map.contains(&2));
    /// ```
    fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.contains_by(value, |a, b| a == b)
    }

    /// Returns the first key (in insertion order) whose value satisfies
    /// `eq` against `value`, or `None` if no value matches.
    fn key_of_by<F>(&self, value: &E, mut eq: F) -> Option<String>
    where
        F: FnMut(&E, &E) -> bool,
    {
        let mut found = None;
        self.for_each(|key, stored| {
            if found.is_none() && eq(stored, value) {
                found = Some(key.to_owned());
            }
        });
        found
    }

    /// Returns the first key (in insertion order) whose value equals
    /// `value`, or `None` if no value matches.
    fn key_of(&self, value: &E) -> Option<String>
    where
        E: PartialEq,
    {
        self.key_of_by(value, |a, b| a == b)
    }

    /// Returns `true` if `pred` holds for every entry. Vacuously true for
    /// an empty collection.
    fn all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&str, &E) -> bool,
    {
        let mut holds = true;
        self.for_each(|key, value| {
            if holds && !pred(key, value) {
                holds = false;
            }
        });
        holds
    }

    /// Returns `true` if `pred` holds for at least one entry.
    fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&str, &E) -> bool,
    {
        let mut holds = false;
        self.for_each(|key, value| {
            if !holds && pred(key, value) {
                holds = true;
            }
        });
        holds
    }

    /// Returns the entries as independent [`Entry`] snapshots, in insertion
    /// order. Mutating the result never mutates the collection.
    #[must_use]
    fn to_entries(&self) -> Vec<Entry<E>>
    where
        E: Clone,
    {
        let mut entries = Vec::with_capacity(self.len());
        self.for_each(|key, value| entries.push(Entry::new(key, value.clone())));
        entries
    }

    /// Returns the keys in insertion order.
    #[must_use]
    fn keys_to_vec(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len());
        self.for_each(|key, _| keys.push(key.to_owned()));
        keys
    }

    /// Returns clones of the values in insertion order.
    #[must_use]
    fn values_to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        self.for_each(|_, value| values.push(value.clone()));
        values
    }

    /// Merges `other`'s entries into `self`, in `other`'s iteration order.
    ///
    /// On a key collision the existing value is kept unless `replace` is
    /// `true`, in which case `other`'s value wins. No entry is ever
    /// removed, so `self.len()` never decreases.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{GuardedMap, KeyedCollection, OpenMap};
    ///
    /// let mut base = OpenMap::new();
    /// base.add("a", 1).unwrap();
    ///
    /// let mut other = GuardedMap::new();
    /// other.add("a", 10).unwrap();
    /// other.add("b", 2).unwrap();
    ///
    /// base.merge_from(&other, false);
    /// assert_eq!(base.get("a").unwrap(), &1); // existing key kept
    /// assert_eq!(base.get("b").unwrap(), &2);
    ///
    /// base.merge_from(&other, true);
    /// assert_eq!(base.get("a").unwrap(), &10); // replaced
    /// ```
    fn merge_from<C>(&mut self, other: &C, replace: bool)
    where
        C: KeyedCollection<E>,
        E: Clone,
    {
        for Entry { key, value } in other.to_entries() {
            if self.contains_key(&key) {
                if replace {
                    // Present, so `set` cannot fail.
                    let _ = self.set(&key, value);
                }
            } else {
                // Absent, so `add` cannot fail.
                let _ = self.add(&key, value);
            }
        }
    }

    /// Compares against any other collection using `eq` on values.
    ///
    /// Two collections are equal when they have the same size and, for
    /// every entry of `other`, `self` stores the same key with a value for
    /// which `eq` holds. Insertion order does not participate.
    fn eq_by<C, F>(&self, other: &C, mut eq: F) -> bool
    where
        C: KeyedCollection<E>,
        F: FnMut(&E, &E) -> bool,
    {
        if self.len() != other.len() {
            return false;
        }
        other.all(|key, theirs| match self.get(key) {
            Ok(mine) => eq(mine, theirs),
            Err(_) => false,
        })
    }

    /// Compares against any other collection using `==` on values,
    /// ignoring insertion order.
    fn eq_collection<C>(&self, other: &C) -> bool
    where
        C: KeyedCollection<E>,
        E: PartialEq,
    {
        self.eq_by(other, |a, b| a == b)
    }

    /// Snapshots the collection into the plain interchange form.
    ///
    /// The result is an independent copy; mutating it never mutates the
    /// collection.
    #[must_use]
    fn to_plain(&self) -> PlainMap<E>
    where
        E: Clone,
    {
        let mut plain = PlainMap::new();
        self.for_each(|key, value| {
            plain.insert(key.to_owned(), value.clone());
        });
        plain
    }

    /// JSON-serializes the plain snapshot. Exactly
    /// `serde_json::to_string(&self.to_plain())`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Serialization`] if the element type's
    /// `Serialize` impl fails; this does not occur for ordinary data
    /// types.
    fn to_json(&self) -> Result<String, MapError>
    where
        E: Serialize + Clone,
    {
        serde_json::to_string(&self.to_plain()).map_err(MapError::from)
    }

    /// Converts into an independent [`OpenMap`] holding clones of the
    /// entries, in the same iteration order.
    #[must_use]
    fn to_open(&self) -> OpenMap<E>
    where
        E: Clone,
    {
        self.to_entries().into_iter().map(<(String, E)>::from).collect()
    }

    /// Converts into an independent [`GuardedMap`] holding clones of the
    /// entries, in the same iteration order.
    #[must_use]
    fn to_guarded(&self) -> GuardedMap<E>
    where
        E: Clone,
    {
        self.to_entries().into_iter().map(<(String, E)>::from).collect()
    }
}
