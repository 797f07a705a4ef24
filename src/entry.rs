use serde::{Deserialize, Serialize};

/// One `(key, value)` pair as stored in a collection.
///
/// `Entry` is the snapshot unit produced by
/// [`to_entries`](crate::KeyedCollection::to_entries): every entry returned
/// there is an independent clone, so mutating it never touches the source
/// collection.
///
/// # Examples
///
/// ```
/// use tandem_map::{Entry, GuardedMap, KeyedCollection};
///
/// let mut map = GuardedMap::new();
/// map.add("a", 1).unwrap();
///
/// let entries = map.to_entries();
/// assert_eq!(entries, [Entry::new("a", 1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<E> {
    /// The entry's key, unique within its collection.
    pub key: String,

    /// The stored element.
    pub value: E,
}

impl<E> Entry<E> {
    /// Creates an entry from a key and a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: E) -> Self {
        Entry { key: key.into(), value }
    }
}

impl<E> From<(String, E)> for Entry<E> {
    fn from((key, value): (String, E)) -> Self {
        Entry { key, value }
    }
}

impl<E> From<Entry<E>> for (String, E) {
    fn from(entry: Entry<E>) -> Self {
        (entry.key, entry.value)
    }
}
