use super::GuardedMap;

impl<E> GuardedMap<E> {
    /// Creates an empty map with capacity for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{GuardedMap, KeyedCollection};
    ///
    /// let map: GuardedMap<i32> = GuardedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        GuardedMap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Removes every entry, keeping the allocated capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{GuardedMap, KeyedCollection};
    ///
    /// let mut map = GuardedMap::new();
    /// map.add("a", 1).unwrap();
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
