use thiserror::Error;

/// Errors surfaced by the guarded mutation operations.
///
/// The mutating half of the contract is deliberately partitioned:
/// [`add`](crate::KeyedCollection::add) never overwrites and
/// [`set`](crate::KeyedCollection::set) never creates, so an accidental
/// overwrite is a caught programming error instead of silent data loss.
/// Every failure is reported at the point of the offending call and the
/// failed operation has no observable effect on the collection.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MapError {
    /// `add` was called with a key that is already present.
    #[error("key conflict: \"{key}\" is already present")]
    KeyConflict { key: String },

    /// `get`, `set`, or `remove` was called with a key that is absent.
    #[error("key not found: \"{key}\"")]
    KeyNotFound { key: String },

    /// JSON serialization of the plain snapshot failed.
    ///
    /// Does not occur for string-keyed maps with well-behaved `Serialize`
    /// element types; the variant exists so `to_json` can propagate instead
    /// of panicking.
    #[error("serialization failed: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl MapError {
    /// Returns the key this error is about, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_map::{GuardedMap, KeyedCollection, MapError};
    ///
    /// let map: GuardedMap<i32> = GuardedMap::new();
    /// let err = map.get("missing").unwrap_err();
    /// assert_eq!(err.key(), Some("missing"));
    /// ```
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::KeyConflict { key } | MapError::KeyNotFound { key } => Some(key),
            MapError::Serialization { .. } => None,
        }
    }

    /// Check if this error reports a duplicate key on `add`.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, MapError::KeyConflict { .. })
    }

    /// Check if this error reports an absent key on `get`/`set`/`remove`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, MapError::KeyNotFound { .. })
    }
}
