//! Stateless constructors for either collection variant.
//!
//! Every function here is a pure function of its inputs and is generic
//! over the [`KeyedCollection`] contract, so the same call builds an
//! [`OpenMap`](crate::OpenMap) or a [`GuardedMap`](crate::GuardedMap)
//! depending on the requested type. Inputs are borrowed and never mutated.
//!
//! Population goes through [`add`](KeyedCollection::add), so rejection
//! behavior is inherited from it: a construction fails with
//! [`KeyConflict`](crate::MapError::KeyConflict) only if the same key is
//! produced twice, which the index-derived and own-key inputs below cannot
//! do in normal use.

use crate::{KeyedCollection, MapError, PlainMap};

/// Creates an empty collection of the requested variant.
///
/// # Examples
///
/// ```
/// use tandem_map::{GuardedMap, KeyedCollection, factory};
///
/// let map: GuardedMap<i32> = factory::empty();
/// assert!(map.is_empty());
/// ```
#[must_use]
pub fn empty<C: Default>() -> C {
    C::default()
}

/// Builds a collection from an ordered slice of values, keyed by position.
///
/// The key of `values[i]` is `i` rendered as a string: `"0"`, `"1"`, ...
///
/// # Errors
///
/// Inherited from [`add`](KeyedCollection::add); cannot occur here since
/// positional keys are unique.
///
/// # Examples
///
/// ```
/// use tandem_map::{KeyedCollection, OpenMap, factory};
///
/// let map: OpenMap<i32> = factory::from_values(&[10, 20]).unwrap();
/// assert_eq!(map.get("0").unwrap(), &10);
/// assert_eq!(map.get("1").unwrap(), &20);
/// ```
pub fn from_values<C, E>(values: &[E]) -> Result<C, MapError>
where
    C: KeyedCollection<E> + Default,
    E: Clone,
{
    from_values_suffixed(values, "")
}

/// Builds a collection from an ordered slice of values, keyed by position
/// with a literal suffix.
///
/// The key of `values[i]` is `i` rendered as a string followed by
/// `key_suffix`.
///
/// # Errors
///
/// Inherited from [`add`](KeyedCollection::add); cannot occur here since
/// positional keys are unique.
///
/// # Examples
///
/// ```
/// use tandem_map::{GuardedMap, KeyedCollection, factory};
///
/// let map: GuardedMap<i32> = factory::from_values_suffixed(&[10, 20, 30], "_k").unwrap();
/// assert_eq!(map.keys_to_vec(), ["0_k", "1_k", "2_k"]);
/// assert_eq!(map.get("1_k").unwrap(), &20);
/// ```
pub fn from_values_suffixed<C, E>(values: &[E], key_suffix: &str) -> Result<C, MapError>
where
    C: KeyedCollection<E> + Default,
    E: Clone,
{
    let mut collection = C::default();
    for (index, value) in values.iter().enumerate() {
        collection.add(&format!("{index}{key_suffix}"), value.clone())?;
    }
    Ok(collection)
}

/// Builds a collection from the plain interchange form, iterating its own
/// keys and adding each entry.
///
/// # Errors
///
/// Inherited from [`add`](KeyedCollection::add); cannot occur here since a
/// [`PlainMap`]'s keys are unique.
///
/// # Examples
///
/// ```
/// use tandem_map::{GuardedMap, KeyedCollection, PlainMap, factory};
///
/// let mut plain = PlainMap::new();
/// plain.insert("a".to_owned(), 1);
/// plain.insert("b".to_owned(), 2);
///
/// let map: GuardedMap<i32> = factory::from_plain(&plain).unwrap();
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("b").unwrap(), &2);
/// ```
pub fn from_plain<C, E>(plain: &PlainMap<E>) -> Result<C, MapError>
where
    C: KeyedCollection<E> + Default,
    E: Clone,
{
    let mut collection = C::default();
    for (key, value) in plain {
        collection.add(key, value.clone())?;
    }
    Ok(collection)
}
