//! String-keyed generic map in two interchangeable flavors.
//!
//! This crate provides [`OpenMap`] and [`GuardedMap`], two insertion-ordered
//! string-keyed collections over a caller-chosen element type, driven by the
//! shared [`KeyedCollection`] contract:
//!
//! - [`OpenMap`] keeps its entries in an exposed backing map that callers
//!   may read and write directly, bypassing the guarded operations.
//! - [`GuardedMap`] keeps its entries in a private ordered sequence; the
//!   contract's operations are the only way in.
//!
//! The mutating operations are partitioned on purpose: [`add`] never
//! overwrites and [`set`] never creates, so an accidental overwrite is a
//! caught [`MapError`] instead of silent data loss. That partition is the
//! entire reason to reach for these types over a bare map.
//!
//! # Example
//!
//! ```
//! use tandem_map::{GuardedMap, KeyedCollection, factory};
//!
//! let mut map = GuardedMap::new();
//! map.add("alice", 100).unwrap();
//! map.add("bob", 85).unwrap();
//!
//! // `add` refuses to overwrite; `set` refuses to create.
//! assert!(map.add("bob", 0).unwrap_err().is_conflict());
//! assert!(map.set("carol", 92).unwrap_err().is_not_found());
//!
//! // Insertion order is preserved and stable.
//! map.set("alice", 101).unwrap();
//! assert_eq!(map.keys_to_vec(), ["alice", "bob"]);
//!
//! // The variants are interchangeable through the contract.
//! let open = map.to_open();
//! assert!(open.eq_collection(&map));
//!
//! // Positional construction via the factory.
//! let scores: GuardedMap<i32> = factory::from_values_suffixed(&[10, 20], "_k").unwrap();
//! assert_eq!(scores.keys_to_vec(), ["0_k", "1_k"]);
//! ```
//!
//! # Features
//!
//! - **Two storage strategies** - exposed backing map ([`OpenMap`]) or
//!   private entry sequence ([`GuardedMap`]), one contract
//! - **Guarded mutation** - `add`/`set`/`remove` fail loudly instead of
//!   silently overwriting or creating
//! - **Stable insertion order** - `set` keeps an entry's position, `remove`
//!   keeps the rest in order
//! - **Plain interchange** - [`PlainMap`] snapshots, JSON via serde
//!
//! [`add`]: KeyedCollection::add
//! [`set`]: KeyedCollection::set

// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

mod contract;
mod entry;
mod error;

pub mod factory;
pub mod guarded_map;
pub mod open_map;

pub use contract::{KeyedCollection, PlainMap};
pub use entry::Entry;
pub use error::MapError;
pub use guarded_map::GuardedMap;
pub use open_map::OpenMap;
