//! Cross-variant behavior: the contract is what makes OpenMap and
//! GuardedMap interchangeable.

use pretty_assertions::assert_eq;
use tandem_map::{GuardedMap, KeyedCollection, OpenMap, PlainMap, factory};

// ─── Factory construction ────────────────────────────────────────────────────

#[test]
fn empty_builds_either_variant() {
    let open: OpenMap<i32> = factory::empty();
    let guarded: GuardedMap<i32> = factory::empty();
    assert!(open.is_empty());
    assert!(guarded.is_empty());
}

#[test]
fn from_values_keys_by_position() {
    let map: OpenMap<i32> = factory::from_values(&[10, 20, 30]).unwrap();
    assert_eq!(map.keys_to_vec(), ["0", "1", "2"]);
    assert_eq!(map.get("2").unwrap(), &30);
}

#[test]
fn from_values_suffixed_appends_the_literal() {
    let map: GuardedMap<i32> = factory::from_values_suffixed(&[10, 20, 30], "_k").unwrap();
    assert_eq!(map.keys_to_vec(), ["0_k", "1_k", "2_k"]);
    assert_eq!(map.get("0_k").unwrap(), &10);
    assert_eq!(map.get("1_k").unwrap(), &20);
    assert_eq!(map.get("2_k").unwrap(), &30);
}

#[test]
fn from_values_does_not_mutate_its_input() {
    let values = vec![1, 2, 3];
    let _map: GuardedMap<i32> = factory::from_values(&values).unwrap();
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn from_plain_adds_every_own_key() {
    let mut plain = PlainMap::new();
    plain.insert("a".to_owned(), 1);
    plain.insert("b".to_owned(), 2);

    let open: OpenMap<i32> = factory::from_plain(&plain).unwrap();
    let guarded: GuardedMap<i32> = factory::from_plain(&plain).unwrap();
    assert_eq!(open.len(), 2);
    assert!(open.eq_collection(&guarded));
    assert_eq!(plain.len(), 2); // input untouched
}

// ─── Round trips ─────────────────────────────────────────────────────────────

#[test]
fn plain_round_trip_preserves_content() {
    let mut map = GuardedMap::new();
    map.add("b", 2).unwrap();
    map.add("a", 1).unwrap();

    let rebuilt: GuardedMap<i32> = factory::from_plain(&map.to_plain()).unwrap();
    // Content is preserved; iteration order is not (the plain form sorts).
    assert!(rebuilt.eq_collection(&map));
    assert_eq!(rebuilt.keys_to_vec(), ["a", "b"]);
}

#[test]
fn variant_round_trip_preserves_content_and_order() {
    let mut guarded = GuardedMap::new();
    guarded.add("c", 3).unwrap();
    guarded.add("a", 1).unwrap();

    let open = guarded.to_open();
    assert_eq!(open.keys_to_vec(), ["c", "a"]);

    let back = open.to_guarded();
    assert_eq!(back, guarded);
    assert_eq!(back.keys_to_vec(), guarded.keys_to_vec());
}

#[test]
fn conversions_are_independent_copies() {
    let mut guarded = GuardedMap::new();
    guarded.add("a", 1).unwrap();

    let mut open = guarded.to_open();
    open.set("a", 99).unwrap();
    open.add("b", 2).unwrap();

    assert_eq!(guarded.get("a").unwrap(), &1);
    assert_eq!(guarded.len(), 1);
}

// ─── Cross-variant equality ──────────────────────────────────────────────────

#[test]
fn variants_compare_equal_across_insertion_orders() {
    let mut open = OpenMap::new();
    open.add("a", 1).unwrap();
    open.add("b", 2).unwrap();

    let mut guarded = GuardedMap::new();
    guarded.add("b", 2).unwrap();
    guarded.add("a", 1).unwrap();

    assert!(open.eq_collection(&guarded));
    assert!(guarded.eq_collection(&open));
    assert_eq!(open, guarded);
    assert_eq!(guarded, open);
}

#[test]
fn size_mismatch_is_never_equal() {
    let mut open = OpenMap::new();
    open.add("a", 1).unwrap();

    let mut guarded = GuardedMap::new();
    guarded.add("a", 1).unwrap();
    guarded.add("b", 2).unwrap();

    assert!(!open.eq_collection(&guarded));
    assert!(!guarded.eq_collection(&open));
}

// ─── Merging ─────────────────────────────────────────────────────────────────

#[test]
fn merge_keeps_existing_values_by_default() {
    let mut base = OpenMap::new();
    base.add("a", 1).unwrap();
    base.add("b", 2).unwrap();

    let mut other = GuardedMap::new();
    other.add("b", 20).unwrap();
    other.add("c", 3).unwrap();

    base.merge_from(&other, false);
    assert_eq!(base.get("a").unwrap(), &1);
    assert_eq!(base.get("b").unwrap(), &2); // collision kept existing
    assert_eq!(base.get("c").unwrap(), &3);
    assert_eq!(base.keys_to_vec(), ["a", "b", "c"]);
}

#[test]
fn merge_with_replace_takes_the_other_values() {
    let mut base = GuardedMap::new();
    base.add("a", 1).unwrap();
    base.add("b", 2).unwrap();

    let mut other = OpenMap::new();
    other.add("b", 20).unwrap();
    other.add("c", 3).unwrap();

    base.merge_from(&other, true);
    // Every key of `other` now carries `other`'s value.
    assert!(other.all(|key, value| base.get(key).map(|mine| mine == value).unwrap_or(false)));
    assert_eq!(base.get("a").unwrap(), &1);
    assert_eq!(base.len(), 3);
}

#[test]
fn merge_never_removes_entries() {
    let mut base = GuardedMap::new();
    base.add("a", 1).unwrap();

    let empty: GuardedMap<i32> = GuardedMap::new();
    base.merge_from(&empty, true);
    assert_eq!(base.len(), 1);

    let mut other = GuardedMap::new();
    other.add("a", 2).unwrap();
    base.merge_from(&other, false);
    assert_eq!(base.len(), 1);
}

// ─── Contract genericity ─────────────────────────────────────────────────────

/// A helper written once against the contract works with both variants.
fn total<C: KeyedCollection<i64>>(map: &C) -> i64 {
    let mut sum = 0;
    map.for_each(|_, value| sum += value);
    sum
}

#[test]
fn generic_code_accepts_either_variant() {
    let mut open = OpenMap::new();
    open.add("a", 1).unwrap();
    open.add("b", 2).unwrap();

    let guarded = open.to_guarded();
    assert_eq!(total(&open), 3);
    assert_eq!(total(&guarded), 3);
}

#[test]
fn json_output_is_identical_across_variants() {
    let mut open = OpenMap::new();
    open.add("b", 2).unwrap();
    open.add("a", 1).unwrap();

    let guarded = open.to_guarded();
    assert_eq!(open.to_json().unwrap(), guarded.to_json().unwrap());
    assert_eq!(open.to_json().unwrap(), r#"{"a":1,"b":2}"#);
}
