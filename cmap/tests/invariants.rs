//! Randomized operation sequences, checked against a reference model
//!
//! The model is a single plain `BTreeMap` holding the forward relation;
//! since the container's contract is that its inverse index is an exact
//! transpose of the forward one, the model plus dual lookups pins down the
//! whole observable state.
use cmap::{Bimap, Error, Overwritten};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;

/// Key/value domain; small enough that collisions happen constantly
const DOMAIN: u16 = 24;

/// Applies the container's eviction policy to the reference model
fn model_insert(model: &mut BTreeMap<u16, u16>, k: u16, v: u16) {
    model.remove(&k);
    if let Some(old_k) =
        model.iter().find(|(_, mv)| **mv == v).map(|(mk, _)| *mk)
    {
        model.remove(&old_k);
    }
    model.insert(k, v);
}

/// What `insert(k, v)` should report, given the model's prior state
fn expected_overwrite(
    model: &BTreeMap<u16, u16>,
    k: u16,
    v: u16,
) -> Overwritten<u16, u16> {
    let by_key = model.get(&k).copied();
    let by_value =
        model.iter().find(|(_, mv)| **mv == v).map(|(mk, _)| *mk);
    match (by_key, by_value) {
        (Some(pv), _) if pv == v => Overwritten::Pair(k, v),
        (Some(pv), Some(pk)) => Overwritten::Both((k, pv), (pk, v)),
        (Some(pv), None) => Overwritten::Key(k, pv),
        (None, Some(pk)) => Overwritten::Value(pk, v),
        (None, None) => Overwritten::Neither,
    }
}

/// Checks that the container matches the model and that its two indices are
/// equal-sized exact transposes
fn check(map: &Bimap<u16, u16>, model: &BTreeMap<u16, u16>) {
    assert_eq!(map.len(), model.len());
    assert_eq!(map.is_empty(), model.is_empty());

    let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<_> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, expected, "forward traversal diverged from model");

    for probe in 0..DOMAIN {
        match model.get(&probe) {
            Some(v) => assert_eq!(map.get_value(&probe), Ok(v)),
            None => {
                assert_eq!(map.get_value(&probe), Err(Error::KeyNotFound))
            }
        }
        let holder =
            model.iter().find(|(_, v)| **v == probe).map(|(k, _)| k);
        match holder {
            Some(k) => assert_eq!(map.get_key(&probe), Ok(k)),
            None => {
                assert_eq!(map.get_key(&probe), Err(Error::ValueNotFound))
            }
        }
    }

    // transpose property, entry by entry
    for (k, v) in map {
        assert_eq!(map.get_key(v), Ok(k));
    }
}

#[test]
fn random_operation_sequences() {
    let mut rng = StdRng::seed_from_u64(0x00c0ffee);
    for _ in 0..8 {
        let mut map = Bimap::new();
        let mut model = BTreeMap::new();
        for _ in 0..1000 {
            let k = rng.gen_range(0..DOMAIN);
            let v = rng.gen_range(0..DOMAIN);
            match rng.gen_range(0..100) {
                0..=59 => {
                    let expected = expected_overwrite(&model, k, v);
                    assert_eq!(map.insert(k, v), expected);
                    model_insert(&mut model, k, v);
                }
                60..=79 => {
                    let expected = model.remove(&k).map(|v| (k, v));
                    assert_eq!(map.remove(&k), expected);
                }
                80..=94 => {
                    let holder = model
                        .iter()
                        .find(|(_, mv)| **mv == v)
                        .map(|(mk, _)| *mk);
                    let expected = holder.map(|mk| {
                        model.remove(&mk);
                        (mk, v)
                    });
                    assert_eq!(map.remove_by_value(&v), expected);
                }
                95..=98 => {
                    // re-run construction sugar against the same model
                    let rebuilt: Bimap<u16, u16> =
                        model.iter().map(|(k, v)| (*k, *v)).collect();
                    check(&rebuilt, &model);
                }
                _ => {
                    map.clear();
                    model.clear();
                }
            }
            check(&map, &model);
        }
    }
}

#[test]
fn insert_then_erase_always_misses() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let mut map = Bimap::new();
    for _ in 0..500 {
        let k: u16 = rng.gen_range(0..DOMAIN);
        let v: u16 = rng.gen_range(0..DOMAIN);
        map.insert(k, v);
        map.remove(&k);
        assert_eq!(map.get_value(&k), Err(Error::KeyNotFound));
        assert_eq!(map.get_key(&v), Err(Error::ValueNotFound));
    }
}
