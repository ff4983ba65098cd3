// ChainedHashTable property tests (external view).
//
// Property 1: round-trip — after any interleaving of set/remove/clear,
//  every key's observable state matches a per-key last-write model.
//  - Model: Vec<Option<i32>> over a small key pool.
//  - Invariant: get(k) == model[k]; contains_key(k) == model[k].is_some();
//               len() == count of Some entries, after every op.
//
// Property 2: enumeration — for any reachable table state, keys(),
//  values() and iter() have the same length as len() and zip back into
//  the same pairs, and the pair multiset equals the model's.
use chained_hashtable::ChainedHashTable;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_round_trip_matches_last_write(
        keys in 1usize..=6,
        ops in proptest::collection::vec((0u8..=2u8, 0usize..100usize, any::<i32>()), 1..120),
    ) {
        let mut t: ChainedHashTable<i32> = ChainedHashTable::new();
        let mut model: Vec<Option<i32>> = vec![None; keys];

        for (op, raw_k, v) in ops {
            let k = raw_k % keys;
            let key = format!("k{k}");
            match op {
                0 => {
                    t.set(key.clone(), v);
                    model[k] = Some(v);
                }
                1 => {
                    prop_assert_eq!(t.remove(&key), model[k].take());
                }
                2 => {
                    t.clear();
                    model.iter_mut().for_each(|m| *m = None);
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(t.get(&key), model[k].as_ref());
            prop_assert_eq!(t.contains_key(&key), model[k].is_some());
            let expected_len = model.iter().filter(|m| m.is_some()).count();
            prop_assert_eq!(t.len(), expected_len);
        }
    }
}

proptest! {
    #[test]
    fn prop_enumeration_consistency(
        entries in proptest::collection::btree_map("[a-z]{0,6}", any::<i32>(), 0..40),
        initial in 1usize..=8,
    ) {
        let mut t: ChainedHashTable<i32> = ChainedHashTable::with_capacity(initial);
        for (k, v) in &entries {
            t.set(k.clone(), *v);
        }
        prop_assert_eq!(t.len(), entries.len());

        let keys: Vec<&str> = t.keys().collect();
        let values: Vec<&i32> = t.values().collect();
        let pairs: Vec<(&str, &i32)> = t.iter().collect();
        prop_assert_eq!(keys.len(), t.len());
        prop_assert_eq!(values.len(), t.len());
        prop_assert_eq!(pairs.len(), t.len());

        let zipped: Vec<(&str, &i32)> = keys.into_iter().zip(values).collect();
        prop_assert_eq!(&zipped, &pairs);

        let mut seen: Vec<(String, i32)> =
            pairs.iter().map(|(k, v)| (k.to_string(), **v)).collect();
        seen.sort();
        let expected: Vec<(String, i32)> =
            entries.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(seen, expected);
    }
}
