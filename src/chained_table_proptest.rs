#![cfg(test)]

// Property tests for ChainedHashTable kept inside the crate so they can
// observe internals such as `capacity()` growth points directly.

use crate::ChainedHashTable;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to
// earlier keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Get(usize),
    Contains(usize),
    Remove(usize),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let pool: Vec<String> = {
            let mut p = pool;
            p.sort();
            p.dedup();
            p
        };
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Contains),
            idx.clone().prop_map(OpI::Remove),
            Just(OpI::Clear),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Capacity predicted by replaying the growth rule: before each insert
// of a new key, double while the pre-insertion load factor has reached
// the threshold. Updates never grow because they are checked against an
// unchanged count only once, same as the table does.
fn predicted_capacity(initial: usize, inserts: usize) -> usize {
    let mut cap = initial;
    for n in 0..inserts {
        if n as f64 / cap as f64 >= ChainedHashTable::<i32>::LOAD_FACTOR_THRESHOLD {
            cap *= 2;
        }
    }
    cap
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `get`/`contains_key`/`remove` parity with the model after each op.
// - `len()` equals the number of distinct live keys at every step.
// - `iter`/`keys`/`values` agree pairwise and match the model's entry set.
// - `clear` restores the construction-time capacity.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashTable<i32> = ChainedHashTable::with_capacity(2);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    sut.set(pool[i].clone(), v);
                    model.insert(pool[i].clone(), v);
                }
                OpI::Get(i) => {
                    prop_assert_eq!(sut.get(&pool[i]), model.get(&pool[i]));
                }
                OpI::Contains(i) => {
                    prop_assert_eq!(sut.contains_key(&pool[i]), model.contains_key(&pool[i]));
                }
                OpI::Remove(i) => {
                    prop_assert_eq!(sut.remove(&pool[i]), model.remove(&pool[i]));
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), 2);
                }
                OpI::Iterate => {
                    let mut seen: Vec<(String, i32)> =
                        sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                    seen.sort();
                    let mut expected: Vec<(String, i32)> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    expected.sort();
                    prop_assert_eq!(seen, expected);

                    let keys: Vec<&str> = sut.keys().collect();
                    let values: Vec<&i32> = sut.values().collect();
                    let pairs: Vec<(&str, &i32)> = sut.iter().collect();
                    prop_assert_eq!(keys.len(), sut.len());
                    prop_assert_eq!(values.len(), sut.len());
                    let zipped: Vec<(&str, &i32)> =
                        keys.into_iter().zip(values).collect();
                    prop_assert_eq!(zipped, pairs);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}

// Property: growth points are exactly those of the check-before-insert
// rule, and a rehash never loses or corrupts an entry.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_points_and_rehash(initial in 1usize..=16, n in 0usize..200) {
        let mut t: ChainedHashTable<usize> = ChainedHashTable::with_capacity(initial);
        for i in 0..n {
            t.set(format!("key{i}"), i);
            prop_assert_eq!(t.capacity(), predicted_capacity(initial, i + 1));
        }
        prop_assert_eq!(t.len(), n);
        for i in 0..n {
            prop_assert_eq!(t.get(&format!("key{i}")), Some(&i));
        }
    }
}
