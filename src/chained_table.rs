//! ChainedHashTable: public layer with the hash, growth rule, and iterators.

use crate::bucket::{Bucket, Entry};

/// Default number of buckets when none is requested.
const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// A separate-chaining hash table with `String` keys and generic values.
///
/// Keys are hashed by summing the Unicode scalar values of their
/// characters and reducing modulo the current bucket count, so bucket
/// placement is deterministic for a given capacity. Capacity doubles
/// when the load factor (entries per bucket) reaches
/// [`ChainedHashTable::LOAD_FACTOR_THRESHOLD`]; it never shrinks except
/// through [`clear`](ChainedHashTable::clear), which restores the
/// construction-time capacity.
#[derive(Debug)]
pub struct ChainedHashTable<V> {
    buckets: Vec<Bucket<V>>,
    initial_capacity: usize,
    count: usize,
}

impl<V> ChainedHashTable<V> {
    /// Load factor at which the table doubles its bucket count. The
    /// check runs against the pre-insertion count, so growth happens
    /// before the insertion that observes the threshold completes.
    pub const LOAD_FACTOR_THRESHOLD: f64 = 0.7;

    /// Create a table with the default capacity of 10 buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create a table with `initial_capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is zero; the hash reduces modulo
    /// the bucket count, so at least one bucket must exist.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        assert!(initial_capacity > 0, "capacity must be at least 1");
        Self {
            buckets: Self::alloc_buckets(initial_capacity),
            initial_capacity,
            count: 0,
        }
    }

    fn alloc_buckets(capacity: usize) -> Vec<Bucket<V>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);
        buckets
    }

    /// Bucket index for `key` under the current capacity. Recomputed on
    /// every access; the index depends on the bucket count, which
    /// changes across resizes. The empty key sums to 0 and lands in
    /// bucket 0 for any capacity.
    fn bucket_index(&self, key: &str) -> usize {
        let sum = key
            .chars()
            .fold(0u64, |acc, c| acc.wrapping_add(c as u64));
        (sum % self.buckets.len() as u64) as usize
    }

    fn at_growth_threshold(&self) -> bool {
        self.count as f64 / self.buckets.len() as f64 >= Self::LOAD_FACTOR_THRESHOLD
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Insert `value` under `key`, or replace the value in place if the
    /// key is already present (the entry keeps its chain position and
    /// `len()` is unchanged).
    ///
    /// If the pre-insertion load factor has reached
    /// [`LOAD_FACTOR_THRESHOLD`](ChainedHashTable::LOAD_FACTOR_THRESHOLD),
    /// the table doubles its capacity and rehashes before the insertion
    /// proceeds, so the new entry is slotted under the grown capacity.
    pub fn set(&mut self, key: String, value: V) {
        if self.at_growth_threshold() {
            self.grow();
        }
        let idx = self.bucket_index(&key);
        if self.buckets[idx].insert(key, value) {
            self.count += 1;
        }
    }

    /// Double the capacity and re-slot every entry under the new bucket
    /// count. `count` is unchanged; after doubling, the load factor of
    /// the existing entries is below the threshold, so the rehash
    /// cannot recurse into another growth.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, Self::alloc_buckets(new_capacity));
        for bucket in old {
            for (key, value) in bucket {
                let idx = self.bucket_index(&key);
                self.buckets[idx].push(key, value);
            }
        }
        debug_assert_eq!(
            self.buckets.iter().map(Bucket::len).sum::<usize>(),
            self.count,
            "rehash must preserve every entry"
        );
    }

    /// Borrow the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_index(key)].get(key)
    }

    /// Mutably borrow the value stored under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx].get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets[self.bucket_index(key)].contains(key)
    }

    /// Remove the entry under `key`, returning its value if the key was
    /// present. Remaining entries in the bucket keep their relative
    /// order.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket_index(key);
        let removed = self.buckets[idx].remove(key)?;
        self.count -= 1;
        Some(removed)
    }

    /// Discard every entry and restore the construction-time capacity.
    /// The next `set` behaves as on a freshly constructed table.
    pub fn clear(&mut self) {
        self.buckets = Self::alloc_buckets(self.initial_capacity);
        self.count = 0;
    }

    /// Iterate over `(key, value)` pairs, walking buckets in index
    /// order and each chain in insertion order. The order is an
    /// artifact of bucket layout, deterministic for a given table
    /// state, and not globally insertion-ordered.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
        }
    }

    /// Like [`iter`](ChainedHashTable::iter), with mutable access to
    /// the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            current: None,
        }
    }

    /// Iterate over the keys, in [`iter`](ChainedHashTable::iter) order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { it: self.iter() }
    }

    /// Iterate over the values, in [`iter`](ChainedHashTable::iter) order.
    pub fn values(&self) -> Values<'_, V> {
        Values { it: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut { it: self.iter_mut() }
    }
}

impl<V> Default for ChainedHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(&str, &V)` pairs in bucket order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Bucket<V>>,
    current: Option<core::slice::Iter<'a, Entry<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.current.as_mut() {
                if let Some(e) = chain.next() {
                    return Some((e.key.as_str(), &e.value));
                }
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }
}

/// Iterator over `(&str, &mut V)` pairs in bucket order.
pub struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Bucket<V>>,
    current: Option<core::slice::IterMut<'a, Entry<V>>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.current.as_mut() {
                if let Some(e) = chain.next() {
                    return Some((e.key.as_str(), &mut e.value));
                }
            }
            self.current = Some(self.buckets.next()?.iter_mut());
        }
    }
}

/// Iterator over keys in bucket order.
pub struct Keys<'a, V> {
    it: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, _)| k)
    }
}

/// Iterator over values in bucket order.
pub struct Values<'a, V> {
    it: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, v)| v)
    }
}

/// Iterator over mutable values in bucket order.
pub struct ValuesMut<'a, V> {
    it: IterMut<'a, V>,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, v)| v)
    }
}

impl<'a, V> IntoIterator for &'a ChainedHashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut ChainedHashTable<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> IterMut<'a, V> {
        self.iter_mut()
    }
}
