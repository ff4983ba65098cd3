//! Bucket: structural layer holding one chain of entries.
//!
//! A bucket is an insertion-ordered `Vec` of key-value entries. All key
//! comparisons are exact string equality; the bucket never hashes. The
//! table above it decides which bucket a key belongs to.

/// One key-value pair in a chain.
#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// An insertion-ordered chain of entries with unique keys.
///
/// Uniqueness is the caller's invariant: `insert` enforces it by
/// updating in place, `push` assumes it (rehash path only).
#[derive(Debug)]
pub(crate) struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Bucket<V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Insert or update. Returns `true` if a new entry was appended,
    /// `false` if an existing entry's value was replaced in place.
    pub(crate) fn insert(&mut self, key: String, value: V) -> bool {
        for e in &mut self.entries {
            if e.key == key {
                e.value = value;
                return false;
            }
        }
        self.entries.push(Entry { key, value });
        true
    }

    /// Append without a duplicate scan. Rehash-only path; the caller
    /// guarantees the key is not already present in this bucket.
    pub(crate) fn push(&mut self, key: String, value: V) {
        self.entries.push(Entry { key, value });
    }

    /// Remove the entry with `key`, preserving the relative order of
    /// the remaining entries. Returns the removed value if present.
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let pos = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(pos).value)
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, Entry<V>> {
        self.entries.iter_mut()
    }
}

impl<V> IntoIterator for Bucket<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            it: self.entries.into_iter(),
        }
    }
}

/// Owning iterator over a bucket's entries, used when rehashing.
pub(crate) struct IntoIter<V> {
    it: std::vec::IntoIter<Entry<V>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| (e.key, e.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: entries keep insertion order within a bucket.
    #[test]
    fn append_preserves_insertion_order() {
        let mut b: Bucket<i32> = Bucket::new();
        assert!(b.insert("a".to_string(), 1));
        assert!(b.insert("b".to_string(), 2));
        assert!(b.insert("c".to_string(), 3));
        let keys: Vec<&str> = b.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    /// Invariant: inserting an existing key replaces the value in place
    /// without growing the chain or moving the entry.
    #[test]
    fn insert_existing_key_updates_in_place() {
        let mut b: Bucket<i32> = Bucket::new();
        b.insert("a".to_string(), 1);
        b.insert("b".to_string(), 2);
        assert!(!b.insert("a".to_string(), 10));
        assert_eq!(b.len(), 2);
        assert_eq!(b.get("a"), Some(&10));
        let keys: Vec<&str> = b.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"], "updated entry must not move");
    }

    /// Invariant: removal deletes exactly one entry and preserves the
    /// relative order of the survivors.
    #[test]
    fn remove_preserves_relative_order() {
        let mut b: Bucket<i32> = Bucket::new();
        b.insert("a".to_string(), 1);
        b.insert("b".to_string(), 2);
        b.insert("c".to_string(), 3);
        assert_eq!(b.remove("b"), Some(2));
        assert_eq!(b.len(), 2);
        let keys: Vec<&str> = b.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "c"]);
        assert_eq!(b.remove("b"), None);
        assert_eq!(b.len(), 2);
    }

    /// Invariant: lookups miss on absent keys without mutating the chain.
    #[test]
    fn miss_on_absent_key() {
        let mut b: Bucket<i32> = Bucket::new();
        b.insert("a".to_string(), 1);
        assert_eq!(b.get("x"), None);
        assert!(!b.contains("x"));
        assert_eq!(b.remove("x"), None);
        assert_eq!(b.len(), 1);
    }
}
