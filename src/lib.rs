//! chained-hashtable: a single-threaded separate-chaining hash table
//! with `String` keys, generic values, and load-factor driven growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build ChainedHashTable in safe, verifiable layers so each
//!   piece can be reasoned about independently.
//! - Layers:
//!   - Bucket<V>: one chain, an insertion-ordered `Vec` of entries with
//!     append, linear key search, update-in-place, and
//!     position-preserving removal. Never hashes; key equality only.
//!   - ChainedHashTable<V>: public API owning the bucket array, the
//!     code-point hash, the growth rule, and the iterators.
//!
//! Constraints
//! - Single-threaded: all mutation goes through `&mut self`; there is
//!   no interior mutability and no suspension point, so every operation
//!   is atomic from the caller's perspective.
//! - Keys are `String` and are hashed by summing Unicode scalar values
//!   modulo the current capacity. The hash is deterministic and not
//!   pluggable; collisions resolve by chaining.
//! - Capacity only grows (doubling when `count / capacity >= 0.7`,
//!   checked against the pre-insertion count), except `clear`, which
//!   restores the construction-time capacity.
//! - Growth rehashes every entry because the bucket index depends on
//!   the capacity; indices are recomputed on every access, never cached.
//!
//! Why this split?
//! - Localize invariants: the bucket owns chain-local ordering and key
//!   uniqueness within a chain; the table owns placement, the count,
//!   and the growth points.
//! - The bucket never sees the capacity, so a rehash is just draining
//!   old chains and re-slotting pairs under the new bucket count.
//!
//! Lookup semantics
//! - Misses are `Option::None`, never an error or an in-band sentinel,
//!   so a stored value is always distinguishable from an absent key.
//!
//! Notes and non-goals
//! - No custom hasher parameter; bucket placement is part of the
//!   observable layout contract (see the iterator docs).
//! - No shrinking on removal.
//! - Iteration order is bucket index order, then insertion order within
//!   a chain. It is deterministic for a given table state but not
//!   globally insertion-ordered.
//! - Public API surface is `ChainedHashTable` and its iterators; the
//!   bucket layer is an implementation detail.

mod bucket;
mod chained_table;
mod chained_table_proptest;

// Public surface
pub use chained_table::{ChainedHashTable, Iter, IterMut, Keys, Values, ValuesMut};
