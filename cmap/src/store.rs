//! Backing-store abstraction for the two halves of a [`Bimap`](crate::Bimap)
//!
//! Each direction of the map is an independent associative index behind the
//! [`Store`] trait.  The crate ships one implementation, backed by
//! [`BTreeMap`]: logarithmic lookups and sorted traversal.  The trait is the
//! substitution point for other strategies: a hash-backed store would give
//! constant-time lookups, at the cost of the sorted traversal surface
//! (which requires [`OrderedStore`]).
use std::collections::BTreeMap;

/// One direction of an associative index
///
/// `L` is the lookup side and `R` the result side; a
/// [`Bimap`](crate::Bimap) owns two stores with the roles swapped.
/// Implementations must map each `L` to at most one `R`.
pub trait Store<L, R>: Default {
    /// Consuming iterator over stored pairs
    type Entries: Iterator<Item = (L, R)>;

    /// Number of stored pairs
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Theoretical upper bound on the number of stored pairs
    ///
    /// A platform-defined ceiling based on entry footprint, not a promise
    /// that a store of this size can be allocated.
    fn max_len(&self) -> usize;

    /// Looks up the `R` stored under `l`
    fn get(&self, l: &L) -> Option<&R>;

    /// Stores the pair `(l, r)`, returning the previous `R` under that `l`
    fn insert(&mut self, l: L, r: R) -> Option<R>;

    /// Removes and returns the pair stored under `l`
    fn remove(&mut self, l: &L) -> Option<(L, R)>;

    /// Removes every pair
    fn clear(&mut self);

    /// Consumes the store, yielding every pair
    fn into_entries(self) -> Self::Entries;
}

/// A [`Store`] that can be traversed in ascending order of `L`
pub trait OrderedStore<L, R>: Store<L, R> {
    /// Borrowing iterator over stored pairs, ascending by `L`
    type Sorted<'a>: DoubleEndedIterator<Item = (&'a L, &'a R)>
        + ExactSizeIterator
    where
        Self: 'a,
        L: 'a,
        R: 'a;

    /// Iterates over stored pairs in ascending order of `L`
    fn iter_sorted(&self) -> Self::Sorted<'_>;
}

impl<L: Ord, R> Store<L, R> for BTreeMap<L, R> {
    type Entries = std::collections::btree_map::IntoIter<L, R>;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn max_len(&self) -> usize {
        usize::MAX / size_of::<(L, R)>().max(1)
    }

    fn get(&self, l: &L) -> Option<&R> {
        BTreeMap::get(self, l)
    }

    fn insert(&mut self, l: L, r: R) -> Option<R> {
        BTreeMap::insert(self, l, r)
    }

    fn remove(&mut self, l: &L) -> Option<(L, R)> {
        self.remove_entry(l)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }
}

impl<L: Ord, R> OrderedStore<L, R> for BTreeMap<L, R> {
    type Sorted<'a>
        = std::collections::btree_map::Iter<'a, L, R>
    where
        Self: 'a,
        L: 'a,
        R: 'a;

    fn iter_sorted(&self) -> Self::Sorted<'_> {
        self.iter()
    }
}
