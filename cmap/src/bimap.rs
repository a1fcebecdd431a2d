//! The bidirectional map container
use crate::{
    error::Error,
    store::{OrderedStore, Store},
};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// A map of unique keys paired with unique values, with logarithmic lookup
/// in both directions
///
/// Internally this is two independently owned indices kept in lockstep: a
/// forward index from key to value (ordered by key) and an inverse index
/// from value to key (ordered by value).  Every mutation updates both;
/// every lookup touches exactly one.  The indices are always exact
/// transposes of each other: `(k, v)` is in the forward index if and only
/// if `(v, k)` is in the inverse index.
///
/// Keys and values must be `Clone` because each is stored twice (once per
/// index).  With the default stores, both must also be `Ord`.
///
/// The store parameters `F` (forward) and `I` (inverse) select the backing
/// index strategy; see [`crate::store`].
pub struct Bimap<K, V, F = BTreeMap<K, V>, I = BTreeMap<V, K>> {
    fwd: F,
    inv: I,
    _phantom: PhantomData<(K, V)>,
}

impl<K, V> Bimap<K, V> {
    /// Builds an empty map backed by the default ordered indices
    pub fn new() -> Self {
        Self {
            fwd: BTreeMap::new(),
            inv: BTreeMap::new(),
            _phantom: PhantomData,
        }
    }
}

impl<K, V, F: Store<K, V>, I: Store<V, K>> Bimap<K, V, F, I> {
    /// Builds an empty map with a custom pair of index stores
    ///
    /// This is the construction-time hook for substituting a different
    /// backing strategy; [`Bimap::new`] covers the common (ordered) case.
    pub fn with_stores() -> Self {
        Self {
            fwd: F::default(),
            inv: I::default(),
            _phantom: PhantomData,
        }
    }

    /// Returns `true` if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries
    ///
    /// Both indices always hold exactly this many pairs.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.fwd.len(), self.inv.len());
        self.fwd.len()
    }

    /// Theoretical upper bound on the number of entries
    ///
    /// The smaller of the two indices' platform-defined ceilings; not a
    /// promise that a map of this size can be allocated.
    pub fn max_len(&self) -> usize {
        self.fwd.max_len().min(self.inv.max_len())
    }

    /// Removes every entry from both indices
    ///
    /// Afterwards [`Bimap::len`] is zero and every lookup misses.
    pub fn clear(&mut self) {
        self.fwd.clear();
        self.inv.clear();
    }

    /// Looks up the value paired with `key` in the forward index
    pub fn get_value(&self, key: &K) -> Result<&V, Error> {
        self.fwd.get(key).ok_or(Error::KeyNotFound)
    }

    /// Looks up the key paired with `value` in the inverse index
    pub fn get_key(&self, value: &V) -> Result<&K, Error> {
        self.inv.get(value).ok_or(Error::ValueNotFound)
    }

    /// Returns `true` if `key` is present in the forward index
    pub fn contains_key(&self, key: &K) -> bool {
        self.fwd.get(key).is_some()
    }

    /// Returns `true` if `value` is present in the inverse index
    pub fn contains_value(&self, value: &V) -> bool {
        self.inv.get(value).is_some()
    }

    /// Removes the entry stored under `key`, if any
    ///
    /// The inverse entry is removed using the value recorded under `key` at
    /// the time of the call.  Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let (key, value) = self.fwd.remove(key)?;
        self.inv.remove(&value);
        Some((key, value))
    }

    /// Removes the entry that maps back from `value`, if any
    pub fn remove_by_value(&mut self, value: &V) -> Option<(K, V)> {
        let (value, key) = self.inv.remove(value)?;
        self.fwd.remove(&key);
        Some((key, value))
    }
}

impl<K, V, F, I> Bimap<K, V, F, I>
where
    K: Clone + Eq,
    V: Clone + Eq,
    F: Store<K, V>,
    I: Store<V, K>,
{
    /// Inserts the pair `(key, value)`, evicting anything it collides with
    ///
    /// A collision on the key replaces that key's value, as in a plain map.
    /// A collision on the value evicts the value's previous pairing
    /// outright, forward entry included, so the two indices remain exact
    /// transposes and no key is left resolving to a stolen value.  The
    /// returned [`Overwritten`] describes everything displaced.
    pub fn insert(&mut self, key: K, value: V) -> Overwritten<K, V> {
        let by_key = self.remove(&key);
        let by_value = self.remove_by_value(&value);
        let out = match (by_key, by_value) {
            (None, None) => Overwritten::Neither,
            (Some((k, v)), None) if v == value => Overwritten::Pair(k, v),
            (Some((k, v)), None) => Overwritten::Key(k, v),
            (None, Some((k, v))) => Overwritten::Value(k, v),
            (Some(a), Some(b)) => Overwritten::Both(a, b),
        };
        self.fwd.insert(key.clone(), value.clone());
        self.inv.insert(value, key);
        out
    }
}

impl<K, V, F: Store<K, V>, I: Store<V, K>> Default for Bimap<K, V, F, I> {
    fn default() -> Self {
        Self::with_stores()
    }
}

impl<K, V, F: Clone, I: Clone> Clone for Bimap<K, V, F, I> {
    fn clone(&self) -> Self {
        Self {
            fwd: self.fwd.clone(),
            inv: self.inv.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<K, V, F, I> std::fmt::Debug for Bimap<K, V, F, I>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
    F: OrderedStore<K, V>,
    I: Store<V, K>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Traversal
//
// Only the forward index has a traversal surface, so iteration order is the
// single canonical one: ascending by key.  The inverse index stays private.

impl<K, V, F, I> Bimap<K, V, F, I>
where
    F: OrderedStore<K, V>,
    I: Store<V, K>,
{
    /// Iterates over entries in ascending key order
    ///
    /// The iterator is double-ended, so `iter().rev()` walks in descending
    /// key order.  Each call starts a fresh traversal.  A traversal borrows
    /// the map, so the usual ordered-map invalidation rule (no structural
    /// mutation while a position is live) is enforced at compile time.
    pub fn iter(&self) -> F::Sorted<'_> {
        self.fwd.iter_sorted()
    }

    /// Iterates over keys in ascending order
    pub fn keys(
        &self,
    ) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates over values in ascending order of their keys
    pub fn values(
        &self,
    ) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, v)| v)
    }
}

impl<'a, K, V, F, I> IntoIterator for &'a Bimap<K, V, F, I>
where
    F: OrderedStore<K, V>,
    I: Store<V, K>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = F::Sorted<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, F, I> IntoIterator for Bimap<K, V, F, I>
where
    F: Store<K, V>,
    I: Store<V, K>,
{
    type Item = (K, V);
    type IntoIter = F::Entries;

    fn into_iter(self) -> Self::IntoIter {
        self.fwd.into_entries()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Construction sugar

impl<K, V, F, I> Extend<(K, V)> for Bimap<K, V, F, I>
where
    K: Clone + Eq,
    V: Clone + Eq,
    F: Store<K, V>,
    I: Store<V, K>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, F, I> FromIterator<(K, V)> for Bimap<K, V, F, I>
where
    K: Clone + Eq,
    V: Clone + Eq,
    F: Store<K, V>,
    I: Store<V, K>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut out = Self::with_stores();
        out.extend(iter);
        out
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Bimap<K, V>
where
    K: Clone + Ord,
    V: Clone + Ord,
{
    /// Builds a map from an array of pairs, inserting them in sequence
    /// order: a later pair that collides with an earlier one overwrites it.
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The result of [`Bimap::insert`], describing any pairings that the new
/// entry displaced
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Overwritten<K, V> {
    /// Neither the key nor the value was previously present
    Neither,

    /// The exact `(key, value)` pairing was already present; the previous
    /// copy is returned and the map is otherwise unchanged
    Pair(K, V),

    /// The key was present with a different value; its pairing was evicted
    Key(K, V),

    /// The value was present under a different key; that pairing was
    /// evicted so the value could be re-paired
    Value(K, V),

    /// Key and value were present in two distinct pairings; both were
    /// evicted, so the map shrank by one entry
    Both((K, V), (K, V)),
}

impl<K, V> Overwritten<K, V> {
    /// Returns `true` if the insertion displaced an existing pairing
    pub fn did_overwrite(&self) -> bool {
        !matches!(self, Overwritten::Neither)
    }
}

////////////////////////////////////////////////////////////////////////////////
