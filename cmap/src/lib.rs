//! cmap provides a [`Bimap`]: a map of unique keys paired with unique
//! values, with logarithmic lookup in **both** directions.
//!
//! An ordered map gives fast value-by-key lookup, but answering "which key
//! holds this value?" means scanning every entry.  A [`Bimap`] keeps two
//! ordered indices in lockstep, key to value and value to key, so both
//! lookups are `O(log n)`.  The price is doubled storage (each key and each
//! value is held once per index), so reach for it only when the reverse
//! lookup actually matters.
//!
//! # Construction and dual lookup
//! ```
//! use cmap::Bimap;
//!
//! let mut map = Bimap::from([(1, "ONE"), (2, "TWO"), (3, "THREE")]);
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get_value(&2)?, &"TWO");
//! assert_eq!(map.get_key(&"TWO")?, &2);
//!
//! map.insert(4, "FOUR");
//! assert_eq!(map.get_key(&"FOUR")?, &4);
//! # Ok::<(), cmap::Error>(())
//! ```
//!
//! # Synchronized mutation
//! Every mutating operation updates both indices, so they are always exact
//! transposes of each other.  Replacing a key's value un-maps the old value;
//! re-pairing an existing value evicts its old key:
//!
//! ```
//! use cmap::{Bimap, Overwritten};
//!
//! let mut map = Bimap::from([(1, "ONE"), (2, "TWO")]);
//! assert_eq!(map.insert(1, "UN"), Overwritten::Key(1, "ONE"));
//! assert!(map.get_key(&"ONE").is_err()); // no dangling reverse mapping
//!
//! assert_eq!(map.insert(9, "TWO"), Overwritten::Value(2, "TWO"));
//! assert_eq!(map.get_key(&"TWO").unwrap(), &9);
//! ```
//!
//! # Ordered traversal
//! Iteration walks the forward index, so entries always come out in
//! ascending key order; the iterator is double-ended, so `.rev()` walks in
//! descending key order.
//!
//! ```
//! use cmap::Bimap;
//!
//! let map = Bimap::from([(3, "THREE"), (1, "ONE"), (2, "TWO")]);
//! let keys: Vec<i32> = map.keys().copied().collect();
//! assert_eq!(keys, [1, 2, 3]);
//! ```
//!
//! The container is single-threaded: it is `Send` and `Sync` when its
//! contents are, but concurrent mutation needs external synchronization.
#![warn(missing_docs)]

mod bimap;
pub use bimap::{Bimap, Overwritten};

mod error;
pub use error::Error;

pub mod store;
