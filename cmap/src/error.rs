//! Module containing the cmap universal error type
use thiserror::Error;

/// Universal error type for cmap
///
/// Lookup misses are the only failures the container can produce; every
/// other operation is total over its domain.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Key is not present in the forward index
    #[error("key is not present in the map")]
    KeyNotFound,

    /// Value is not present in the inverse index
    #[error("value is not present in the map")]
    ValueNotFound,
}
