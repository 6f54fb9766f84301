use std::fmt;

/// Errors returned by [`Tree`](crate::Tree) operations.
///
/// The only recoverable failure mode the core has is a duplicate key on insert;
/// everything else (`absent` on search, `missing-on-delete` on remove) is an
/// ordinary, expected outcome modeled with `Option`/`bool` rather than an error.
#[derive(Debug, PartialEq, Eq)]
pub enum BTreeError<V> {
    /// Returned by `insert` when an object with the same key is already present.
    /// Carries the rejected object back so the caller does not have to reconstruct
    /// or silently drop it.
    DuplicateKey(V),
}

impl<V> fmt::Display for BTreeError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(_) => write!(f, "an object with this key is already present"),
        }
    }
}

impl<V: fmt::Debug> std::error::Error for BTreeError<V> {}
