#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// Bound for row identifiers stored in a [`crate::SelectionSet`].
///
/// With `std` the set is hashed, so membership checks are O(1). Without `std` it falls back to
/// an ordered set.
#[cfg(feature = "std")]
pub trait SelectionKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> SelectionKey for K {}

#[cfg(not(feature = "std"))]
pub trait SelectionKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> SelectionKey for K {}
