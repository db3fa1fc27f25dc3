use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::key::KeySet;
use crate::{MalformedState, RejectReason, RowKey, SelectionKey, ToggleOutcome};

/// Default upper bound on the number of selected rows.
pub const MAX_SELECTED: usize = 10;

/// The user-facing message for a rejected add.
pub fn capacity_message(limit: usize) -> String {
    format!("Maximum {limit} selections allowed")
}

/// A bounded set of selected row keys.
///
/// Membership checks are O(1) with `std`, so render loops can ask `contains` per row.
#[derive(Clone, Debug)]
pub struct SelectionSet<K = RowKey> {
    keys: KeySet<K>,
    limit: usize,
}

impl<K: SelectionKey> SelectionSet<K> {
    pub fn new() -> Self {
        Self::with_limit(MAX_SELECTED)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            keys: KeySet::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.len() >= self.limit
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Removes `key` if selected, otherwise adds it when there is room.
    ///
    /// A rejected add leaves the set untouched.
    pub fn toggle(&mut self, key: K) -> ToggleOutcome {
        if self.keys.remove(&key) {
            return ToggleOutcome::Removed;
        }
        match self.insert(key) {
            Ok(_) => ToggleOutcome::Added,
            Err(reason) => ToggleOutcome::Rejected(reason),
        }
    }

    /// Adds `key`. Returns `Ok(false)` when it was already selected.
    pub fn insert(&mut self, key: K) -> Result<bool, RejectReason> {
        if self.keys.contains(&key) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(RejectReason::AtCapacity);
        }
        self.keys.insert(key);
        Ok(true)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.keys.remove(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Adds keys until the limit is reached.
    ///
    /// Returns how many items were rejected. A key rejected twice counts twice.
    pub fn extend_bounded(&mut self, keys: impl IntoIterator<Item = K>) -> usize {
        let mut dropped = 0usize;
        for key in keys {
            if self.insert(key).is_err() {
                dropped = dropped.saturating_add(1);
            }
        }
        dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// A snapshot of the selected keys, in no particular order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys.iter().cloned().collect()
    }
}

impl<K: SelectionKey> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SelectionKey> PartialEq for SelectionSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.limit == other.limit && self.keys == other.keys
    }
}

impl<K: SelectionKey> Eq for SelectionSet<K> {}

/// Storage collaborator for the selection.
///
/// Writes are full snapshots, so the last successful save wins.
pub trait SelectionStore<K> {
    /// Returns `Ok(None)` when nothing was stored yet.
    fn load(&mut self) -> Result<Option<Vec<K>>, MalformedState>;

    /// Best-effort write; failures are the store's concern.
    fn save(&mut self, keys: &[K]);
}

impl<K, S: SelectionStore<K> + ?Sized> SelectionStore<K> for &mut S {
    fn load(&mut self) -> Result<Option<Vec<K>>, MalformedState> {
        (**self).load()
    }

    fn save(&mut self, keys: &[K]) {
        (**self).save(keys);
    }
}

/// An in-memory [`SelectionStore`], mainly for tests and headless shells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorySelectionStore<K> {
    saved: Option<Vec<K>>,
    malformed: Option<String>,
    save_count: usize,
}

impl<K: Clone> MemorySelectionStore<K> {
    pub fn new() -> Self {
        Self {
            saved: None,
            malformed: None,
            save_count: 0,
        }
    }

    pub fn with_keys(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            saved: Some(keys.into_iter().collect()),
            ..Self::new()
        }
    }

    /// A store whose next `load` reports corrupt data.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            malformed: Some(reason.into()),
            ..Self::new()
        }
    }

    pub fn saved(&self) -> Option<&[K]> {
        self.saved.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl<K: Clone> Default for MemorySelectionStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> SelectionStore<K> for MemorySelectionStore<K> {
    fn load(&mut self) -> Result<Option<Vec<K>>, MalformedState> {
        if let Some(reason) = self.malformed.take() {
            return Err(MalformedState::new(reason));
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, keys: &[K]) {
        self.saved = Some(keys.to_vec());
        self.save_count = self.save_count.saturating_add(1);
    }
}

/// A [`SelectionSet`] that writes itself to a [`SelectionStore`] after every applied change.
#[derive(Clone, Debug)]
pub struct PersistentSelection<K, S> {
    set: SelectionSet<K>,
    store: S,
}

impl<K, S> PersistentSelection<K, S>
where
    K: SelectionKey + Clone,
    S: SelectionStore<K>,
{
    pub fn open(store: S) -> Self {
        Self::open_with_limit(store, MAX_SELECTED)
    }

    /// Loads the stored selection. Corrupt data yields an empty selection; keys beyond `limit`
    /// are dropped.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn open_with_limit(mut store: S, limit: usize) -> Self {
        let mut set = SelectionSet::with_limit(limit);
        match store.load() {
            Ok(Some(keys)) => {
                let dropped = set.extend_bounded(keys);
                if dropped > 0 {
                    swarn!(
                        dropped,
                        limit,
                        "stored selection exceeds the limit; extra keys dropped"
                    );
                }
                sdebug!(restored = set.len(), "selection restored");
            }
            Ok(None) => {}
            Err(err) => {
                swarn!(error = %err, "ignoring stored selection");
            }
        }
        Self { set, store }
    }

    pub fn selection(&self) -> &SelectionSet<K> {
        &self.set
    }

    pub fn contains(&self, key: &K) -> bool {
        self.set.contains(key)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.set.limit()
    }

    pub fn selected_keys(&self) -> Vec<K> {
        self.set.keys()
    }

    pub fn toggle(&mut self, key: K) -> ToggleOutcome {
        let outcome = self.set.toggle(key);
        strace!(?outcome, len = self.set.len(), "toggle");
        if outcome.applied() {
            self.persist();
        }
        outcome
    }

    pub fn remove(&mut self, key: &K) -> bool {
        let removed = self.set.remove(key);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        if self.set.is_empty() {
            return;
        }
        self.set.clear();
        self.persist();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (SelectionSet<K>, S) {
        (self.set, self.store)
    }

    fn persist(&mut self) {
        let keys = self.set.keys();
        self.store.save(&keys);
    }
}
