//! A headless core for browsing large object catalogs.
//!
//! The crate covers the parts of a catalog table that have real constraints:
//! - the row window: which rows to materialize for a scroll offset (O(1) per scroll event)
//! - a windowed list that positions those rows inside a full-height spacer
//! - a bounded selection set with pluggable persistence
//! - sort state with a declared, per-field comparator table and stable sorting
//!
//! It is UI-agnostic. A shell is expected to provide:
//! - the (already filtered) rows
//! - scroll offsets and viewport geometry
//! - a [`SelectionStore`] to persist the selection
//!
//! For catalog-specific glue (row type, payload decoding, filters, storage backends), see the
//! `satview-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod key;
mod list;
mod options;
mod row;
mod selection;
mod sort;
mod types;
mod window;


pub use error::{MalformedState, WindowError};
pub use key::SelectionKey;
pub use list::{HeaderCell, VirtualList};
pub use options::{
    Column, DEFAULT_BUFFER_SIZE, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, ListOptions,
    RowToggleCallback, SortRequestCallback,
};
pub use row::Row;
pub use selection::{
    MAX_SELECTED, MemorySelectionStore, PersistentSelection, SelectionSet, SelectionStore,
    capacity_message,
};
pub use sort::{
    Comparator, ComparatorTable, DEFAULT_SORT_KEY, SortDirection, SortState, Sorter,
    parse_leading_int,
};
pub use types::{RejectReason, RenderedRow, RowKey, RowWindow, ToggleOutcome};
pub use window::{WindowParams, compute_window};
