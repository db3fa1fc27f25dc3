//! Satellite catalog glue for the `satview` crate.
//!
//! `satview` only knows about windows, selections and comparators. This crate supplies the
//! catalog-specific pieces a shell needs around it:
//!
//! - the [`Satellite`] row type and its comparator table
//! - catalog payload decoding and request building
//! - search and facet filters with per-facet counts
//! - storage backends that persist the selection as JSON
//! - a [`CatalogController`] tying it together, including the catalog/selected page switch
//!
//! No HTTP client or UI toolkit is bundled: shells implement [`CatalogSource`] with whatever
//! transport they have and render from the controller's state.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod config;
mod controller;
mod error;
mod filter;
mod payload;
mod satellite;
mod storage;

#[cfg(test)]
mod tests;

pub use config::{BrowserConfig, DEFAULT_API_BASE_URL};
pub use controller::{CatalogController, CatalogStatus, Page};
pub use error::{CatalogError, ConfigError, StorageError};
pub use filter::{CatalogFilter, FilterCounts, filter_counts};
pub use payload::{CATALOG_PATH, CatalogQuery, CatalogSource, check_http_status, decode_catalog};
pub use satellite::{OBJECT_TYPES, ORBIT_CODES, Satellite, comparators, default_columns, fields};
pub use storage::{
    DEFAULT_STORAGE_KEY, FileStorage, JsonSelectionStore, MemoryStorage, StorageBackend,
};
