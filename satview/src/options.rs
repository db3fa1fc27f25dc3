use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::RowKey;
use crate::WindowError;
use crate::window::validate_geometry;

pub const DEFAULT_ROW_HEIGHT: u32 = 49;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
pub const DEFAULT_BUFFER_SIZE: usize = 5;

/// Fired with the key of a row whose checkbox was clicked.
pub type RowToggleCallback<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// Fired with the field name of a sortable column header that was clicked.
pub type SortRequestCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// A table column. Widths are configuration, not layout logic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub field: String,
    pub title: String,
    pub width: u32,
    pub sortable: bool,
}

impl Column {
    pub fn new(field: impl Into<String>, title: impl Into<String>, width: u32) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            width,
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: callbacks live in `Arc`s so a shell can tweak a field and hand the options
/// back through `VirtualList::set_options`.
pub struct ListOptions<K = RowKey> {
    pub row_height: u32,
    pub viewport_height: u32,
    /// Rows materialized above and below the visible rows.
    pub buffer_size: usize,
    pub columns: Vec<Column>,
    pub on_row_toggle: Option<RowToggleCallback<K>>,
    pub on_sort_request: Option<SortRequestCallback>,
}

impl<K> ListOptions<K> {
    pub fn new() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            buffer_size: DEFAULT_BUFFER_SIZE,
            columns: Vec::new(),
            on_row_toggle: None,
            on_sort_request: None,
        }
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    pub fn with_on_row_toggle(
        mut self,
        on_row_toggle: Option<impl Fn(&K) + Send + Sync + 'static>,
    ) -> Self {
        self.on_row_toggle = on_row_toggle.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_sort_request(
        mut self,
        on_sort_request: Option<impl Fn(&str) + Send + Sync + 'static>,
    ) -> Self {
        self.on_sort_request = on_sort_request.map(|f| Arc::new(f) as _);
        self
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        validate_geometry(self.row_height, self.viewport_height)
    }

    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }
}

impl<K> Default for ListOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for ListOptions<K> {
    fn clone(&self) -> Self {
        Self {
            row_height: self.row_height,
            viewport_height: self.viewport_height,
            buffer_size: self.buffer_size,
            columns: self.columns.clone(),
            on_row_toggle: self.on_row_toggle.clone(),
            on_sort_request: self.on_sort_request.clone(),
        }
    }
}

impl<K> core::fmt::Debug for ListOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("row_height", &self.row_height)
            .field("viewport_height", &self.viewport_height)
            .field("buffer_size", &self.buffer_size)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}
