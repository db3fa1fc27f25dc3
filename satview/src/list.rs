use crate::window::{WindowParams, window_unchecked};
use crate::{
    Column, ListOptions, RenderedRow, Row, RowKey, RowWindow, SelectionKey, SelectionSet,
    SortDirection, SortState, WindowError,
};

/// A column header paired with the sort indicator it should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderCell<'a> {
    pub column: &'a Column,
    pub indicator: Option<SortDirection>,
}

/// A headless windowed list over fixed-height rows.
///
/// The list owns nothing but its geometry and scroll offset. Rows, selection and sort state
/// belong to the caller and are passed in at render time:
/// - a spacer of `count * row_height` keeps the scrollbar honest
/// - each materialized row sits at `index * row_height` inside the spacer
/// - scrolling only recomputes the [`RowWindow`], which is O(1)
#[derive(Clone, Debug)]
pub struct VirtualList<K = RowKey> {
    options: ListOptions<K>,
    count: usize,
    scroll_offset: u64,
    window: RowWindow,
}

impl<K> VirtualList<K> {
    /// Creates a list over `count` rows, scrolled to the top.
    ///
    /// Fails when the configured row or viewport height is zero.
    pub fn new(options: ListOptions<K>, count: usize) -> Result<Self, WindowError> {
        options.validate()?;
        sdebug!(
            count,
            row_height = options.row_height,
            viewport_height = options.viewport_height,
            buffer_size = options.buffer_size,
            "VirtualList::new"
        );
        let mut list = Self {
            options,
            count,
            scroll_offset: 0,
            window: RowWindow::EMPTY,
        };
        list.recompute();
        Ok(list)
    }

    pub fn options(&self) -> &ListOptions<K> {
        &self.options
    }

    /// Replaces the options. On error the list keeps its previous options.
    pub fn set_options(&mut self, options: ListOptions<K>) -> Result<(), WindowError> {
        options.validate()?;
        self.options = options;
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        self.recompute();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut ListOptions<K>),
    ) -> Result<(), WindowError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn row_height(&self) -> u32 {
        self.options.row_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.options.viewport_height
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// The window computed for the latest scroll offset and count.
    pub fn window(&self) -> RowWindow {
        self.window
    }

    /// Height of the full list, i.e. the spacer the scroll container should contain.
    pub fn spacer_height(&self) -> u64 {
        (self.count as u64).saturating_mul(u64::from(self.options.row_height))
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.spacer_height()
            .saturating_sub(u64::from(self.options.viewport_height))
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Absolute offset of row `index` inside the spacer.
    pub fn row_top(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(u64::from(self.options.row_height))
    }

    /// Applies a scroll event from the UI. The offset is clamped to the scrollable extent.
    pub fn on_scroll(&mut self, offset: u64) -> RowWindow {
        let offset = self.clamp_scroll_offset(offset);
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.recompute();
            strace!(
                offset,
                start = self.window.start_index,
                end = self.window.end_index,
                "on_scroll"
            );
        }
        self.window
    }

    /// Updates the row count, e.g. after the filtered catalog changed.
    ///
    /// A scroll offset past the new extent is pulled back so no index beyond `count` is
    /// ever referenced.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        self.count = count;
        let clamped = self.clamp_scroll_offset(self.scroll_offset);
        if clamped != self.scroll_offset {
            sdebug!(
                from = self.scroll_offset,
                to = clamped,
                count,
                "scroll offset clamped"
            );
            self.scroll_offset = clamped;
        }
        self.recompute();
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) -> Result<(), WindowError> {
        self.update_options(|o| o.viewport_height = viewport_height)
    }

    /// Scrolls so that row `index` is at the top of the viewport (as far as the extent allows).
    ///
    /// Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize) -> u64 {
        let index = index.min(self.count.saturating_sub(1));
        let top = self.row_top(index);
        self.on_scroll(top);
        self.scroll_offset
    }

    /// The materialized rows in order, paired with their absolute index.
    pub fn render_window<'a, R>(&self, rows: &'a [R]) -> impl Iterator<Item = (usize, &'a R)> {
        let range = self.window.indices();
        let end = range.end.min(rows.len());
        let start = range.start.min(end);
        rows[start..end]
            .iter()
            .enumerate()
            .map(move |(i, row)| (start + i, row))
    }

    /// Visits each materialized row with its position and selection state.
    pub fn for_each_rendered_row<'a, R>(
        &self,
        rows: &'a [R],
        selection: &SelectionSet<K>,
        mut f: impl FnMut(RenderedRow<'a, R>),
    ) where
        R: Row<Key = K>,
        K: SelectionKey,
    {
        let height = self.options.row_height;
        for (index, row) in self.render_window(rows) {
            f(RenderedRow {
                index,
                top: self.row_top(index),
                height,
                row,
                selected: selection.contains(row.key()),
            });
        }
    }

    /// Forwards a checkbox click on row `index` to `on_row_toggle`.
    ///
    /// Returns the forwarded key, or `None` when `index` is out of bounds.
    pub fn toggle_row<'a, R>(&self, index: usize, rows: &'a [R]) -> Option<&'a K>
    where
        R: Row<Key = K>,
    {
        if index >= self.count {
            return None;
        }
        let key = rows.get(index)?.key();
        if let Some(cb) = &self.options.on_row_toggle {
            cb(key);
        }
        Some(key)
    }

    /// Forwards a header click to `on_sort_request`.
    ///
    /// When columns are configured only sortable ones are forwarded. Returns whether the
    /// request was forwarded.
    pub fn request_sort(&self, field: &str) -> bool {
        if !self.options.columns.is_empty() {
            match self.options.column(field) {
                Some(c) if c.sortable => {}
                _ => return false,
            }
        }
        if let Some(cb) = &self.options.on_sort_request {
            cb(field);
        }
        true
    }

    /// Header cells for the configured columns with the active sort indicator.
    pub fn header_cells<'a>(&'a self, sort: &'a SortState) -> impl Iterator<Item = HeaderCell<'a>> {
        self.options.columns.iter().map(move |column| HeaderCell {
            column,
            indicator: if column.sortable {
                sort.indicator(&column.field)
            } else {
                None
            },
        })
    }

    fn recompute(&mut self) {
        self.window = window_unchecked(WindowParams {
            scroll_offset: self.scroll_offset,
            row_height: self.options.row_height,
            viewport_height: self.options.viewport_height,
            total_count: self.count,
            buffer_size: self.options.buffer_size,
        });
    }
}
