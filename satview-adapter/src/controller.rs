use satview::{
    HeaderCell, PersistentSelection, RenderedRow, RowKey, RowWindow, SelectionStore, SortState,
    Sorter, ToggleOutcome, VirtualList, capacity_message,
};

use crate::filter::filter_counts;
use crate::satellite::comparators;
use crate::{
    BrowserConfig, CatalogError, CatalogFilter, CatalogQuery, CatalogSource, ConfigError,
    FilterCounts, Satellite,
};

/// Where the catalog fetch currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    Idle,
    Loading,
    Ready,
    /// The fetch failed; the message is shown unchanged.
    Failed(String),
}

/// Which of the two views the shell should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Catalog,
    Selected,
}

/// A framework-neutral controller that wires the catalog into the list core.
///
/// Data flows one way: fetched rows → filter → sort → window. The controller holds no UI
/// objects; shells drive it with:
/// - `refresh` (or `begin_loading` + `load_result` for async transports)
/// - `on_scroll` on scroll events
/// - `toggle_row` / `toggle_selection` on checkbox clicks
/// - `request_sort` on header clicks
#[derive(Debug)]
pub struct CatalogController<S> {
    config: BrowserConfig,
    status: CatalogStatus,
    filter: CatalogFilter,
    counts: FilterCounts,
    /// Filtered rows in fetch order.
    catalog: Vec<Satellite>,
    /// `catalog` under the current sort.
    sorted: Vec<Satellite>,
    sorter: Sorter<Satellite>,
    list: VirtualList<RowKey>,
    selection: PersistentSelection<RowKey, S>,
    selection_message: Option<String>,
    page: Page,
}

impl<S: SelectionStore<RowKey>> CatalogController<S> {
    /// Creates a controller and restores the stored selection from `store`.
    pub fn new(config: BrowserConfig, store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let list = VirtualList::new(config.list_options()?, 0)?;
        let sorter = Sorter::with_state(comparators(), config.default_sort.clone());
        let selection = PersistentSelection::open_with_limit(store, config.max_selected);
        Ok(Self {
            config,
            status: CatalogStatus::Idle,
            filter: CatalogFilter::default(),
            counts: FilterCounts::default(),
            catalog: Vec::new(),
            sorted: Vec::new(),
            sorter,
            list,
            selection,
            selection_message: None,
            page: Page::Catalog,
        })
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Edits to the filter take effect on the next `refresh`.
    pub fn filter_mut(&mut self) -> &mut CatalogFilter {
        &mut self.filter
    }

    pub fn filter_counts(&self) -> &FilterCounts {
        &self.counts
    }

    /// Marks the catalog as loading and returns the request to send.
    pub fn begin_loading(&mut self) -> CatalogQuery {
        self.status = CatalogStatus::Loading;
        self.filter.query()
    }

    /// Applies a finished fetch. Failures keep the previous rows and surface the message.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn load_result(&mut self, result: Result<Vec<Satellite>, CatalogError>) {
        match result {
            Ok(rows) => {
                let fetched = rows.len();
                self.catalog = self.filter.apply(rows);
                self.counts = filter_counts(&self.catalog);
                self.resort();
                self.status = CatalogStatus::Ready;
                adebug!(fetched, kept = self.catalog.len(), "catalog loaded");
            }
            Err(err) => {
                awarn!(error = %err, "catalog fetch failed");
                self.status = CatalogStatus::Failed(err.to_string());
            }
        }
    }

    /// Fetches with the current filter and applies the result.
    pub fn refresh(&mut self, source: &mut impl CatalogSource) {
        let query = self.begin_loading();
        let result = source.fetch(&query);
        self.load_result(result);
    }

    /// Clears searches and facets, then fetches again.
    pub fn reset_filters(&mut self, source: &mut impl CatalogSource) {
        self.filter.reset();
        self.refresh(source);
    }

    /// Number of rows after filtering.
    pub fn results_count(&self) -> usize {
        self.sorted.len()
    }

    /// All filtered rows in display order.
    pub fn rows(&self) -> &[Satellite] {
        &self.sorted
    }

    pub fn list(&self) -> &VirtualList<RowKey> {
        &self.list
    }

    pub fn on_scroll(&mut self, offset: u64) -> RowWindow {
        self.list.on_scroll(offset)
    }

    pub fn render_window(&self) -> impl Iterator<Item = (usize, &Satellite)> {
        self.list.render_window(&self.sorted)
    }

    /// The rows to materialize, positioned and marked with their selection state.
    pub fn visible_rows(&self) -> Vec<RenderedRow<'_, Satellite>> {
        let selection = self.selection.selection();
        let list = &self.list;
        let mut out = Vec::with_capacity(list.window().len());
        list.for_each_rendered_row(&self.sorted, selection, |row| out.push(row));
        out
    }

    pub fn header_cells(&self) -> impl Iterator<Item = HeaderCell<'_>> {
        self.list.header_cells(self.sorter.state())
    }

    pub fn sort_state(&self) -> &SortState {
        self.sorter.state()
    }

    /// Activates the sort column `field` and reorders the rows.
    pub fn apply_sort(&mut self, field: &str) -> SortState {
        let state = self.sorter.apply_sort(field);
        self.resort();
        state
    }

    /// Handles a header click. Non-sortable columns are ignored.
    pub fn request_sort(&mut self, field: &str) -> Option<SortState> {
        if !self.list.request_sort(field) {
            return None;
        }
        Some(self.apply_sort(field))
    }

    /// Toggles the selection of the displayed row at `index`.
    pub fn toggle_row(&mut self, index: usize) -> Option<ToggleOutcome> {
        let key = self.list.toggle_row(index, &self.sorted)?.clone();
        Some(self.toggle_selection(key))
    }

    /// Toggles `key`. A rejected add sets the capacity message; an applied toggle clears it.
    pub fn toggle_selection(&mut self, key: impl Into<RowKey>) -> ToggleOutcome {
        let outcome = self.selection.toggle(key.into());
        self.selection_message = match outcome.reason() {
            Some(_) => Some(capacity_message(self.selection.limit())),
            None => None,
        };
        outcome
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.contains(&key.to_owned())
    }

    /// The selected keys, sorted for stable display.
    pub fn selected_keys(&self) -> Vec<RowKey> {
        let mut keys = self.selection.selected_keys();
        keys.sort();
        keys
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn selection_store(&self) -> &S {
        self.selection.store()
    }

    pub fn selection_message(&self) -> Option<&str> {
        self.selection_message.as_deref()
    }

    /// Catalog rows whose key is selected, in fetch order.
    ///
    /// Selected keys that are not in the current catalog are not listed.
    pub fn selected_rows(&self) -> Vec<&Satellite> {
        self.catalog
            .iter()
            .filter(|s| self.selection.contains(&s.norad_cat_id))
            .collect()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switches to the selected page. Does nothing without a selection.
    pub fn proceed(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.page = Page::Selected;
        true
    }

    pub fn go_back(&mut self) {
        self.page = Page::Catalog;
    }

    fn resort(&mut self) {
        self.sorted = self
            .sorter
            .sorted(&self.catalog)
            .into_iter()
            .cloned()
            .collect();
        self.list.set_count(self.sorted.len());
    }
}
