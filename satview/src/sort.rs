use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Field used when no sort column has been activated yet.
pub const DEFAULT_SORT_KEY: &str = "name";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The active sort column and direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Returns the state after the user activates the sort column `field`.
    ///
    /// Re-activating the current key flips the direction; any other key starts ascending.
    pub fn apply_sort(&self, field: &str) -> Self {
        if self.key == field {
            Self::new(field, self.direction.flip())
        } else {
            Self::ascending(field)
        }
    }

    /// The direction to display next to `field`, if it is the active sort key.
    pub fn indicator(&self, field: &str) -> Option<SortDirection> {
        (self.key == field).then_some(self.direction)
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::ascending(DEFAULT_SORT_KEY)
    }
}

/// An ascending comparison between two rows.
pub type Comparator<R> = Arc<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

/// Per-field ordering rules, declared up front instead of inferred from values.
pub struct ComparatorTable<R> {
    entries: BTreeMap<String, Comparator<R>>,
}

impl<R: 'static> ComparatorTable<R> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Declares `field` as text, compared lexicographically by byte value.
    pub fn with_text(
        self,
        field: impl Into<String>,
        get: impl Fn(&R) -> &str + Send + Sync + 'static,
    ) -> Self {
        self.with_comparator(field, move |a, b| get(a).cmp(get(b)))
    }

    /// Declares `field` as numeric text: both sides are parsed with [`parse_leading_int`]
    /// before comparison, so unparseable values order as zero.
    pub fn with_numeric(
        self,
        field: impl Into<String>,
        get: impl Fn(&R) -> &str + Send + Sync + 'static,
    ) -> Self {
        self.with_comparator(field, move |a, b| {
            parse_leading_int(get(a)).cmp(&parse_leading_int(get(b)))
        })
    }

    pub fn with_comparator(
        mut self,
        field: impl Into<String>,
        cmp: impl Fn(&R, &R) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.entries.insert(field.into(), Arc::new(cmp));
        self
    }
}

impl<R> ComparatorTable<R> {
    pub fn get(&self, field: &str) -> Option<Comparator<R>> {
        self.entries.get(field).map(Arc::clone)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<R: 'static> Default for ComparatorTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ComparatorTable<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<R> fmt::Debug for ComparatorTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Parses the leading integer of `s`, ignoring leading whitespace and any trailing garbage.
///
/// Returns `0` when no digits are present. Values outside `i64` saturate.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut saw_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        saw_digit = true;
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(d)
        } else {
            value.saturating_add(d)
        };
    }

    if saw_digit { value } else { 0 }
}

/// Holds the sort state and the comparator resolved for it.
///
/// The comparator is looked up once per [`Sorter::apply_sort`], never per comparison.
pub struct Sorter<R> {
    table: ComparatorTable<R>,
    state: SortState,
    active: Option<Comparator<R>>,
}

impl<R> Sorter<R> {
    pub fn new(table: ComparatorTable<R>) -> Self {
        Self::with_state(table, SortState::default())
    }

    pub fn with_state(table: ComparatorTable<R>, state: SortState) -> Self {
        let active = table.get(&state.key);
        Self {
            table,
            state,
            active,
        }
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    pub fn table(&self) -> &ComparatorTable<R> {
        &self.table
    }

    /// Activates the sort column `field` and returns the new state.
    pub fn apply_sort(&mut self, field: &str) -> SortState {
        let next = self.state.apply_sort(field);
        self.set_state(next);
        self.state.clone()
    }

    pub fn set_state(&mut self, state: SortState) {
        self.active = self.table.get(&state.key);
        if self.active.is_none() {
            swarn!(field = %state.key, "no comparator for sort field; order left unchanged");
        }
        sdebug!(field = %state.key, direction = ?state.direction, "sort state changed");
        self.state = state;
    }

    /// Compares two rows under the current state. Undeclared fields compare equal.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        match &self.active {
            Some(cmp) => self.state.direction.apply(cmp(a, b)),
            None => Ordering::Equal,
        }
    }

    /// Sorts `rows` in place. Equal rows keep their relative order.
    pub fn sort(&self, rows: &mut [R]) {
        // `sort_by` is a stable merge sort.
        rows.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns the permutation that orders `rows`, leaving `rows` untouched.
    pub fn sorted_indices(&self, rows: &[R]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|&a, &b| self.compare(&rows[a], &rows[b]));
        order
    }

    pub fn sorted<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let mut out: Vec<&R> = rows.iter().collect();
        out.sort_by(|a, b| self.compare(a, b));
        out
    }
}

impl<R> Clone for Sorter<R> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            state: self.state.clone(),
            active: self.active.clone(),
        }
    }
}

impl<R> fmt::Debug for Sorter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("state", &self.state)
            .field("fields", &self.table)
            .field("resolved", &self.active.is_some())
            .finish()
    }
}
