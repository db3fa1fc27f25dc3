use std::collections::{BTreeMap, BTreeSet};

use crate::{CatalogQuery, OBJECT_TYPES, ORBIT_CODES, Satellite};

/// Number of rows matching each object type and orbit code facet.
///
/// Kept as two maps since `UNKNOWN` is both an object type and an orbit code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub object_types: BTreeMap<String, usize>,
    pub orbit_codes: BTreeMap<String, usize>,
}

impl FilterCounts {
    pub fn object_type(&self, object_type: &str) -> usize {
        self.object_types.get(object_type).copied().unwrap_or(0)
    }

    pub fn orbit_code(&self, orbit_code: &str) -> usize {
        self.orbit_codes.get(orbit_code).copied().unwrap_or(0)
    }
}

/// The search and facet filters applied to the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Case-insensitive substring of the object name.
    pub name: String,
    /// Substring of the NORAD catalog id.
    pub norad_id: String,
    pub object_types: BTreeSet<String>,
    /// A row matches when any selected code occurs in its orbit code.
    pub orbit_codes: BTreeSet<String>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            name: String::new(),
            norad_id: String::new(),
            object_types: OBJECT_TYPES.iter().map(|t| t.to_string()).collect(),
            orbit_codes: BTreeSet::new(),
        }
    }
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to every object type, no orbit codes and empty searches.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_object_type(&mut self, object_type: &str) -> bool {
        toggle(&mut self.object_types, object_type)
    }

    pub fn toggle_orbit_code(&mut self, orbit_code: &str) -> bool {
        toggle(&mut self.orbit_codes, orbit_code)
    }

    /// The server-side request for this filter. Object types keep their canonical order.
    pub fn query(&self) -> CatalogQuery {
        let mut types: Vec<&str> = OBJECT_TYPES
            .iter()
            .copied()
            .filter(|t| self.object_types.contains(*t))
            .collect();
        types.extend(
            self.object_types
                .iter()
                .map(String::as_str)
                .filter(|t| !OBJECT_TYPES.contains(t)),
        );
        CatalogQuery::new(types)
    }

    pub fn matches(&self, sat: &Satellite) -> bool {
        self.matches_name(sat)
            && self.matches_norad_id(sat)
            && self.object_types.contains(&sat.object_type)
            && self.matches_orbit(sat)
    }

    /// Keeps the matching rows, in their original order.
    pub fn apply(&self, rows: Vec<Satellite>) -> Vec<Satellite> {
        rows.into_iter().filter(|s| self.matches(s)).collect()
    }

    fn matches_name(&self, sat: &Satellite) -> bool {
        self.name.is_empty() || sat.name.to_lowercase().contains(&self.name.to_lowercase())
    }

    fn matches_norad_id(&self, sat: &Satellite) -> bool {
        self.norad_id.is_empty() || sat.norad_cat_id.contains(self.norad_id.as_str())
    }

    fn matches_orbit(&self, sat: &Satellite) -> bool {
        self.orbit_codes.is_empty()
            || self
                .orbit_codes
                .iter()
                .any(|code| sat.orbit_code.contains(code.as_str()))
    }
}

/// Facet counts over `rows`: exact matches per object type, substring matches per orbit code.
///
/// Orbit codes overlap (`LEO1` also counts towards `LEO`), as they do in the filter itself.
pub fn filter_counts(rows: &[Satellite]) -> FilterCounts {
    let mut counts = FilterCounts::default();
    for t in OBJECT_TYPES {
        let n = rows.iter().filter(|s| s.object_type == t).count();
        counts.object_types.insert(t.to_owned(), n);
    }
    for code in ORBIT_CODES {
        let n = rows.iter().filter(|s| s.orbit_code.contains(code)).count();
        counts.orbit_codes.insert(code.to_owned(), n);
    }
    counts
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_owned());
        true
    }
}
