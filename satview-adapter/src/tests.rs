use crate::*;

use std::fs;

use satview::{
    MemorySelectionStore, PersistentSelection, SelectionStore, SortDirection, SortState,
    ToggleOutcome, WindowError,
};

fn sat(id: &str, name: &str, object_type: &str, orbit: &str) -> Satellite {
    Satellite::new(id, name)
        .with_object_type(object_type)
        .with_orbit_code(orbit)
}

fn fleet(n: usize) -> Vec<Satellite> {
    (0..n)
        .map(|i| {
            sat(
                &(10_000 + i).to_string(),
                &format!("SAT-{i:04}"),
                OBJECT_TYPES[i % 4],
                ORBIT_CODES[i % 5],
            )
        })
        .collect()
}

fn stations() -> Vec<Satellite> {
    vec![
        sat("25544", "ISS (ZARYA)", "PAYLOAD", "LEO"),
        sat("48274", "CSS (TIANHE)", "PAYLOAD", "LEO"),
        sat("900", "STARLINK DEBRIS", "DEBRIS", "LEO1"),
        sat("43013", "ATLAS R/B", "ROCKET BODY", "GTO"),
    ]
}

fn source(
    rows: Vec<Satellite>,
) -> impl FnMut(&CatalogQuery) -> Result<Vec<Satellite>, CatalogError> {
    move |_| Ok(rows.clone())
}

fn failing(
    err: fn() -> CatalogError,
) -> impl FnMut(&CatalogQuery) -> Result<Vec<Satellite>, CatalogError> {
    move |_| Err(err())
}

fn controller() -> CatalogController<MemorySelectionStore<String>> {
    CatalogController::new(BrowserConfig::default(), MemorySelectionStore::new()).unwrap()
}

fn ids(rows: &[Satellite]) -> Vec<&str> {
    rows.iter().map(|s| s.norad_cat_id.as_str()).collect()
}

#[test]
fn decodes_catalog_payload() {
    let body = r#"{
        "statusCode": 200,
        "data": [
            {
                "noradCatId": "25544",
                "intlDes": "1998-067A",
                "name": "ISS (ZARYA)",
                "launchDate": "1998-11-20",
                "decayDate": null,
                "objectType": "PAYLOAD",
                "launchSiteCode": "TYMSC",
                "countryCode": "ISS",
                "orbitCode": "{LEO}"
            },
            { "noradCatId": 48274, "name": "CSS (TIANHE)", "intlDes": null }
        ]
    }"#;
    let rows = decode_catalog(body).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].intl_des, "1998-067A");
    assert_eq!(rows[0].decay_date, None);
    assert_eq!(rows[0].orbit_code, "{LEO}");
    assert_eq!(rows[1].norad_cat_id, "48274");
    assert_eq!(rows[1].intl_des, "");
    assert_eq!(rows[1].object_type_class(), "object-type-unknown");
}

#[test]
fn zero_status_code_is_not_an_error() {
    let body = r#"{"statusCode":0,"data":[{"noradCatId":"25544","name":"ISS (ZARYA)"}]}"#;
    let rows = decode_catalog(body).unwrap();
    assert_eq!(ids(&rows), vec!["25544"]);
}

#[test]
fn payload_without_data_is_empty() {
    assert!(decode_catalog("{}").unwrap().is_empty());
    assert!(decode_catalog(r#"{"statusCode":200}"#).unwrap().is_empty());
}

#[test]
fn api_error_envelope_carries_message() {
    let err = decode_catalog(r#"{"statusCode":500,"message":"upstream unavailable"}"#).unwrap_err();
    assert_eq!(err.to_string(), "upstream unavailable");

    let err = decode_catalog(r#"{"statusCode":400}"#).unwrap_err();
    assert_eq!(err.to_string(), "API Error");
}

#[test]
fn invalid_payload_is_a_parse_error() {
    assert!(matches!(
        decode_catalog("<html>"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn http_status_check() {
    assert!(check_http_status(200).is_ok());
    assert!(check_http_status(204).is_ok());
    let err = check_http_status(404).unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[test]
fn query_builds_request_url() {
    let query = CatalogFilter::default().query();
    let pairs = query.query_pairs();
    assert_eq!(pairs[0].0, "objectTypes");
    assert_eq!(pairs[0].1, "PAYLOAD,ROCKET BODY,DEBRIS,UNKNOWN");
    assert_eq!(pairs[1].0, "attributes");
    assert!(pairs[1].1.starts_with("noradCatId,intlDes,name,"));

    let base = url::Url::parse(DEFAULT_API_BASE_URL).unwrap();
    let url = query.url(&base).unwrap();
    assert_eq!(url.path(), "/v1/satellites");
    assert!(
        url.as_str()
            .contains("objectTypes=PAYLOAD%2CROCKET+BODY%2CDEBRIS%2CUNKNOWN")
    );
}

#[test]
fn query_omits_empty_object_types() {
    let pairs = CatalogQuery::default().query_pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "attributes");
}

#[test]
fn filter_query_keeps_canonical_type_order() {
    let mut filter = CatalogFilter::default();
    assert!(!filter.toggle_object_type("PAYLOAD"));
    assert!(filter.toggle_object_type("PAYLOAD"));
    assert!(!filter.toggle_object_type("ROCKET BODY"));
    assert_eq!(
        filter.query().object_types,
        vec!["PAYLOAD", "DEBRIS", "UNKNOWN"]
    );
}

#[test]
fn filter_matches_searches_and_facets() {
    let mut filter = CatalogFilter::default();
    filter.name = "iss".to_owned();
    assert_eq!(ids(&filter.apply(stations())), vec!["25544"]);

    let mut filter = CatalogFilter::default();
    filter.norad_id = "48".to_owned();
    assert_eq!(ids(&filter.apply(stations())), vec!["48274"]);

    let mut filter = CatalogFilter::default();
    filter.toggle_orbit_code("LEO");
    assert_eq!(
        ids(&filter.apply(stations())),
        vec!["25544", "48274", "900"]
    );

    let mut filter = CatalogFilter::default();
    filter.toggle_object_type("PAYLOAD");
    assert_eq!(ids(&filter.apply(stations())), vec!["900", "43013"]);

    filter.reset();
    assert_eq!(filter, CatalogFilter::default());
}

#[test]
fn filter_counts_per_facet() {
    let counts = filter_counts(&stations());
    assert_eq!(counts.object_type("PAYLOAD"), 2);
    assert_eq!(counts.object_type("DEBRIS"), 1);
    assert_eq!(counts.object_type("UNKNOWN"), 0);
    // LEO1 also contains LEO.
    assert_eq!(counts.orbit_code("LEO"), 3);
    assert_eq!(counts.orbit_code("LEO1"), 1);
    assert_eq!(counts.orbit_code("GTO"), 1);
    assert_eq!(counts.orbit_code("UNKNOWN"), 0);
    assert_eq!(counts.orbit_codes.len(), ORBIT_CODES.len());
}

#[test]
fn comparator_table_treats_norad_id_as_numeric() {
    let mut rows = stations();
    let mut sorter = satview::Sorter::new(comparators());
    sorter.apply_sort(fields::NORAD_CAT_ID);
    sorter.sort(&mut rows);
    assert_eq!(ids(&rows), vec!["900", "25544", "43013", "48274"]);
    assert!(fields::ALL.iter().all(|f| sorter.table().contains(f)));
}

#[test]
fn json_selection_store_round_trips() {
    let mut store = JsonSelectionStore::new(MemoryStorage::new());
    assert_eq!(store.load(), Ok(None));

    store.save(&["25544".to_owned(), "48274".to_owned()]);
    let raw = store.backend().get_item(DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(raw.as_deref(), Some(r#"["25544","48274"]"#));

    let selection: PersistentSelection<String, _> = PersistentSelection::open(store);
    assert!(selection.contains(&"25544".to_owned()));
    assert!(selection.contains(&"48274".to_owned()));
    assert_eq!(selection.len(), 2);
}

#[test]
fn json_selection_store_rejects_corrupt_data() {
    let mut backend = MemoryStorage::new();
    backend.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
    let mut store = JsonSelectionStore::new(backend);
    assert!(store.load().is_err());

    let selection: PersistentSelection<String, _> = PersistentSelection::open(store);
    assert!(selection.is_empty());
}

#[test]
fn file_storage_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut storage = FileStorage::new(&path);
    assert_eq!(storage.get_item("a").unwrap(), None);
    storage.set_item("a", "1").unwrap();
    storage.set_item("b", "2").unwrap();

    let mut reopened = FileStorage::new(&path);
    assert_eq!(reopened.get_item("a").unwrap().as_deref(), Some("1"));
    reopened.remove_item("a").unwrap();
    assert_eq!(storage.get_item("a").unwrap(), None);
    assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn corrupt_storage_file_yields_empty_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "[1, 2").unwrap();

    let storage = FileStorage::new(&path);
    assert!(matches!(storage.get_item("x"), Err(StorageError::Json(_))));

    let store = JsonSelectionStore::new(storage);
    let selection: PersistentSelection<String, _> = PersistentSelection::open(store);
    assert!(selection.is_empty());
}

#[test]
fn config_defaults_are_valid() {
    let config = BrowserConfig::default();
    config.validate().unwrap();
    assert_eq!(config.storage_key, "selectedSatellites");
    assert_eq!(config.max_selected, 10);

    let options = config.list_options().unwrap();
    assert_eq!(options.row_height, 49);
    assert_eq!(options.viewport_height, 600);
    assert_eq!(options.buffer_size, 5);
    assert_eq!(options.columns.len(), 6);
}

#[test]
fn config_overrides_from_json() {
    let config = BrowserConfig::from_json_str(
        r#"{
            "viewportHeight": 300,
            "bufferSize": 2,
            "defaultSort": { "key": "launchDate", "direction": "Descending" }
        }"#,
    )
    .unwrap();
    assert_eq!(config.viewport_height, 300);
    assert_eq!(config.buffer_size, 2);
    assert_eq!(config.row_height, 49);
    assert_eq!(
        config.default_sort,
        SortState::new("launchDate", SortDirection::Descending)
    );
}

#[test]
fn config_rejects_invalid_values() {
    assert!(matches!(
        BrowserConfig::from_json_str(r#"{"rowHeight": 0}"#),
        Err(ConfigError::Geometry(WindowError::ZeroRowHeight))
    ));
    assert!(matches!(
        BrowserConfig::from_json_str(r#"{"maxSelected": 0}"#),
        Err(ConfigError::ZeroSelectionLimit)
    ));
    assert!(matches!(
        BrowserConfig::from_json_str(r#"{"apiBaseUrl": "not a url"}"#),
        Err(ConfigError::Url(_))
    ));
    assert!(matches!(
        BrowserConfig::from_json_str(r#"{"bogus": true}"#),
        Err(ConfigError::Json(_))
    ));

    let sort = r#"{"defaultSort": {"key": "bogus", "direction": "Ascending"}}"#;
    match BrowserConfig::from_json_str(sort) {
        Err(ConfigError::UnknownSortField(key)) => assert_eq!(key, "bogus"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("browser.json");
    fs::write(&path, r#"{"maxSelected": 3}"#).unwrap();
    assert_eq!(BrowserConfig::from_path(&path).unwrap().max_selected, 3);
    assert!(matches!(
        BrowserConfig::from_path(dir.path().join("missing.json")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn controller_loads_and_sorts_by_name() {
    let mut c = controller();
    assert_eq!(c.status(), &CatalogStatus::Idle);

    c.refresh(&mut source(stations()));
    assert_eq!(c.status(), &CatalogStatus::Ready);
    assert_eq!(c.results_count(), 4);
    assert_eq!(ids(c.rows()), vec!["43013", "48274", "25544", "900"]);
    assert_eq!(c.filter_counts().object_type("PAYLOAD"), 2);
    assert_eq!(c.filter_counts().orbit_code("LEO"), 3);
}

#[test]
fn controller_sort_toggles_and_ignores_plain_columns() {
    let mut c = controller();
    c.refresh(&mut source(stations()));

    let state = c.apply_sort(fields::NORAD_CAT_ID);
    assert_eq!(state, SortState::ascending(fields::NORAD_CAT_ID));
    assert_eq!(ids(c.rows()), vec!["900", "25544", "43013", "48274"]);

    let state = c.request_sort(fields::NORAD_CAT_ID).unwrap();
    assert_eq!(state.direction, SortDirection::Descending);
    assert_eq!(ids(c.rows()), vec!["48274", "43013", "25544", "900"]);

    assert_eq!(c.request_sort(fields::ORBIT_CODE), None);
    assert_eq!(c.sort_state().key, fields::NORAD_CAT_ID);

    let state = c.request_sort(fields::LAUNCH_DATE).unwrap();
    assert_eq!(state, SortState::ascending(fields::LAUNCH_DATE));
}

#[test]
fn controller_applies_search_filters_on_refresh() {
    let mut c = controller();
    c.filter_mut().name = "iss".to_owned();
    c.refresh(&mut source(stations()));
    assert_eq!(ids(c.rows()), vec!["25544"]);

    c.reset_filters(&mut source(stations()));
    assert_eq!(c.results_count(), 4);

    c.filter_mut().toggle_orbit_code("LEO");
    c.refresh(&mut source(stations()));
    assert_eq!(c.results_count(), 3);
}

#[test]
fn controller_begin_loading_reports_query() {
    let mut c = controller();
    c.filter_mut().toggle_object_type("DEBRIS");
    let query = c.begin_loading();
    assert!(c.is_loading());
    assert_eq!(
        query.object_types,
        vec!["PAYLOAD", "ROCKET BODY", "UNKNOWN"]
    );
}

#[test]
fn controller_passes_fetch_failures_through() {
    let mut c = controller();
    c.refresh(&mut source(stations()));

    c.refresh(&mut failing(|| CatalogError::Http { status: 503 }));
    assert_eq!(c.error_message(), Some("HTTP error! status: 503"));
    // Previous rows stay available for when the shell retries.
    assert_eq!(c.results_count(), 4);

    c.refresh(&mut failing(|| CatalogError::transport("Failed to fetch")));
    assert_eq!(
        c.status(),
        &CatalogStatus::Failed("Failed to fetch".to_owned())
    );

    c.refresh(&mut source(stations()));
    assert_eq!(c.error_message(), None);
}

#[test]
fn controller_surfaces_capacity_message() {
    let mut c = controller();
    c.refresh(&mut source(fleet(30)));

    for i in 0..10 {
        assert_eq!(c.toggle_row(i), Some(ToggleOutcome::Added));
    }
    assert_eq!(c.selection_message(), None);

    let outcome = c.toggle_row(10).unwrap();
    assert!(!outcome.applied());
    assert_eq!(c.selection_message(), Some("Maximum 10 selections allowed"));
    assert_eq!(c.selected_count(), 10);
    assert!(!c.is_selected("10010"));

    assert_eq!(c.toggle_row(0), Some(ToggleOutcome::Removed));
    assert_eq!(c.selection_message(), None);
    assert_eq!(c.toggle_row(500), None);
}

#[test]
fn controller_uses_configured_limit() {
    let config = BrowserConfig::default().with_max_selected(2);
    let mut c = CatalogController::new(config, MemorySelectionStore::new()).unwrap();
    c.toggle_selection("1");
    c.toggle_selection("2");
    assert!(!c.toggle_selection("3").applied());
    assert_eq!(c.selection_message(), Some("Maximum 2 selections allowed"));
}

#[test]
fn controller_restores_selection_from_storage() {
    let store = JsonSelectionStore::new(MemoryStorage::new());
    let mut c = CatalogController::new(BrowserConfig::default(), store).unwrap();
    c.refresh(&mut source(fleet(5)));
    c.toggle_selection("10003");
    c.toggle_selection("10001");

    let store = c.selection_store().clone();
    let restored = CatalogController::new(BrowserConfig::default(), store).unwrap();
    assert_eq!(restored.selected_keys(), vec!["10001", "10003"]);
}

#[test]
fn controller_starts_empty_on_corrupt_storage() {
    let mut backend = MemoryStorage::new();
    backend.set_item(DEFAULT_STORAGE_KEY, "42; drop").unwrap();
    let store = JsonSelectionStore::new(backend);
    let c = CatalogController::new(BrowserConfig::default(), store).unwrap();
    assert_eq!(c.selected_count(), 0);
}

#[test]
fn controller_renders_only_the_window() {
    let mut c = controller();
    c.refresh(&mut source(fleet(1_000)));
    c.toggle_selection("10020");

    let window = c.on_scroll(980);
    assert_eq!((window.start_index, window.end_index), (15, 38));

    let rows = c.visible_rows();
    assert_eq!(rows.len(), 23);
    assert_eq!(rows[0].index, 15);
    assert_eq!(rows[0].top, 15 * 49);
    let selected: Vec<_> = rows
        .iter()
        .filter(|r| r.selected)
        .map(|r| r.row.norad_cat_id.as_str())
        .collect();
    assert_eq!(selected, vec!["10020"]);
    assert_eq!(c.render_window().count(), 23);

    let headers: Vec<_> = c
        .header_cells()
        .map(|h| (h.column.field.as_str(), h.indicator))
        .collect();
    assert_eq!(headers[0], (fields::NAME, Some(SortDirection::Ascending)));
    assert!(headers[1..].iter().all(|(_, ind)| ind.is_none()));
}

#[test]
fn controller_clamps_scroll_when_results_shrink() {
    let mut c = controller();
    c.refresh(&mut source(fleet(1_000)));
    c.on_scroll(40_000);
    assert_eq!(c.list().scroll_offset(), 40_000);

    c.filter_mut().norad_id = "1000".to_owned();
    c.refresh(&mut source(fleet(1_000)));
    assert_eq!(c.results_count(), 10);
    assert_eq!(c.list().scroll_offset(), 0);
    assert_eq!(c.list().window().indices(), 0..10);
    assert_eq!(c.visible_rows().len(), 10);
}

#[test]
fn controller_switches_pages_with_a_selection() {
    let mut c = controller();
    c.refresh(&mut source(stations()));
    assert!(!c.proceed());
    assert_eq!(c.page(), Page::Catalog);

    c.toggle_selection("900");
    c.toggle_selection("25544");
    c.toggle_selection("99999");
    c.apply_sort(fields::NAME);

    assert!(c.proceed());
    assert_eq!(c.page(), Page::Selected);
    let selected: Vec<_> = c
        .selected_rows()
        .into_iter()
        .map(|s| s.norad_cat_id.as_str())
        .collect();
    assert_eq!(selected, vec!["25544", "900"]);
    assert_eq!(c.selected_count(), 3);

    c.go_back();
    assert_eq!(c.page(), Page::Catalog);
}
