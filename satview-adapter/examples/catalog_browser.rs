use satview_adapter::{
    BrowserConfig, CatalogController, CatalogError, CatalogQuery, JsonSelectionStore,
    MemoryStorage, OBJECT_TYPES, ORBIT_CODES, Satellite, decode_catalog,
};

// Stands in for the HTTP client a real shell would use.
fn fetch(query: &CatalogQuery) -> Result<Vec<Satellite>, CatalogError> {
    let base = BrowserConfig::default()
        .api_base_url()
        .map_err(|e| CatalogError::transport(e.to_string()))?;
    let url = query
        .url(&base)
        .map_err(|e| CatalogError::transport(e.to_string()))?;
    println!("GET {url}");

    let data: Vec<Satellite> = (0..5_000)
        .map(|i| {
            Satellite::new((20_000 + i).to_string(), format!("OBJECT {i}"))
                .with_object_type(OBJECT_TYPES[i % OBJECT_TYPES.len()])
                .with_orbit_code(ORBIT_CODES[i % ORBIT_CODES.len()])
        })
        .collect();
    let body = serde_json::json!({ "statusCode": 200, "data": data }).to_string();
    decode_catalog(&body)
}

fn main() {
    // Example: the catalog controller driven without any UI objects.
    //
    // A shell would:
    // - call refresh() on mount and when the object type facet changes
    // - forward scroll events to on_scroll() and render visible_rows()
    // - forward checkbox clicks to toggle_row() and header clicks to request_sort()
    let store = JsonSelectionStore::new(MemoryStorage::new());
    let mut c = CatalogController::new(BrowserConfig::default(), store).unwrap();

    c.filter_mut().toggle_object_type("DEBRIS");
    c.refresh(&mut fetch);
    println!("results={} status={:?}", c.results_count(), c.status());

    c.request_sort("noradCatId");
    c.on_scroll(12_345);
    for row in c.visible_rows().iter().take(3) {
        println!("#{} top={} {}", row.index, row.top, row.row.name);
    }

    for i in 0..11 {
        c.toggle_row(i);
    }
    println!(
        "selected={} message={:?}",
        c.selected_count(),
        c.selection_message()
    );

    if c.proceed() {
        println!("selected page: {} rows", c.selected_rows().len());
    }
}
