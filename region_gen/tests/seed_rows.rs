use region_gen::{DEFAULT_BATCH_SIZE, build_catalog, load_embedded, seed_rows};

#[test]
fn embedded_seed_rows() {
    let catalog = build_catalog(&load_embedded().expect("parse"));
    let rows = seed_rows(&catalog);
    assert_eq!(rows.cities.len(), 81);
    assert_eq!(rows.districts.len(), 969);
    assert!(rows.cities.iter().all(|c| c.region == "Türkiye"));

    let first = &rows.districts[0];
    assert_eq!(first.id, "01-01");
    assert_eq!(first.city_id, "01");
    assert_eq!(first.name, "Seyhan");
}

#[test]
fn default_batches() {
    let rows = seed_rows(&build_catalog(&load_embedded().expect("parse")));
    let sizes: Vec<usize> = rows.district_batches(DEFAULT_BATCH_SIZE).map(|b| b.len()).collect();
    assert_eq!(sizes.len(), 10);
    assert!(sizes[..9].iter().all(|&s| s == 100));
    assert_eq!(sizes[9], 69);
}
