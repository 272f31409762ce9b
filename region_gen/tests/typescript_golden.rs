use region_data::RegionSource;
use region_gen::{build_catalog, build_region, load_embedded, render_typescript};

#[test]
fn embedded_dataset_golden() {
    let dataset = load_embedded().expect("embedded dataset parses");
    let actual = render_typescript(&build_catalog(&dataset));
    let expected = include_str!("fixtures/turkey_cities.ts");
    assert_eq!(actual, expected);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let first = render_typescript(&build_catalog(&load_embedded().expect("parse")));
    let second = render_typescript(&build_catalog(&load_embedded().expect("parse")));
    assert_eq!(first, second);
}

#[test]
fn embedded_counts() {
    let catalog = build_catalog(&load_embedded().expect("parse"));
    assert_eq!(catalog.regions.len(), 81);
    assert_eq!(catalog.district_count(), 969);
}

#[test]
fn known_slugs_and_ids() {
    let catalog = build_catalog(&load_embedded().expect("parse"));
    assert_eq!(catalog.region("17").map(|r| r.slug.as_str()), Some("canakkale"));
    assert_eq!(catalog.region("34").map(|r| r.slug.as_str()), Some("istanbul"));
    assert_eq!(catalog.region("03").map(|r| r.slug.as_str()), Some("afyonkarahisar"));
    assert_eq!(catalog.region_by_slug("sanliurfa").map(|r| r.id.as_str()), Some("63"));

    let cankaya = catalog.district("06-02").expect("06-02 exists");
    assert_eq!(cankaya.name, "Çankaya");
    assert_eq!(cankaya.slug, "cankaya");
}

#[test]
fn every_slug_is_clean_ascii() {
    let catalog = build_catalog(&load_embedded().expect("parse"));
    let slugs = catalog
        .regions
        .iter()
        .map(|r| r.slug.as_str())
        .chain(catalog.regions.iter().flat_map(|r| r.districts.iter().map(|d| d.slug.as_str())));
    for slug in slugs {
        assert!(slug.is_ascii(), "{slug}");
        assert!(!slug.contains(' ') && !slug.contains('\''), "{slug}");
        assert_eq!(region_data::slugify(slug), slug);
    }
}

#[test]
fn district_ids_run_from_01_without_gaps() {
    let catalog = build_catalog(&load_embedded().expect("parse"));
    for region in &catalog.regions {
        for (idx, district) in region.districts.iter().enumerate() {
            assert_eq!(district.id, format!("{}-{:02}", region.id, idx + 1));
        }
    }
}

#[test]
fn ankara_scenario_ids_ignore_names() {
    let region = build_region(&RegionSource {
        code: "06".into(),
        name: "Ankara".into(),
        districts: vec!["Çankaya".into(), "Mamak".into()],
    });
    let ids: Vec<&str> = region.districts.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["06-01", "06-02"]);
}
