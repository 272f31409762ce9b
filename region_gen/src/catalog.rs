use log::debug;
use region_data::{Catalog, DatasetSource, DistrictDef, RegionDef, RegionSource, slugify};

/// Build the catalog from a dataset, preserving region and district order.
///
/// This is structural mapping only; run `region_data::validate_dataset`
/// separately to check the input.
pub fn build_catalog(source: &DatasetSource) -> Catalog {
    Catalog {
        country: source.country.clone(),
        regions: source.regions.iter().map(build_region).collect(),
    }
}

/// Build one region record. District ids depend only on the region code and
/// each district's 1-based position.
///
/// ```
/// use region_data::RegionSource;
/// use region_gen::build_region;
///
/// let region = build_region(&RegionSource {
///     code: "06".into(),
///     name: "Ankara".into(),
///     districts: vec!["Çankaya".into(), "Mamak".into()],
/// });
/// assert_eq!(region.districts[0].id, "06-01");
/// assert_eq!(region.districts[1].id, "06-02");
/// ```
pub fn build_region(region: &RegionSource) -> RegionDef {
    let districts = region
        .districts
        .iter()
        .enumerate()
        .map(|(idx, name)| DistrictDef {
            id: district_id(&region.code, idx + 1),
            name: name.clone(),
            slug: slugify(name),
        })
        .collect::<Vec<_>>();
    debug!("region {} ({}): {} districts", region.code, region.name, districts.len());
    RegionDef {
        id: region.code.clone(),
        name: region.name.clone(),
        slug: slugify(&region.name),
        districts,
    }
}

/// Composite district id: region code plus position, zero-padded to two digits.
pub fn district_id(code: &str, position: usize) -> String {
    format!("{code}-{position:02}")
}
