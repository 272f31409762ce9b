//! Flat rows for seeding the `cities` and `districts` tables.

use region_data::{Catalog, Id};
use serde::Serialize;

/// Districts are inserted in batches of this size by the seeding client.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// One row of the `cities` table. Coordinates are placeholders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityRow {
    pub id: Id,
    pub name: String,
    pub slug: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One row of the `districts` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DistrictRow {
    pub id: Id,
    pub city_id: Id,
    pub name: String,
    pub slug: String,
}

/// Both tables, in catalog order.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SeedRows {
    pub cities: Vec<CityRow>,
    pub districts: Vec<DistrictRow>,
}

impl SeedRows {
    /// District rows in chunks of `size` (at least 1).
    pub fn district_batches(&self, size: usize) -> std::slice::Chunks<'_, DistrictRow> {
        self.districts.chunks(size.max(1))
    }

    /// Serialize as `{ "cities": [...], "districts": [...] }`.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Flatten a catalog into seed rows. The country name fills each city's `region`.
pub fn seed_rows(catalog: &Catalog) -> SeedRows {
    let mut rows = SeedRows::default();
    for region in &catalog.regions {
        rows.cities.push(CityRow {
            id: region.id.clone(),
            name: region.name.clone(),
            slug: region.slug.clone(),
            region: catalog.country.clone(),
            latitude: 0.0,
            longitude: 0.0,
        });
        rows.districts.extend(region.districts.iter().map(|d| DistrictRow {
            id: d.id.clone(),
            city_id: region.id.clone(),
            name: d.name.clone(),
            slug: d.slug.clone(),
        }));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_data::{DistrictDef, RegionDef};

    fn catalog() -> Catalog {
        let districts = (1..=5)
            .map(|i| DistrictDef {
                id: format!("06-{i:02}"),
                name: format!("D{i}"),
                slug: format!("d{i}"),
            })
            .collect();
        Catalog {
            country: "Türkiye".into(),
            regions: vec![RegionDef {
                id: "06".into(),
                name: "Ankara".into(),
                slug: "ankara".into(),
                districts,
            }],
        }
    }

    #[test]
    fn flattens_with_parent_ids() {
        let rows = seed_rows(&catalog());
        assert_eq!(rows.cities.len(), 1);
        assert_eq!(rows.cities[0].region, "Türkiye");
        assert_eq!(rows.cities[0].latitude, 0.0);
        assert_eq!(rows.districts.len(), 5);
        assert!(rows.districts.iter().all(|d| d.city_id == "06"));
        assert_eq!(rows.districts[4].id, "06-05");
    }

    #[test]
    fn batches_cover_every_row() {
        let rows = seed_rows(&catalog());
        let sizes: Vec<usize> = rows.district_batches(2).map(<[DistrictRow]>::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(rows.district_batches(0).count(), 5);
    }

    #[test]
    fn json_shape() {
        let rows = seed_rows(&catalog());
        let json = rows.to_json(false).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["cities"][0]["slug"], "ankara");
        assert_eq!(value["districts"][0]["city_id"], "06");
        assert_eq!(value["districts"][0]["id"], "06-01");
    }
}
