use serde::{Deserialize, Serialize};

/// Stable identifier used for regions and districts.
pub type Id = String;

/// Hand-maintained source dataset, in authoring order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DatasetSource {
    /// Country the dataset describes; carried into seed rows.
    pub country: String,
    #[serde(default)]
    pub regions: Vec<RegionSource>,
}

impl DatasetSource {
    /// Total number of districts across all regions.
    pub fn district_count(&self) -> usize {
        self.regions.iter().map(|r| r.districts.len()).sum()
    }
}

/// One province as authored: a pre-assigned code, its name, and its districts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionSource {
    /// Opaque key supplied by the dataset (e.g. a plate code). Never derived.
    pub code: Id,
    pub name: String,
    /// District display names. Position determines the generated district id.
    #[serde(default)]
    pub districts: Vec<String>,
}

/// Generated catalog, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Catalog {
    pub country: String,
    #[serde(default)]
    pub regions: Vec<RegionDef>,
}

/// Generated province record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionDef {
    pub id: Id,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub districts: Vec<DistrictDef>,
}

/// Generated district record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistrictDef {
    pub id: Id,
    pub name: String,
    pub slug: String,
}

impl Catalog {
    /// Find a region by its code.
    pub fn region(&self, code: &str) -> Option<&RegionDef> {
        self.regions.iter().find(|r| r.id == code)
    }

    /// Find a region by its generated slug.
    pub fn region_by_slug(&self, slug: &str) -> Option<&RegionDef> {
        self.regions.iter().find(|r| r.slug == slug)
    }

    /// Find a district by its composite id (`{region}-{nn}`).
    pub fn district(&self, id: &str) -> Option<&DistrictDef> {
        self.regions
            .iter()
            .flat_map(|r| r.districts.iter())
            .find(|d| d.id == id)
    }

    /// Total number of districts across all regions.
    pub fn district_count(&self) -> usize {
        self.regions.iter().map(|r| r.districts.len()).sum()
    }
}
