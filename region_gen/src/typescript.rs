//! TypeScript rendering of the catalog.
//!
//! Each region is one line with its districts inlined. Names are written into
//! single-quoted literals as-is; `region_data::validate_dataset` flags names
//! that would break them.

use region_data::{Catalog, DistrictDef, RegionDef};

/// Shape declarations and the opening of the exported array.
pub const PREAMBLE: &str = "export interface District {
  id: string;
  name: string;
  slug: string;
}

export interface City {
  id: string;
  name: string;
  slug: string;
  districts: District[];
}

export const turkeyCities: City[] = [
";

/// Closes the exported array.
pub const TERMINATOR: &str = "];\n";

/// Render the whole catalog as a TypeScript module body.
pub fn render_typescript(catalog: &Catalog) -> String {
    let mut out = String::from(PREAMBLE);
    for region in &catalog.regions {
        render_region(&mut out, region);
    }
    out.push_str(TERMINATOR);
    out
}

fn render_region(out: &mut String, region: &RegionDef) {
    out.push_str(&format!(
        "  {{ id: '{}', name: '{}', slug: '{}', districts: [",
        region.id, region.name, region.slug
    ));
    let districts = region.districts.iter().map(render_district).collect::<Vec<_>>();
    out.push_str(&districts.join(","));
    out.push_str("] },\n");
}

fn render_district(district: &DistrictDef) -> String {
    format!(
        "{{id:'{}',name:'{}',slug:'{}'}}",
        district.id, district.name, district.slug
    )
}
