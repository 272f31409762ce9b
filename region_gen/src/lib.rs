//! region_gen: builds the province/district catalog and renders it as a
//! TypeScript constant.
//!
//! The pipeline is linear:
//! - load the dataset (`data/turkey.toml`, compiled in by default)
//! - assign slugs and positional district ids with [`build_catalog`]
//! - render the catalog with [`render_typescript`], or flatten it into
//!   [`SeedRows`] for database seeding
//!
//! ```
//! use region_gen::{build_catalog, load_embedded, render_typescript};
//!
//! let dataset = load_embedded().expect("embedded dataset parses");
//! let catalog = build_catalog(&dataset);
//! let ts = render_typescript(&catalog);
//! assert!(ts.starts_with("export interface District {"));
//! assert!(ts.ends_with("];\n"));
//! ```

mod catalog;
mod rows;
mod source;
mod typescript;

pub use catalog::{build_catalog, build_region, district_id};
pub use rows::{CityRow, DEFAULT_BATCH_SIZE, DistrictRow, SeedRows, seed_rows};
pub use source::{EMBEDDED_DATASET, EMBEDDED_LABEL, SourceError, load_dataset, load_embedded, load_from_path, parse_dataset};
pub use typescript::{PREAMBLE, TERMINATOR, render_typescript};
