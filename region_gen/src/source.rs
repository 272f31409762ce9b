//! Dataset loading.
//!
//! The dataset is a TOML file with a `country` string and an ordered
//! `[[regions]]` array. The copy under `data/` is compiled into the binary so
//! the default run touches no files.

use std::fs;
use std::path::Path;

use log::info;
use region_data::DatasetSource;
use thiserror::Error;

/// The compiled-in dataset text.
pub const EMBEDDED_DATASET: &str = include_str!("../data/turkey.toml");

/// Label used for the compiled-in dataset in logs and errors.
pub const EMBEDDED_LABEL: &str = "embedded data/turkey.toml";

/// Errors raised while reading or parsing a dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unable to read '{label}': {source}")]
    Read {
        label: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse '{label}': {source}")]
    Parse {
        label: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse dataset text. `label` names the origin in log lines and errors.
pub fn parse_dataset(text: &str, label: &str) -> Result<DatasetSource, SourceError> {
    let dataset: DatasetSource = toml::from_str(text).map_err(|source| SourceError::Parse {
        label: label.to_string(),
        source,
    })?;
    info!(
        "loaded {} regions and {} districts from {label}",
        dataset.regions.len(),
        dataset.district_count()
    );
    Ok(dataset)
}

/// Parse the compiled-in dataset.
pub fn load_embedded() -> Result<DatasetSource, SourceError> {
    parse_dataset(EMBEDDED_DATASET, EMBEDDED_LABEL)
}

/// Read and parse a dataset file with the same shape as the embedded one.
pub fn load_from_path(path: &Path) -> Result<DatasetSource, SourceError> {
    let label = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
        label: label.clone(),
        source,
    })?;
    parse_dataset(&text, &label)
}

/// Load `path` if given, otherwise the compiled-in dataset.
pub fn load_dataset(path: Option<&Path>) -> Result<DatasetSource, SourceError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_embedded(),
    }
}
