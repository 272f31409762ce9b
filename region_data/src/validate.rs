use std::collections::HashSet;
use std::fmt;

use crate::*;

/// A problem found in a hand-maintained dataset.
///
/// Findings are advisory: generation carries the data through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    DuplicateSlug { region: String, slug: String },
    InvalidValue { context: String },
    UnmappedCharacters { name: String, slug: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::DuplicateSlug { region, slug } => {
                write!(f, "duplicate district slug '{slug}' in region '{region}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
            ValidationError::UnmappedCharacters { name, slug } => {
                write!(f, "name '{name}' encodes to non-ASCII slug '{slug}'")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a dataset for duplicate codes, empty fields, and names that will not
/// encode or render cleanly.
///
/// ```
/// use region_data::{DatasetSource, RegionSource, validate_dataset};
///
/// let dataset = DatasetSource {
///     country: "Türkiye".into(),
///     regions: vec![RegionSource {
///         code: "06".into(),
///         name: "Ankara".into(),
///         districts: vec!["Çankaya".into(), "Mamak".into()],
///     }],
/// };
/// assert!(validate_dataset(&dataset).is_empty());
/// ```
pub fn validate_dataset(dataset: &DatasetSource) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut codes = HashSet::new();
    track_ids(
        "region",
        dataset.regions.iter().map(|r| r.code.as_str()),
        &mut codes,
        &mut errors,
    );

    for region in &dataset.regions {
        if region.code.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("region '{}' has an empty code", region.name),
            });
        }
        check_name(&region.name, &format!("region '{}' name", region.code), &mut errors);

        let mut slugs = HashSet::new();
        for (idx, district) in region.districts.iter().enumerate() {
            let context = format!("region '{}' district {}", region.code, idx + 1);
            check_name(district, &context, &mut errors);
            let slug = slugify(district);
            if !district.is_empty() && !slugs.insert(slug.clone()) {
                errors.push(ValidationError::DuplicateSlug {
                    region: region.code.clone(),
                    slug,
                });
            }
        }
    }

    errors
}

fn check_name(name: &str, context: &str, errors: &mut Vec<ValidationError>) {
    if name.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context} is empty"),
        });
        return;
    }
    // Names are emitted inside single-quoted literals.
    if name.contains('\'') {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context} '{name}' contains a single quote"),
        });
    }
    let slug = slugify(name);
    if !slug.is_ascii() {
        errors.push(ValidationError::UnmappedCharacters {
            name: name.to_string(),
            slug,
        });
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}
