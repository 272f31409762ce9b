//! Shared data model for the province/district catalog.

pub mod defs;
pub mod slug;
pub mod validate;

pub use defs::*;
pub use slug::{SUBSTITUTIONS, slugify};
pub use validate::{ValidationError, validate_dataset};
