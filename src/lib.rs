pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod normalizers;
pub mod pipelines;
pub mod table;

pub use crate::config::ImportConfig;
pub use crate::error::ImportError;
pub use crate::model::{CategoryRecord, DishRecord, LocalizedText, MenuDocument};
pub use crate::normalizers::{CategoryNormalizer, DishNormalizer, RowNormalizer};

use std::path::Path;

/// Convert a dish table into `{"items": [...]}` JSON, detecting the delimiter.
/// Rows without an id are dropped. Returns the number of dishes written.
pub fn import_dishes(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ImportConfig,
) -> Result<usize, ImportError> {
    pipelines::dishes::process(input.as_ref(), output.as_ref(), config)
}

/// Convert a comma-delimited category table into `{"items": [...]}` JSON.
/// Fails before writing anything when `id, order, ka, en, ru` are not all present.
pub fn import_categories(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<usize, ImportError> {
    pipelines::categories::process(input.as_ref(), output.as_ref())
}
