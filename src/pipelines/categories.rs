use super::{read_input, write_document};
use crate::error::ImportError;
use crate::model::CategoryRecord;
use crate::normalizers::{CategoryNormalizer, RowNormalizer};
use crate::table::{self, DEFAULT_DELIMITER};
use log::info;
use std::path::Path;

/// Normalizes comma-delimited category rows. Fails without producing any
/// record when a required column is missing from the header.
pub fn convert(text: &str) -> Result<Vec<CategoryRecord>, ImportError> {
    let table = table::read_table(text, DEFAULT_DELIMITER)?;

    let missing = table.missing_columns(&CategoryNormalizer::REQUIRED_COLUMNS);
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns {
            missing,
            found: table.headers,
        });
    }

    Ok(CategoryNormalizer.normalize_all(&table.rows))
}

/// Converts the category table at `input` into the JSON document at `output`.
/// Returns the number of categories written.
pub fn process(input: &Path, output: &Path) -> Result<usize, ImportError> {
    let text = read_input(input)?;
    let categories = convert(&text)?;
    let count = write_document(output, categories)?;
    info!("Wrote {} categories from {} to {}", count, input.display(), output.display());
    Ok(count)
}
