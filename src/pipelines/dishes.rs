use super::{read_input, write_document};
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::model::DishRecord;
use crate::normalizers::{DishNormalizer, RowNormalizer};
use crate::table::{self, DelimiterSniffer, DialectSniffer};
use log::{debug, info};
use std::path::Path;

/// Normalizes dish rows from delimited text. The delimiter is detected
/// from the leading `sniff_sample_bytes` of the text.
pub fn convert(text: &str, config: &ImportConfig) -> Result<Vec<DishRecord>, ImportError> {
    let sniffer = DelimiterSniffer::new(config.delimiter_bytes());
    let delimiter = sniffer.detect_or_default(table::sample(text, config.sniff_sample_bytes));
    debug!("Reading dishes with delimiter {:?}", delimiter as char);

    let table = table::read_table(text, delimiter)?;
    let dishes = DishNormalizer.normalize_all(&table.rows);
    debug!("Kept {} of {} dish rows", dishes.len(), table.rows.len());
    Ok(dishes)
}

/// Converts the dish table at `input` into the JSON document at `output`.
/// Returns the number of dishes written.
pub fn process(input: &Path, output: &Path, config: &ImportConfig) -> Result<usize, ImportError> {
    let text = read_input(input)?;
    let dishes = convert(&text, config)?;
    let count = write_document(output, dishes)?;
    info!("Wrote {} dishes from {} to {}", count, input.display(), output.display());
    Ok(count)
}
