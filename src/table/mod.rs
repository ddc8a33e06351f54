mod dialect;

pub use self::dialect::{
    DelimiterSniffer, DialectSniffer, CANDIDATE_DELIMITERS, DEFAULT_DELIMITER,
};

use crate::error::ImportError;
use log::warn;
use std::collections::HashMap;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// One input record keyed by header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Raw value of `column`, or `""` when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// Value of the first listed column that holds a non-empty value
    pub fn first_non_empty(&self, columns: &[&str]) -> &str {
        columns
            .iter()
            .map(|column| self.get(column))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Header names plus every readable record, in input order
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl Table {
    /// Required columns absent from the header, in the order given
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|column| !self.headers.iter().any(|h| h == *column))
            .map(|column| column.to_string())
            .collect()
    }
}

/// Decodes the raw file as UTF-8 and strips a leading byte order mark
pub fn decode(bytes: Vec<u8>) -> Result<String, ImportError> {
    let text = String::from_utf8(bytes)?;
    Ok(match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Leading slice of `text` handed to the dialect sniffer
pub fn sample(text: &str, max_bytes: usize) -> &[u8] {
    let bytes = text.as_bytes();
    &bytes[..bytes.len().min(max_bytes)]
}

/// Parses delimited text with a header row. Short records leave their
/// trailing columns absent; records the CSV parser rejects are skipped.
/// Expects text already passed through [`decode`].
pub fn read_table(text: &str, delimiter: u8) -> Result<Table, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match result {
            Ok(record) => rows.push(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, v)| (h.clone(), v.to_string()))
                    .collect(),
            ),
            Err(e) => warn!("Skipping malformed record {}: {}", line + 1, e),
        }
    }

    Ok(Table { headers, rows })
}
