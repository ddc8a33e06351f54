pub mod categories;
pub mod dishes;

use crate::error::ImportError;
use crate::model::MenuDocument;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reads the whole input file as UTF-8 text without a byte order mark
fn read_input(path: &Path) -> Result<String, ImportError> {
    crate::table::decode(fs::read(path)?)
}

/// Serializes `items` as `{"items": [...]}` and writes the file in one go
fn write_document<T: Serialize>(path: &Path, items: Vec<T>) -> Result<usize, ImportError> {
    let count = items.len();
    let json = MenuDocument::new(items).to_json()?;
    fs::write(path, json)?;
    Ok(count)
}
