use crate::fields::parse_order;
use crate::model::{CategoryRecord, LocalizedText, ACTIVE_STATUS};
use crate::normalizers::RowNormalizer;
use crate::table::RawRow;

pub struct CategoryNormalizer;

impl CategoryNormalizer {
    /// Header columns a category table must have
    pub const REQUIRED_COLUMNS: [&'static str; 5] = ["id", "order", "ka", "en", "ru"];
}

impl RowNormalizer for CategoryNormalizer {
    type Record = CategoryRecord;

    /// Category tables are curated by hand, so every row is kept
    fn normalize(&self, row: &RawRow) -> Option<CategoryRecord> {
        Some(CategoryRecord {
            id: row.get("id").trim().to_string(),
            order: parse_order(row.get("order")),
            status: ACTIVE_STATUS.to_string(),
            title: LocalizedText::new(row.get("ka"), row.get("en"), row.get("ru")),
        })
    }
}
