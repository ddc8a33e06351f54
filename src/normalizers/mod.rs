use crate::table::RawRow;

mod category;
mod dish;

pub use self::category::CategoryNormalizer;
pub use self::dish::DishNormalizer;

/// Turns one raw table row into a typed record, or `None` to skip the row
pub trait RowNormalizer {
    type Record;

    fn normalize(&self, row: &RawRow) -> Option<Self::Record>;

    /// Normalizes every row in input order, dropping skipped ones
    fn normalize_all(&self, rows: &[RawRow]) -> Vec<Self::Record> {
        rows.iter().filter_map(|row| self.normalize(row)).collect()
    }
}
