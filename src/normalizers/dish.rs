use crate::fields::{correct_languages, parse_flag, parse_order, parse_price_minor};
use crate::model::{DishRecord, LocalizedText, ACTIVE_STATUS, CURRENCY};
use crate::normalizers::RowNormalizer;
use crate::table::RawRow;
use log::debug;

/// Columns holding the category reference, in lookup order
const CATEGORY_COLUMNS: [&str; 2] = ["category_id", "categoryId"];
const TOP_RATED_COLUMNS: [&str; 2] = ["topRated", "top_rated"];
const SOLD_OUT_COLUMNS: [&str; 2] = ["soldOut", "sold_out"];
/// Title columns per language: bare language code first, prefixed alias second
const TITLE_KA_COLUMNS: [&str; 2] = ["ka", "title_ka"];
const TITLE_EN_COLUMNS: [&str; 2] = ["en", "title_en"];
const TITLE_RU_COLUMNS: [&str; 2] = ["ru", "title_ru"];

pub struct DishNormalizer;

fn localized(row: &RawRow, prefix: &str) -> LocalizedText {
    LocalizedText::new(
        row.get(&format!("{prefix}_ka")),
        row.get(&format!("{prefix}_en")),
        row.get(&format!("{prefix}_ru")),
    )
}

fn title(row: &RawRow) -> LocalizedText {
    LocalizedText::new(
        row.first_non_empty(&TITLE_KA_COLUMNS),
        row.first_non_empty(&TITLE_EN_COLUMNS),
        row.first_non_empty(&TITLE_RU_COLUMNS),
    )
}

/// Story text with Georgian and English put back in their own slots
fn story(row: &RawRow) -> LocalizedText {
    let (ka, en) = correct_languages(row.get("story_ka").trim(), row.get("story_en").trim());
    LocalizedText::new(ka, en, row.get("story_ru"))
}

impl RowNormalizer for DishNormalizer {
    type Record = DishRecord;

    fn normalize(&self, row: &RawRow) -> Option<DishRecord> {
        let id = row.get("id").trim();
        if id.is_empty() {
            debug!("Skipping dish row without id");
            return None;
        }

        Some(DishRecord {
            id: id.to_string(),
            category_id: row.first_non_empty(&CATEGORY_COLUMNS).trim().to_string(),
            order: parse_order(row.get("order")),
            status: ACTIVE_STATUS.to_string(),
            price_minor: parse_price_minor(row.get("price")),
            currency: CURRENCY.to_string(),
            title: title(row),
            description: localized(row, "description"),
            vegetarian: parse_flag(row.get("vegetarian")),
            top_rated: parse_flag(row.first_non_empty(&TOP_RATED_COLUMNS)),
            sold_out: parse_flag(row.first_non_empty(&SOLD_OUT_COLUMNS)),
            story: story(row),
        })
    }
}
