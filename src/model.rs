use serde::Serialize;

/// Status written on every imported record
pub const ACTIVE_STATUS: &str = "active";

/// Currency of every dish price
pub const CURRENCY: &str = "GEL";

/// Text in Georgian, English and Russian
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub ka: String,
    pub en: String,
    pub ru: String,
}

impl LocalizedText {
    /// Builds the bundle, trimming each value
    pub fn new(ka: &str, en: &str, ru: &str) -> Self {
        Self {
            ka: ka.trim().to_string(),
            en: en.trim().to_string(),
            ru: ru.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecord {
    pub id: String,
    pub category_id: String,
    pub order: i64,
    pub status: String,
    /// Price in tetri (hundredths of a lari)
    pub price_minor: u64,
    pub currency: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub vegetarian: bool,
    pub top_rated: bool,
    pub sold_out: bool,
    pub story: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub id: String,
    pub order: i64,
    pub status: String,
    pub title: LocalizedText,
}

/// Top-level JSON document: `{"items": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuDocument<T> {
    pub items: Vec<T>,
}

impl<T: Serialize> MenuDocument<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Pretty JSON with two-space indentation. serde_json leaves non-ASCII
    /// characters unescaped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
