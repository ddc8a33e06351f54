mod flag;
mod language;
mod price;

pub use self::flag::parse_flag;
pub use self::language::{
    correct_languages, has_georgian, has_latin, is_swapped, GEORGIAN_BLOCK_END,
    GEORGIAN_BLOCK_START,
};
pub use self::price::parse_price_minor;

/// Display order: the value parsed as a number and truncated toward zero.
///
/// Accepts `"3"` and `"3.0"`. Empty, non-numeric and non-finite values
/// give 0; values past the `i64` range saturate.
pub fn parse_order(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}
