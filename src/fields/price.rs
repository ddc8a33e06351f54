use regex::Regex;
use std::sync::OnceLock;

/// Minor units per lari
const MINOR_PER_MAJOR: f64 = 100.0;

/// First number in a price cell: digits with an optional `.` or `,` fraction
fn price_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").expect("valid price pattern"))
}

/// Price in minor units taken from the first number in `raw`.
///
/// `"23.50"` gives 2350, `"23,50 ₾"` gives 2350 and `"23.00/25.00"` gives
/// 2300: only the first listed price counts. Cells without a number give 0.
pub fn parse_price_minor(raw: &str) -> u64 {
    let Some(found) = price_pattern().find(raw) else {
        return 0;
    };

    found
        .as_str()
        .replace(',', ".")
        .parse::<f64>()
        .map(|major| (major * MINOR_PER_MAJOR).round_ties_even() as u64)
        .unwrap_or(0)
}
