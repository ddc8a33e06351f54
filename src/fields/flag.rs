const TRUTHY: [&str; 5] = ["true", "1", "yes", "y", "t"];
const FALSY: [&str; 6] = ["false", "0", "no", "n", "f", ""];

/// Case-insensitive boolean coercion.
///
/// Values outside both the truthy and falsy sets count as `true`, so
/// `"maybe"` or `"x"` mark the flag as set.
pub fn parse_flag(raw: &str) -> bool {
    let value = raw.trim().to_lowercase();
    if TRUTHY.contains(&value.as_str()) {
        true
    } else if FALSY.contains(&value.as_str()) {
        false
    } else {
        !value.is_empty()
    }
}
