//! Repairs Georgian and English text entered in each other's columns.

/// First code point of the Georgian Unicode block
pub const GEORGIAN_BLOCK_START: char = '\u{10A0}';
/// Last code point of the Georgian Unicode block
pub const GEORGIAN_BLOCK_END: char = '\u{10FF}';

pub fn has_georgian(text: &str) -> bool {
    text.chars()
        .any(|c| (GEORGIAN_BLOCK_START..=GEORGIAN_BLOCK_END).contains(&c))
}

/// True when `text` has at least one ASCII letter (A-Z, a-z)
pub fn has_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// True only when the Georgian slot holds Latin text with no Georgian at all
/// and the English slot holds Georgian text. Empty values never match.
pub fn is_swapped(ka: &str, en: &str) -> bool {
    !ka.is_empty()
        && !en.is_empty()
        && has_latin(ka)
        && !has_georgian(ka)
        && has_georgian(en)
}

/// Returns `(ka, en)` in corrected order
pub fn correct_languages<'a>(ka: &'a str, en: &'a str) -> (&'a str, &'a str) {
    if is_swapped(ka, en) {
        (en, ka)
    } else {
        (ka, en)
    }
}
