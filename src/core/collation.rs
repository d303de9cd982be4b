//! Locale-aware string ordering for route lists.
//!
//! Approximates root-locale collation in three levels:
//!
//! 1. **Primary**: base characters, compared by class (whitespace,
//!    punctuation, digits, letters). Letters ignore case and accents, digits
//!    compare by numeric value in any script, and punctuation follows the
//!    conventional collation order rather than ASCII.
//! 2. **Secondary**: accents, unaccented first (`cafe` < `café`).
//! 3. **Tertiary**: case, lowercase first.
//!
//! Strings equal on all three levels fall back to code point order.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// ASCII punctuation and symbols in collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Code points of the digit zero in each script with decimal digits (`Nd`).
/// Every script's digits are contiguous from zero to nine.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
    0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x16A60, 0x16B50, 0x1D7CE, 0x1D7D8,
    0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E950,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

/// Numeric value of a decimal digit in any script.
fn decimal_value(c: char) -> Option<u32> {
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .map(|zero| cp - zero)
}

fn primary_weight(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        (CharClass::Whitespace, c as u32)
    } else if let Some(pos) = PUNCTUATION_ORDER.find(c) {
        (CharClass::Punctuation, pos as u32)
    } else if let Some(value) = decimal_value(c) {
        (CharClass::Digit, value)
    } else if c.is_numeric() {
        // Superscripts, fractions and the like follow the plain digits.
        (CharClass::Digit, 10 + c as u32)
    } else if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        (CharClass::Letter, folded as u32)
    } else {
        // Other symbols sort after the ASCII ones.
        (
            CharClass::Punctuation,
            PUNCTUATION_ORDER.len() as u32 + c as u32,
        )
    }
}

/// Sort key of a string; field order is comparison order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(CharClass, u32)>,
    /// Combining marks attached to each base character.
    secondary: Vec<Vec<char>>,
    /// Whether each base character is uppercase.
    tertiary: Vec<bool>,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let mut key = CollationKey {
            primary: Vec::new(),
            secondary: Vec::new(),
            tertiary: Vec::new(),
        };

        for c in s.nfd() {
            if is_combining_mark(c)
                && let Some(marks) = key.secondary.last_mut()
            {
                marks.push(c);
                continue;
            }
            key.primary.push(primary_weight(c));
            key.secondary.push(Vec::new());
            key.tertiary.push(c.is_uppercase());
        }

        key
    }
}

/// Compares two strings the way a locale-aware sort would.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a)
        .cmp(&CollationKey::new(b))
        .then_with(|| a.cmp(b))
}
