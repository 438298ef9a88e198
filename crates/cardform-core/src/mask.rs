//! Render-time masking for the card preview.
//!
//! Stored values are never padded. These helpers fill the gaps with a
//! placeholder glyph so the card face always shows complete groups.

use crate::normalizer::{card_digits, CARD_GROUP_LEN, CVC_DIGITS};

/// Default padding glyph.
pub const MASK_GLYPH: char = '•';

/// The four number groups as shown on the card, each padded to four glyphs.
pub fn number_groups(number: &str, glyph: char) -> [String; 4] {
    let digits: Vec<char> = card_digits(number).chars().collect();
    std::array::from_fn(|i| {
        let group: String = digits
            .iter()
            .skip(i * CARD_GROUP_LEN)
            .take(CARD_GROUP_LEN)
            .collect();
        pad(&group, CARD_GROUP_LEN, glyph)
    })
}

/// The holder name in capitals, or `placeholder` when empty.
pub fn holder(name: &str, placeholder: &str) -> String {
    if name.is_empty() {
        placeholder.to_string()
    } else {
        name.to_uppercase()
    }
}

/// Expiration as `MM/YY`, each half padded to two glyphs.
pub fn expiration(value: &str, glyph: char) -> String {
    let digits: String = value.chars().filter(|c| *c != '/').collect();
    let (month, year) = digits.split_at(digits.len().min(2));
    format!("{}/{}", pad(month, 2, glyph), pad(year, 2, glyph))
}

/// Security code padded to three glyphs.
pub fn cvc(value: &str, glyph: char) -> String {
    let code: String = value.chars().take(CVC_DIGITS).collect();
    pad(&code, CVC_DIGITS, glyph)
}

fn pad(value: &str, width: usize, glyph: char) -> String {
    let mut out = value.to_string();
    out.extend(std::iter::repeat(glyph).take(width.saturating_sub(value.chars().count())));
    out
}
