//! Normalizer — turns the raw text of a form input into its stored, masked form.
//!
//! Each function takes what the text input currently holds (the previous
//! stored value plus whatever the keystroke changed) and returns the value
//! to store. Formatting only runs forward: there is no special handling for
//! deletions, so removing a character in the middle of a masked group simply
//! re-masks whatever digits are left.
//!
//! Every normaliser is a fixed point on its own output.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Longest holder name accepted, in characters.
pub const HOLDER_NAME_MAX: usize = 30;
/// Most digits a card number may hold.
pub const CARD_NUMBER_DIGITS: usize = 16;
/// Digits per displayed card-number group.
pub const CARD_GROUP_LEN: usize = 4;
/// Maximum digits kept in an expiration (`MMYY`).
pub const EXPIRATION_DIGITS: usize = 4;
/// Maximum digits kept in a security code.
pub const CVC_DIGITS: usize = 3;

static NOT_NAME_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("name filter pattern must compile"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]").expect("word start pattern must compile"));
// `\D` would let non-ASCII decimal digits through.
static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("digit filter pattern must compile"));

// ---------------------------------------------------------------------------
// Field normalisers
// ---------------------------------------------------------------------------

/// Normalise a cardholder name.
///
/// Drops everything that is not an ASCII letter or whitespace, collapses
/// whitespace runs to one space and uppercases the first letter of every
/// word. Returns `None` when the result is longer than [`HOLDER_NAME_MAX`];
/// the caller keeps the previous value in that case.
pub fn holder_name(raw: &str) -> Option<String> {
    let letters = NOT_NAME_CHAR.replace_all(raw, "");
    let collapsed = WHITESPACE_RUN.replace_all(&letters, " ");
    let capitalised = WORD_START.replace_all(&collapsed, |caps: &Captures| {
        caps[0].to_ascii_uppercase()
    });

    // Only ASCII survives the filters, so bytes == characters here.
    if capitalised.len() > HOLDER_NAME_MAX {
        return None;
    }
    Some(capitalised.into_owned())
}

/// Normalise a card number: digits only, grouped in blocks of four. A
/// trailing partial group is left unpadded.
///
/// Returns `None` when more than [`CARD_NUMBER_DIGITS`] digits remain; the
/// caller keeps the previous value, so an extra digit typed into a full
/// number never pushes an existing one out.
///
/// ```
/// use cardform_core::normalizer::card_number;
/// assert_eq!(card_number("4111111111111111").as_deref(), Some("4111 1111 1111 1111"));
/// assert_eq!(card_number("4111 11").as_deref(), Some("4111 11"));
/// assert_eq!(card_number("41111111111111119"), None);
/// ```
pub fn card_number(raw: &str) -> Option<String> {
    let digits = card_digits(raw);
    if digits.len() > CARD_NUMBER_DIGITS {
        return None;
    }
    Some(group_digits(&digits))
}

/// Normalise an expiration date to `MM/YY`.
///
/// The slash only appears once a third digit has been typed; one or two
/// digits are stored as-is.
pub fn expiration(raw: &str) -> String {
    let digits = digits_only(raw, EXPIRATION_DIGITS);
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Normalise a security code: digits only, at most [`CVC_DIGITS`].
pub fn cvc(raw: &str) -> String {
    digits_only(raw, CVC_DIGITS)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a space after every [`CARD_GROUP_LEN`] digits.
///
/// `digits` must already be digits only; the random generator uses this to
/// produce numbers in exactly the form [`card_number`] stores.
pub fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / CARD_GROUP_LEN);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % CARD_GROUP_LEN == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// The bare digits of a (possibly grouped) card number.
pub fn card_digits(number: &str) -> String {
    digits_only(number, usize::MAX)
}

fn digits_only(raw: &str, cap: usize) -> String {
    NON_DIGIT.replace_all(raw, "").chars().take(cap).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
