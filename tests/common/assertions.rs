//! Domain-specific assertion macros for cardform harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* stored-value invariant was violated.

// ---------------------------------------------------------------------------
// Stored-value shape
// ---------------------------------------------------------------------------

/// Assert that a stored card number is digits in groups of four separated by
/// single spaces, with at most sixteen digits.
///
/// ```rust
/// assert_grouped_number!(form.card_number);
/// ```
#[macro_export]
macro_rules! assert_grouped_number {
    ($number:expr) => {{
        let number: &str = &$number;
        let groups: Vec<&str> = if number.is_empty() {
            Vec::new()
        } else {
            number.split(' ').collect()
        };
        let digits: usize = groups.iter().map(|g| g.len()).sum();
        let ok = digits <= 16
            && groups.iter().all(|g| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit()))
            && groups.iter().rev().skip(1).all(|g| g.len() == 4)
            && groups.last().map_or(true, |g| g.len() <= 4);
        if !ok {
            panic!(
                "assert_grouped_number! failed: {:?} is not grouped 4-digit blocks (<= 16 digits)",
                number
            );
        }
    }};
}

/// Assert that a stored expiration is `MM`, `MM/Y` or `MM/YY` shaped (any
/// prefix of it), digits only apart from the single slash after two digits.
#[macro_export]
macro_rules! assert_expiration_shape {
    ($value:expr) => {{
        let value: &str = &$value;
        let ok = value.len() <= 5
            && value.char_indices().all(|(i, c)| {
                if i == 2 {
                    c == '/'
                } else {
                    c.is_ascii_digit()
                }
            })
            && value.len() != 3;
        if !ok {
            panic!("assert_expiration_shape! failed: {:?}", value);
        }
    }};
}

/// Assert that a stored holder name has only letters and single spaces, each
/// word starting with an uppercase letter.
#[macro_export]
macro_rules! assert_holder_shape {
    ($value:expr) => {{
        let value: &str = &$value;
        let ok = value.len() <= 30
            && !value.contains("  ")
            && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
            && value
                .split(' ')
                .filter(|w| !w.is_empty())
                .all(|w| w.starts_with(|c: char| c.is_ascii_uppercase()));
        if !ok {
            panic!("assert_holder_shape! failed: {:?}", value);
        }
    }};
}

// ---------------------------------------------------------------------------
// Form-level assertions
// ---------------------------------------------------------------------------

/// Assert that two form states differ only in the given field.
///
/// ```rust
/// assert_only_changed!(before, after, Field::Cvc);
/// ```
#[macro_export]
macro_rules! assert_only_changed {
    ($before:expr, $after:expr, $field:expr) => {{
        let before: &cardform_core::CardFormState = &$before;
        let after: &cardform_core::CardFormState = &$after;
        let field: cardform_core::Field = $field;
        for other in cardform_core::Field::ALL {
            if other != field {
                pretty_assertions::assert_eq!(
                    before.value(other),
                    after.value(other),
                    "editing {} changed {}",
                    field,
                    other
                );
            }
        }
        pretty_assertions::assert_eq!(before.flipped, after.flipped, "editing {} flipped the card", field);
        pretty_assertions::assert_eq!(before.extras, after.extras, "editing {} touched extras", field);
    }};
}
