#![allow(unused)]
//! Normalizer integration harness.
//!
//! # What this covers
//!
//! - **Card number**: digits only, grouped in fours with a trailing partial
//!   group left unpadded. More than sixteen digits is rejected and the form
//!   keeps what it had.
//! - **Expiration**: digits only, capped at four, slash inserted once a third
//!   digit exists.
//! - **CVC**: digits only, capped at three.
//! - **Holder name**: non-letters stripped, whitespace collapsed, words
//!   capitalised, names over thirty characters rejected.
//! - **Idempotence**: every normaliser is a fixed point on its own output.
//!   Verified with proptest over random keystroke sequences.
//! - **Keystroke replay**: typing a value one character at a time through the
//!   form gives the same stored value as pasting it whole.
//! - **Insta snapshots**: representative outputs are pinned inline so
//!   unintentional format changes are caught.
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! # Update snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use common::*;

use cardform_core::normalizer::{self, HOLDER_NAME_MAX};
use cardform_core::{CardFormState, Field, FieldEdit};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Keystroke model for property tests
// ---------------------------------------------------------------------------

/// One keystroke a user might plausibly type into any of the inputs.
#[derive(Debug, Clone, Arbitrary)]
enum Keystroke {
    Digit(#[proptest(strategy = "0u8..10")] u8),
    Letter(#[proptest(strategy = "proptest::char::range('a', 'z')")] char),
    Upper(#[proptest(strategy = "proptest::char::range('A', 'Z')")] char),
    Space,
    Tab,
    Slash,
    Dash,
    Apostrophe,
    Accent,
}

impl Keystroke {
    fn as_char(&self) -> char {
        match self {
            Keystroke::Digit(d) => char::from(b'0' + d),
            Keystroke::Letter(c) | Keystroke::Upper(c) => *c,
            Keystroke::Space => ' ',
            Keystroke::Tab => '\t',
            Keystroke::Slash => '/',
            Keystroke::Dash => '-',
            Keystroke::Apostrophe => '\'',
            Keystroke::Accent => 'é',
        }
    }
}

fn keystrokes(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<Keystroke>(), 0..max)
        .prop_map(|keys| keys.iter().map(Keystroke::as_char).collect())
}

// ---------------------------------------------------------------------------
// Fixture tables
// ---------------------------------------------------------------------------

#[test]
fn card_number_fixtures() {
    for (raw, stored) in CARD_NUMBERS {
        assert_eq!(normalizer::card_number(raw).as_deref(), Some(*stored), "raw input {raw:?}");
    }
}

#[test]
fn overlong_card_numbers_are_rejected() {
    for raw in OVERLONG_CARD_NUMBERS {
        assert_eq!(normalizer::card_number(raw), None, "raw input {raw:?}");
    }
}

#[test]
fn overlong_card_number_keeps_stored_value() {
    let before = FormBuilder::new().number("5500").build();
    for raw in OVERLONG_CARD_NUMBERS {
        assert_eq!(before.apply(FieldEdit::new(Field::CardNumber, *raw)), before);
    }
}

#[test]
fn digit_typed_ahead_of_full_number_changes_nothing() {
    let full = FormBuilder::new().number("4111111111111234").build();
    let raw = format!("9{}", full.card_number);
    assert_eq!(full.apply(FieldEdit::new(Field::CardNumber, raw)), full);
}

#[test]
fn expiration_fixtures() {
    for (raw, stored) in EXPIRATIONS {
        assert_eq!(normalizer::expiration(raw), *stored, "raw input {raw:?}");
    }
}

#[test]
fn cvc_fixtures() {
    for (raw, stored) in CVCS {
        assert_eq!(normalizer::cvc(raw), *stored, "raw input {raw:?}");
    }
}

#[test]
fn holder_name_fixtures() {
    for (raw, stored) in HOLDER_NAMES {
        assert_eq!(
            normalizer::holder_name(raw).as_deref(),
            Some(*stored),
            "raw input {raw:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Individual edge cases
// ---------------------------------------------------------------------------

#[rstest]
#[case::one_digit("1", "1")]
#[case::two_digits("12", "12")]
#[case::third_digit_adds_slash("123", "12/3")]
#[case::over_length("123456", "12/34")]
#[case::typed_slash_is_ignored("1/2", "12")]
fn expiration_slash_rule(#[case] raw: &str, #[case] stored: &str) {
    assert_eq!(normalizer::expiration(raw), stored);
}

#[rstest]
#[case::exactly_thirty(30, true)]
#[case::thirty_one(31, false)]
#[case::way_over(64, false)]
fn holder_name_length_limit(#[case] len: usize, #[case] accepted: bool) {
    let raw = "a".repeat(len);
    assert_eq!(normalizer::holder_name(&raw).is_some(), accepted);
}

#[test]
fn holder_name_limit_counts_after_stripping() {
    // Forty characters in, thirty letters after the digits are dropped
    let raw = format!("{}{}", "a".repeat(30), "1".repeat(10));
    assert_eq!(normalizer::holder_name(&raw).map(|n| n.len()), Some(HOLDER_NAME_MAX));
}

#[test]
fn non_ascii_digits_are_not_digits() {
    // Arabic-Indic digits must not leak into the stored number
    assert_eq!(normalizer::card_number("٤١١١").as_deref(), Some(""));
    assert_eq!(normalizer::cvc("١٢٣"), "");
}

#[test]
fn card_digits_strips_grouping() {
    assert_eq!(normalizer::card_digits("4111 1111 11"), "4111111111");
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn snapshot_card_number_growth() {
    let steps: Vec<String> = (1..=17)
        .map(|n| {
            normalizer::card_number(&"1234567890123456789"[..n])
                .unwrap_or_else(|| "(rejected)".to_string())
        })
        .collect();
    insta::assert_snapshot!(steps.join("\n"), @r"
    1
    12
    123
    1234
    1234 5
    1234 56
    1234 567
    1234 5678
    1234 5678 9
    1234 5678 90
    1234 5678 901
    1234 5678 9012
    1234 5678 9012 3
    1234 5678 9012 34
    1234 5678 9012 345
    1234 5678 9012 3456
    (rejected)
    ");
}

#[test]
fn snapshot_holder_name_cleanup() {
    let out = normalizer::holder_name("  mARÍA   josé\tde la o'hara 3rd ").unwrap_or_default();
    insta::assert_snapshot!(format!("[{out}]"), @"[ MARA Jos De La Ohara Rd ]");
}

// ---------------------------------------------------------------------------
// Keystroke replay through the form
// ---------------------------------------------------------------------------

/// Feed `text` into `field` one character at a time, the way an input that
/// always appends would.
fn type_chars(field: Field, text: &str) -> CardFormState {
    text.chars().fold(CardFormState::default(), |form, c| {
        let mut raw = form.value(field).to_string();
        raw.push(c);
        form.apply(FieldEdit::new(field, raw))
    })
}

#[rstest]
#[case::number(Field::CardNumber, "4111111111111111")]
#[case::expiration(Field::Expiration, "1229")]
#[case::cvc(Field::Cvc, "123")]
#[case::name(Field::HolderName, "ada lovelace")]
fn typing_matches_pasting(#[case] field: Field, #[case] text: &str) {
    let typed = type_chars(field, text);
    let pasted = CardFormState::default().apply(FieldEdit::new(field, text));
    assert_eq!(typed, pasted);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn card_number_is_idempotent(raw in keystrokes(40)) {
        if let Some(once) = normalizer::card_number(&raw) {
            prop_assert_eq!(normalizer::card_number(&once), Some(once.clone()));
            assert_grouped_number!(once);
        }
    }

    #[test]
    fn expiration_is_idempotent(raw in keystrokes(12)) {
        let once = normalizer::expiration(&raw);
        prop_assert_eq!(normalizer::expiration(&once), once.clone());
        assert_expiration_shape!(once);
    }

    #[test]
    fn cvc_is_idempotent(raw in keystrokes(12)) {
        let once = normalizer::cvc(&raw);
        prop_assert_eq!(normalizer::cvc(&once), once.clone());
        prop_assert!(once.len() <= 3);
        prop_assert!(once.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn holder_name_is_idempotent(raw in keystrokes(40)) {
        if let Some(once) = normalizer::holder_name(&raw) {
            prop_assert_eq!(normalizer::holder_name(&once), Some(once.clone()));
            assert_holder_shape!(once);
        }
    }

    #[test]
    fn card_number_keeps_digit_order(raw in keystrokes(40)) {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let stored = normalizer::card_number(&raw);
        prop_assert_eq!(stored.is_some(), digits.len() <= 16);
        if let Some(stored) = stored {
            prop_assert_eq!(normalizer::card_digits(&stored), digits);
        }
    }
}
