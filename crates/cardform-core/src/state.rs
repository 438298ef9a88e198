//! Form state and its update function.
//!
//! [`CardFormState`] only ever holds normalised values. It changes through
//! [`CardFormState::apply`], which takes the previous state and one field
//! edit and returns the next state, leaving every other field untouched.

use crate::generator::RandomCard;
use crate::network::{classify, CardNetwork};
use crate::normalizer;
use std::collections::BTreeMap;

/// One of the four inputs the form knows how to mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CardNumber,
    HolderName,
    Expiration,
    Cvc,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 4] = [
        Field::CardNumber,
        Field::HolderName,
        Field::Expiration,
        Field::Cvc,
    ];

    /// Look a field up by input name. Accepts camelCase and snake_case.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "cardNumber" | "card_number" => Some(Field::CardNumber),
            "fullName" | "full_name" | "holder_name" => Some(Field::HolderName),
            "expiration" => Some(Field::Expiration),
            "cvc" => Some(Field::Cvc),
            _ => None,
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::CardNumber => "Card number",
            Field::HolderName => "Cardholder name",
            Field::Expiration => "Expiration",
            Field::Cvc => "Security code",
        }
    }

    /// Hint shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::CardNumber => "1234 1234 1234 1234",
            Field::HolderName => "e.g. Fernando Bell",
            Field::Expiration => "MM/YY",
            Field::Cvc => "123",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::CardNumber => write!(f, "card_number"),
            Field::HolderName => write!(f, "holder_name"),
            Field::Expiration => write!(f, "expiration"),
            Field::Cvc => write!(f, "cvc"),
        }
    }
}

/// Which input an edit is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Field(Field),
    /// An input the form does not mask; its value is stored verbatim.
    Other(String),
}

impl EditTarget {
    pub fn from_name(name: &str) -> Self {
        Field::from_name(name)
            .map(EditTarget::Field)
            .unwrap_or_else(|| EditTarget::Other(name.to_string()))
    }
}

/// The full text an input holds after a keystroke, before masking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub target: EditTarget,
    pub raw: String,
}

impl FieldEdit {
    pub fn new(field: Field, raw: impl Into<String>) -> Self {
        Self { target: EditTarget::Field(field), raw: raw.into() }
    }

    /// Build an edit from an input name, as a form submission would carry it.
    pub fn named(name: &str, raw: impl Into<String>) -> Self {
        Self { target: EditTarget::from_name(name), raw: raw.into() }
    }
}

/// The card entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFormState {
    pub holder_name: String,
    /// Grouped in blocks of four, e.g. `4111 1111 11`.
    pub card_number: String,
    /// `MM/YY` once three or more digits are present.
    pub expiration: String,
    pub cvc: String,
    /// Show the back of the card. Display only.
    pub flipped: bool,
    /// Inputs the form does not mask, keyed by name.
    pub extras: BTreeMap<String, String>,
}

impl CardFormState {
    /// Return the state after applying `edit`.
    ///
    /// Only the targeted field changes. A holder name or card number that
    /// would exceed its length limit leaves the state as it was.
    pub fn apply(&self, edit: FieldEdit) -> CardFormState {
        let mut next = self.clone();
        match edit.target {
            EditTarget::Field(Field::HolderName) => match normalizer::holder_name(&edit.raw) {
                Some(name) => next.holder_name = name,
                None => {
                    tracing::debug!(raw = %edit.raw, "holder name over length limit, edit ignored");
                }
            },
            EditTarget::Field(Field::CardNumber) => match normalizer::card_number(&edit.raw) {
                Some(number) => next.card_number = number,
                None => {
                    tracing::debug!(raw = %edit.raw, "card number over length limit, edit ignored");
                }
            },
            EditTarget::Field(Field::Expiration) => {
                next.expiration = normalizer::expiration(&edit.raw);
            }
            EditTarget::Field(Field::Cvc) => {
                next.cvc = normalizer::cvc(&edit.raw);
            }
            EditTarget::Other(name) => {
                next.extras.insert(name, edit.raw);
            }
        }
        next
    }

    /// Current stored value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::HolderName => &self.holder_name,
            Field::Expiration => &self.expiration,
            Field::Cvc => &self.cvc,
        }
    }

    /// Network of the current card number.
    pub fn network(&self) -> CardNetwork {
        classify(&self.card_number)
    }

    /// Return the state with every card field replaced by `card`. The flip
    /// flag and extras are kept.
    pub fn with_random(&self, card: RandomCard) -> CardFormState {
        CardFormState {
            holder_name: card.holder_name,
            card_number: card.card_number,
            expiration: card.expiration,
            cvc: card.cvc,
            flipped: self.flipped,
            extras: self.extras.clone(),
        }
    }

    /// Return the state with the flip flag inverted.
    pub fn toggle_flip(&self) -> CardFormState {
        CardFormState { flipped: !self.flipped, ..self.clone() }
    }

    /// Return an empty form.
    pub fn clear(&self) -> CardFormState {
        CardFormState::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
