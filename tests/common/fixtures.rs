//! Static input corpora used across harnesses.
//!
//! Most corpora are a `&'static [(&str, &str)]` of raw input paired with the
//! value the form should store for it. Rejected inputs are listed on their
//! own.

/// Raw card-number input and the stored value.
pub const CARD_NUMBERS: &[(&str, &str)] = &[
    ("", ""),
    ("4", "4"),
    ("4111", "4111"),
    ("41111", "4111 1"),
    ("4111111111111111", "4111 1111 1111 1111"),
    ("4111 1111 1111 1111", "4111 1111 1111 1111"),
    ("4111-1111-1111-1111", "4111 1111 1111 1111"),
    ("abcd", ""),
    ("  37 82 82 24 63 10 005 ", "3782 8224 6310 005"),
];

/// Raw card-number input with more than sixteen digits; each is rejected.
pub const OVERLONG_CARD_NUMBERS: &[&str] = &[
    "41111111111111119999",
    "4111 1111 1111 1111 1",
    "94111 1111 1111 1234",
    "4111-1111-1111-1111-0000",
];

/// Raw expiration input and the stored value.
pub const EXPIRATIONS: &[(&str, &str)] = &[
    ("", ""),
    ("1", "1"),
    ("12", "12"),
    ("123", "12/3"),
    ("1225", "12/25"),
    ("12/25", "12/25"),
    ("123456", "12/34"),
    ("ab", ""),
];

/// Raw CVC input and the stored value.
pub const CVCS: &[(&str, &str)] = &[
    ("", ""),
    ("1", "1"),
    ("123", "123"),
    ("1234", "123"),
    ("1a2b3c", "123"),
];

/// Raw holder-name input and the stored value.
pub const HOLDER_NAMES: &[(&str, &str)] = &[
    ("", ""),
    ("john", "John"),
    ("john o'brien123", "John Obrien"),
    ("ADA   LOVELACE", "ADA LOVELACE"),
    ("jean-luc picard", "Jeanluc Picard"),
    ("  leading space", " Leading Space"),
];

/// Test card numbers and the network they belong to, by network name.
pub const KNOWN_CARDS: &[(&str, &str)] = &[
    ("4000000000000000", "visa"),
    ("4111 1111 1111 1111", "visa"),
    ("378282246310005", "american"),
    ("341111111111111", "american"),
    ("5500000000000000", "mastercard"),
    ("5105105105105100", "mastercard"),
    ("2221000000000009", "mastercard"),
    ("2720990000000000", "mastercard"),
    ("6011000000000000", "unknown"),
    ("3530111333300000", "unknown"),
    ("", "unknown"),
];
