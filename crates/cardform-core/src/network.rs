//! Card classifier — maps a card number to its payment network.
//!
//! Classification runs an ordered list of prefix patterns and returns the
//! network of the first one that matches. The prefixes are mutually
//! exclusive, so the order only matters for the catch-all at the end.
//!
//! The result also selects the [`AssetBundle`] the renderer draws the card
//! with. Asset identifiers are opaque here; the front end decides what they
//! look like.

use regex::Regex;
use std::sync::LazyLock;

/// Payment network inferred from a card number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    Visa,
    American,
    Mastercard,
    Unknown,
}

impl std::fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardNetwork::Visa => write!(f, "visa"),
            CardNetwork::American => write!(f, "american"),
            CardNetwork::Mastercard => write!(f, "mastercard"),
            CardNetwork::Unknown => write!(f, "unknown"),
        }
    }
}

/// Ordered `(network, pattern)` table. `Unknown` is not listed; it is what
/// [`classify`] returns when nothing here matches.
static PATTERNS: LazyLock<Vec<(CardNetwork, Regex)>> = LazyLock::new(|| {
    [
        (CardNetwork::Visa, r"^4"),
        (CardNetwork::American, r"^3[47]"),
        (CardNetwork::Mastercard, r"^(5[1-5]|22[2-9]|2[3-7])"),
    ]
    .into_iter()
    .map(|(network, pattern)| {
        let re = Regex::new(pattern).expect("card network pattern must compile");
        (network, re)
    })
    .collect()
});

/// Classify a card number. Spaces are ignored, so grouped and bare numbers
/// give the same answer. The empty string is [`CardNetwork::Unknown`].
pub fn classify(number: &str) -> CardNetwork {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&digits))
        .map(|(network, _)| *network)
        .unwrap_or(CardNetwork::Unknown)
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Shared chip artwork, drawn on every card.
pub const CHIP: &str = "chip";
/// Shared contactless artwork, drawn on every card.
pub const CONTACTLESS: &str = "contactless";

/// The artwork a card is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetBundle {
    /// Card face background.
    pub background: &'static str,
    /// Network logo on the card face.
    pub logo: Option<&'static str>,
    /// Small network icon shown inside the card-number input.
    pub icon: Option<&'static str>,
}

const VISA_ASSETS: AssetBundle = AssetBundle {
    background: "visa_background",
    logo: Some("visa_logo"),
    icon: Some("visa_icon"),
};

const AMERICAN_ASSETS: AssetBundle = AssetBundle {
    background: "american_background",
    logo: Some("american_logo"),
    icon: Some("american_icon"),
};

const MASTERCARD_ASSETS: AssetBundle = AssetBundle {
    background: "mastercard_background",
    logo: Some("mastercard_logo"),
    icon: Some("mastercard_icon"),
};

const UNKNOWN_ASSETS: AssetBundle = AssetBundle {
    background: "unknown_background",
    logo: None,
    icon: None,
};

impl CardNetwork {
    /// Every network, in classification order with the fallback last.
    pub const ALL: [CardNetwork; 4] = [
        CardNetwork::Visa,
        CardNetwork::American,
        CardNetwork::Mastercard,
        CardNetwork::Unknown,
    ];

    /// The asset bundle used to render a card of this network.
    pub fn assets(self) -> &'static AssetBundle {
        match self {
            CardNetwork::Visa => &VISA_ASSETS,
            CardNetwork::American => &AMERICAN_ASSETS,
            CardNetwork::Mastercard => &MASTERCARD_ASSETS,
            CardNetwork::Unknown => &UNKNOWN_ASSETS,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
