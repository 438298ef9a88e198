//! Random test-card generator.
//!
//! Produces records that look like cards but are not: a known network
//! prefix padded with random digits, a plausible expiration and a random
//! security code. The number, expiration and code are already in stored
//! form and the holder name is taken from the roster verbatim, so a card is
//! assigned to the form state wholesale rather than replayed through the
//! normalizer.

use crate::config::GeneratorConfig;
use crate::normalizer::{group_digits, CARD_NUMBER_DIGITS};
use chrono::Datelike;
use rand::Rng;

/// A generated card. Everything but the holder name is already masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomCard {
    pub holder_name: String,
    pub card_number: String,
    pub expiration: String,
    pub cvc: String,
}

/// Generator built from a validated `[generator]` config section.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefixes: Vec<String>,
    names: Vec<String>,
    years_ahead: u8,
    /// Two-digit year generated expirations start from.
    base_year: u32,
}

impl CardGenerator {
    /// Build a generator whose expirations start at `base_year`.
    ///
    /// Fails when there are no prefixes or names, or when a prefix is not
    /// 1–16 ASCII digits.
    pub fn new(config: &GeneratorConfig, base_year: i32) -> crate::Result<Self> {
        if config.prefixes.is_empty() {
            return Err(crate::Error::Generator("no card prefixes configured".to_string()));
        }
        if let Some(bad) = config.prefixes.iter().find(|p| !is_valid_prefix(p)) {
            return Err(crate::Error::Generator(format!(
                "prefix {bad:?} must be 1-{CARD_NUMBER_DIGITS} digits"
            )));
        }
        if config.names.iter().all(|n| n.trim().is_empty()) {
            return Err(crate::Error::Generator("no holder names configured".to_string()));
        }

        Ok(Self {
            prefixes: config.prefixes.clone(),
            names: config
                .names
                .iter()
                .filter(|n| !n.trim().is_empty())
                .cloned()
                .collect(),
            years_ahead: config.years_ahead,
            base_year: base_year.rem_euclid(100) as u32,
        })
    }

    /// Build a generator whose expirations start at the current local year.
    pub fn for_current_year(config: &GeneratorConfig) -> crate::Result<Self> {
        Self::new(config, chrono::Local::now().year())
    }

    /// Generate one card.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> RandomCard {
        let prefix = &self.prefixes[rng.gen_range(0..self.prefixes.len())];
        let mut digits = prefix.clone();
        while digits.len() < CARD_NUMBER_DIGITS {
            digits.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }

        let month: u32 = rng.gen_range(1..=12);
        let year = (self.base_year + rng.gen_range(0..=u32::from(self.years_ahead))) % 100;
        let cvc: u32 = rng.gen_range(100..=999);
        let holder_name = self.names[rng.gen_range(0..self.names.len())].clone();

        let card = RandomCard {
            holder_name,
            card_number: group_digits(&digits),
            expiration: format!("{month:02}/{year:02}"),
            cvc: cvc.to_string(),
        };
        tracing::debug!(prefix = %prefix, expiration = %card.expiration, "generated random card");
        card
    }

    /// The prefixes generated numbers start with.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix.len() <= CARD_NUMBER_DIGITS
        && prefix.bytes().all(|b| b.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn generator() -> CardGenerator {
        CardGenerator::new(&GeneratorConfig::default(), 2026).unwrap()
    }

    #[test]
    fn number_is_sixteen_grouped_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        let card = generator().generate(&mut rng);
        assert_eq!(card.card_number.len(), 19);
        assert_eq!(card.card_number.matches(' ').count(), 3);
        assert_eq!(
            crate::normalizer::card_number(&card.card_number).as_deref(),
            Some(card.card_number.as_str())
        );
    }

    #[test]
    fn expiration_starts_at_base_year() {
        let config = GeneratorConfig { years_ahead: 0, ..GeneratorConfig::default() };
        let gen = CardGenerator::new(&config, 2026).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(gen.generate(&mut rng).expiration.ends_with("/26"));
        }
    }

    #[test]
    fn year_wraps_past_the_century() {
        let config = GeneratorConfig { years_ahead: 5, ..GeneratorConfig::default() };
        let gen = CardGenerator::new(&config, 2098).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let yy: u32 = gen.generate(&mut rng).expiration[3..].parse().unwrap();
            assert!(yy >= 98 || yy <= 3, "year {yy} out of range");
        }
    }

    #[test]
    fn rejects_empty_prefixes() {
        let config = GeneratorConfig { prefixes: vec![], ..GeneratorConfig::default() };
        assert!(matches!(
            CardGenerator::new(&config, 2026),
            Err(crate::Error::Generator(_))
        ));
    }

    #[test]
    fn rejects_non_digit_prefix() {
        let config = GeneratorConfig {
            prefixes: vec!["45a1".to_string()],
            ..GeneratorConfig::default()
        };
        let err = CardGenerator::new(&config, 2026).unwrap_err();
        assert!(err.to_string().contains("45a1"));
    }

    #[test]
    fn rejects_blank_names() {
        let config = GeneratorConfig {
            names: vec!["  ".to_string()],
            ..GeneratorConfig::default()
        };
        assert!(CardGenerator::new(&config, 2026).is_err());
    }

    #[test]
    fn full_length_prefix_is_used_verbatim() {
        let config = GeneratorConfig {
            prefixes: vec!["4111111111111111".to_string()],
            ..GeneratorConfig::default()
        };
        let gen = CardGenerator::new(&config, 2026).unwrap();
        let card = gen.generate(&mut StdRng::seed_from_u64(0));
        assert_eq!(card.card_number, "4111 1111 1111 1111");
    }
}
