//! Test builders — ergonomic constructors for form states and generators.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use cardform_core::{
    config::GeneratorConfig, CardFormState, CardGenerator, Field, FieldEdit,
};
use rand::{rngs::StdRng, SeedableRng};

// ---------------------------------------------------------------------------
// FormBuilder
// ---------------------------------------------------------------------------

/// Fluent builder that types raw text into a [`CardFormState`] through
/// [`CardFormState::apply`], the same path key presses take.
///
/// # Example
///
/// ```rust
/// let form = FormBuilder::new()
///     .number("4111111111111111")
///     .name("ada lovelace")
///     .build();
/// ```
#[derive(Default)]
pub struct FormBuilder {
    state: CardFormState,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(self, raw: &str) -> Self {
        self.edit(Field::CardNumber, raw)
    }

    pub fn name(self, raw: &str) -> Self {
        self.edit(Field::HolderName, raw)
    }

    pub fn expiration(self, raw: &str) -> Self {
        self.edit(Field::Expiration, raw)
    }

    pub fn cvc(self, raw: &str) -> Self {
        self.edit(Field::Cvc, raw)
    }

    pub fn edit(mut self, field: Field, raw: &str) -> Self {
        self.state = self.state.apply(FieldEdit::new(field, raw));
        self
    }

    pub fn build(self) -> CardFormState {
        self.state
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// A generator over the default `[generator]` section, anchored at 2026.
pub fn default_generator() -> CardGenerator {
    CardGenerator::new(&GeneratorConfig::default(), 2026)
        .expect("default generator config must be valid")
}

/// A generator over custom prefixes, anchored at 2026.
pub fn generator_with_prefixes(prefixes: &[&str]) -> CardGenerator {
    let config = GeneratorConfig {
        prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        ..GeneratorConfig::default()
    };
    CardGenerator::new(&config, 2026).expect("prefixes must be valid")
}

/// A deterministic RNG.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
