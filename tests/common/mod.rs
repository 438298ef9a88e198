//! Shared test utilities for cardform integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Randomness is always seeded so every run sees the same
//! cards.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
