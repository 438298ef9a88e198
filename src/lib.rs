//! cardform — credit card entry form
//!
//! A terminal form that masks card input as it is typed and mirrors it on a
//! live card preview. This crate re-exports the workspace layers so that
//! integration tests and benchmarks can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! keys ──► event ──► CardFormState::apply ──► normalizer
//!                          │
//!                          ├──► classifier ──► asset bundle ──► theme
//!                          └──► preview / form widgets
//! ```
//!
//! Everything runs on the main thread; each key press is one synchronous
//! state transition.

pub use cardform_core::{
    config, generator, mask, network, normalizer, state, CardFormState, CardGenerator,
    CardNetwork, EditTarget, Error, Field, FieldEdit, RandomCard, Result,
};
pub use cardform_tui as ui;
