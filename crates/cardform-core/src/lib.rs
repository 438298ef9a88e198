//! cardform-core — masking, classification and state for the card form.
//!
//! # Architecture
//!
//! ```text
//! keystroke ──► FieldEdit ──► CardFormState::apply ──► normalizer
//!                                   │
//!                                   ├──► network::classify ──► AssetBundle ──► renderer
//!                                   └──► mask (render-time padding)
//!
//! "random" ──► CardGenerator ──► CardFormState::with_random
//! ```
//!
//! Nothing in this crate touches the terminal; the front end lives in
//! `cardform-tui`.

pub mod config;
pub mod error;
pub mod generator;
pub mod mask;
pub mod network;
pub mod normalizer;
pub mod state;

pub use error::{Error, Result};
pub use generator::{CardGenerator, RandomCard};
pub use network::{classify, AssetBundle, CardNetwork};
pub use state::{CardFormState, EditTarget, Field, FieldEdit};
