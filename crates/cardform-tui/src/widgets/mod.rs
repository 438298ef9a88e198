//! Ratatui widgets for the cardform TUI.

pub mod card_preview;
pub mod command_bar;
pub mod form;
pub mod help;
pub mod title_bar;
