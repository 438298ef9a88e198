//! Title bar widget — the 1-line strip at the top of the screen.

use crate::app::Mode;
use cardform_core::{config::KeybindingsConfig, CardNetwork};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Shows the app name, the editing mode and the detected network, with
/// keybinding hints right-aligned in the same row.
pub struct TitleBar<'a> {
    mode: Mode,
    network: CardNetwork,
    keys: &'a KeybindingsConfig,
}

impl<'a> TitleBar<'a> {
    pub fn new(mode: Mode, network: CardNetwork, keys: &'a KeybindingsConfig) -> Self {
        Self { mode, network, keys }
    }

    fn hint(&self) -> String {
        match self.mode {
            Mode::Insert => " Esc:normal  Ctrl+r:random  F1:help ".to_string(),
            Mode::Normal => format!(
                " {}:quit  {}:random  {}:flip  {}:help ",
                self.keys.quit, self.keys.random_fill, self.keys.flip, self.keys.help
            ),
        }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = match self.mode {
            Mode::Insert => " INSERT ",
            Mode::Normal => " NORMAL ",
        };
        let line = Line::from(vec![
            Span::styled(" cardform ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                mode,
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", self.network)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = self.hint();
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
