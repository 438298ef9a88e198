//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `F1` (insert mode) or the help key (normal mode); close with
//! the same key or `Escape`.

use crate::theme::Theme;
use cardform_core::config::KeybindingsConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    theme: &'a Theme,
    keys: &'a KeybindingsConfig,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme, keys: &'a KeybindingsConfig) -> Self {
        Self { theme, keys }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        let k = self.keys;
        vec![
            ("Insert mode".to_string(), ""),
            ("Tab / Shift+Tab".to_string(), "Next / previous input"),
            ("← / →".to_string(), "Move the text cursor"),
            ("Enter".to_string(), "Next input, or press the focused button"),
            ("Ctrl+r".to_string(), "Fill with random test data"),
            ("Ctrl+f".to_string(), "Flip the card"),
            ("Esc".to_string(), "Switch to normal mode"),
            ("Ctrl+c".to_string(), "Quit"),
            (String::new(), ""),
            ("Normal mode".to_string(), ""),
            (k.insert.clone(), "Back to insert mode"),
            ("j k / ↓ ↑".to_string(), "Next / previous input"),
            (k.random_fill.clone(), "Fill with random test data"),
            (k.flip.clone(), "Flip the card"),
            (k.command.clone(), "Command line"),
            (k.help.clone(), "Toggle this help popup"),
            (k.quit.clone(), "Quit"),
        ]
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bindings = self.bindings();
        let popup = centered_rect(64, bindings.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" cardform — keybindings (Esc to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = bindings
            .into_iter()
            .map(|(key, desc)| {
                if desc.is_empty() {
                    return Line::from(Span::styled(key, self.theme.form_label));
                }
                Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
