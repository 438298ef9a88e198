//! Form widget — the four card inputs and the two action buttons.
//!
//! # Editing
//!
//! A keystroke is turned into the text the input would hold afterwards (the
//! stored value with the character inserted at the cursor, or with the
//! character before the cursor removed) and run through
//! [`CardFormState::apply`]. The masked result replaces the stored value and
//! the cursor jumps to its end, the way a reformatted text input behaves.
//!
//! Because masking only runs forward, deleting a group separator is a no-op
//! (the digits are re-grouped exactly as before) and deleting a digit inside
//! a group shifts every later digit left.

use crate::app::Focus;
use crate::event::AppEvent;
use crate::theme::Theme;
use cardform_core::{CardFormState, Field, FieldEdit};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub const PAY_LABEL: &str = "Pay";
pub const RANDOM_LABEL: &str = "Generate random data";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Text cursor of the focused input.
#[derive(Debug, Default)]
pub struct FormInputState {
    /// Byte offset of the cursor within the focused field's value.
    pub cursor: usize,
}

impl FormInputState {
    /// Put the cursor at the end of `field`'s current value.
    pub fn move_to_end(&mut self, form: &CardFormState, field: Field) {
        self.cursor = form.value(field).len();
    }

    /// Handle an editing event for `field`.
    ///
    /// Returns the next form state when the event was an edit, `None` for
    /// cursor movement and events this widget ignores.
    pub fn handle(
        &mut self,
        form: &CardFormState,
        field: Field,
        event: &AppEvent,
    ) -> Option<CardFormState> {
        let value = form.value(field);
        let mut cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(cursor) {
            cursor -= 1;
        }

        match event {
            AppEvent::Char(c) => {
                let mut raw = value.to_string();
                raw.insert(cursor, *c);
                Some(self.commit(form, field, raw))
            }
            AppEvent::Backspace => {
                let (prev, _) = value[..cursor].char_indices().last()?;
                let mut raw = value.to_string();
                raw.remove(prev);
                Some(self.commit(form, field, raw))
            }
            AppEvent::CursorLeft => {
                self.cursor = value[..cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                None
            }
            AppEvent::CursorRight => {
                self.cursor = value[cursor..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| cursor + i)
                    .unwrap_or(value.len());
                None
            }
            _ => None,
        }
    }

    fn commit(&mut self, form: &CardFormState, field: Field, raw: String) -> CardFormState {
        let next = form.apply(FieldEdit::new(field, raw));
        if next.value(field) != form.value(field) {
            self.cursor = next.value(field).len();
        }
        tracing::debug!(%field, value = %next.value(field), cursor = self.cursor, "form: edit");
        next
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Screen areas of each form element.
#[derive(Debug, Clone, Copy)]
pub struct FormLayout {
    pub card_number: Rect,
    pub holder_name: Rect,
    pub expiration: Rect,
    pub cvc: Rect,
    pub pay: Rect,
    pub random: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(area);

        let pair = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        Self {
            card_number: rows[0],
            holder_name: rows[1],
            expiration: pair[0],
            cvc: pair[1],
            pay: rows[4],
            random: rows[5],
        }
    }

    pub fn input(&self, field: Field) -> Rect {
        match field {
            Field::CardNumber => self.card_number,
            Field::HolderName => self.holder_name,
            Field::Expiration => self.expiration,
            Field::Cvc => self.cvc,
        }
    }
}

pub struct CardForm<'a> {
    form: &'a CardFormState,
    focus: Focus,
    theme: &'a Theme,
}

impl<'a> CardForm<'a> {
    pub fn new(form: &'a CardFormState, focus: Focus, theme: &'a Theme) -> Self {
        Self { form, focus, theme }
    }

    /// Absolute terminal position of the text cursor for `field`, given the
    /// byte `cursor` within its value.
    pub fn cursor_position(&self, area: Rect, field: Field, cursor: usize) -> (u16, u16) {
        let input = FormLayout::new(area).input(field);
        let value = self.form.value(field);
        let col = value[..cursor.min(value.len())].chars().count() as u16;
        let x = (input.x + 1 + col).min(input.right().saturating_sub(2));
        (x, input.y + 1)
    }

    fn render_input(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Input(field);
        let border_style = if focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title(Span::styled(field.label(), self.theme.form_label))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let value = self.form.value(field);
        let line = if value.is_empty() {
            Line::from(Span::styled(field.placeholder(), self.theme.form_placeholder))
        } else {
            Line::from(Span::styled(value, self.theme.form_value))
        };
        Paragraph::new(line).render(inner, buf);

        // The number input carries the network icon at its right edge
        if field == Field::CardNumber {
            let icon = self
                .form
                .network()
                .assets()
                .icon
                .and_then(|id| self.theme.glyph(id));
            if let Some(icon) = icon {
                Paragraph::new(Line::from(Span::styled(icon.text.as_str(), icon.style)))
                    .alignment(Alignment::Right)
                    .render(inner, buf);
            }
        }
    }

    fn render_button(&self, label: &str, target: Focus, area: Rect, buf: &mut Buffer) {
        let style = if self.focus == target {
            self.theme.button_focused
        } else {
            self.theme.button
        };
        Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), style)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CardForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = FormLayout::new(area);
        for field in Field::ALL {
            self.render_input(field, layout.input(field), buf);
        }
        self.render_button(PAY_LABEL, Focus::Pay, layout.pay, buf);
        self.render_button(RANDOM_LABEL, Focus::Random, layout.random, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
