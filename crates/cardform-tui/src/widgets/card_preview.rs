//! Card preview widget — the live card face on the left of the screen.
//!
//! The card is redrawn from the form state on every frame. The network of
//! the current number picks the background and logo through the theme; the
//! chip and contactless artwork are drawn on every card. Partially typed
//! values are padded with the mask glyph here and nowhere else.

use super::help::centered_rect;
use crate::theme::Theme;
use cardform_core::{
    mask,
    network::{CHIP, CONTACTLESS},
    CardFormState,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};

/// Card face size in cells, roughly the ISO card aspect ratio in a terminal.
const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 13;

pub struct CardPreview<'a> {
    form: &'a CardFormState,
    theme: &'a Theme,
    glyph: char,
    holder_placeholder: &'a str,
}

impl<'a> CardPreview<'a> {
    pub fn new(
        form: &'a CardFormState,
        theme: &'a Theme,
        glyph: char,
        holder_placeholder: &'a str,
    ) -> Self {
        Self { form, theme, glyph, holder_placeholder }
    }

    fn front(&self, width: usize) -> Vec<Line<'a>> {
        let assets = self.form.network().assets();
        let logo = assets
            .logo
            .and_then(|id| self.theme.glyph(id))
            .map(|g| vec![Span::styled(g.text.clone(), g.style)])
            .unwrap_or_default();

        let groups = mask::number_groups(&self.form.card_number, self.glyph);
        let mut number = Vec::new();
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                number.push(Span::raw("  "));
            }
            number.extend(self.masked(group));
        }

        let holder = mask::holder(&self.form.holder_name, self.holder_placeholder);
        let holder_style = if self.form.holder_name.is_empty() {
            self.theme.card_mask
        } else {
            self.theme.card_text
        };
        let expiration = mask::expiration(&self.form.expiration, self.glyph);

        let mut cvc = vec![Span::styled("CVC ", self.theme.card_mask)];
        cvc.extend(self.masked(&mask::cvc(&self.form.cvc, self.glyph)));

        vec![
            spread(self.artwork(CHIP), logo, width),
            spread(Vec::new(), self.artwork(CONTACTLESS), width),
            Line::default(),
            Line::from(number).centered(),
            Line::default(),
            spread(
                vec![Span::styled(holder, holder_style)],
                self.masked(&expiration),
                width,
            ),
            Line::from(cvc),
        ]
    }

    fn back(&self, width: usize) -> Vec<Line<'a>> {
        let stripe = Line::from(Span::styled(" ".repeat(width), self.theme.card_stripe));
        let signature = Span::styled(
            "░".repeat(width.saturating_sub(8)),
            self.theme.card_mask,
        );
        vec![
            Line::default(),
            stripe.clone(),
            stripe,
            Line::default(),
            spread(
                vec![signature],
                self.masked(&mask::cvc(&self.form.cvc, self.glyph)),
                width,
            ),
        ]
    }

    /// Split a masked value into digit spans and placeholder spans.
    fn masked(&self, value: &str) -> Vec<Span<'a>> {
        value
            .chars()
            .map(|c| {
                let style = if c == self.glyph {
                    self.theme.card_mask
                } else {
                    self.theme.card_text
                };
                Span::styled(c.to_string(), style)
            })
            .collect()
    }

    fn artwork(&self, id: &str) -> Vec<Span<'a>> {
        self.theme
            .glyph(id)
            .map(|g| vec![Span::styled(g.text.clone(), g.style)])
            .unwrap_or_default()
    }
}

impl Widget for CardPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        Clear.render(card, buf);

        let face: Style = self.theme.network_background(self.form.network());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::new(2, 2, 1, 0))
            .style(face);
        let inner = block.inner(card);
        block.render(card, buf);

        let width = inner.width as usize;
        let lines = if self.form.flipped {
            self.back(width)
        } else {
            self.front(width)
        };
        Paragraph::new(lines).style(face).render(inner, buf);
    }
}

/// A line with `left` flush left and `right` flush right.
fn spread<'a>(left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: usize) -> Line<'a> {
    let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
    spans.extend(right);
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
