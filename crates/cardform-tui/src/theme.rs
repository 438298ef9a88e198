//! Colour theme and card artwork for the cardform TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk.
//!
//! # Artwork
//!
//! The core crate picks card artwork by opaque asset id (see
//! [`cardform_core::AssetBundle`]). A theme resolves those ids: the
//! `[backgrounds]` table maps background ids to card-face styles, and the
//! `[glyphs]` table maps logo, icon, chip and contactless ids to styled text.
//! Missing ids render as unstyled space, never as an error.

use cardform_core::CardNetwork;
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawGlyph {
    text: String,
    #[serde(default)]
    fg: Option<String>,
    #[serde(default)]
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
}

impl RawGlyph {
    fn into_glyph(self) -> Glyph {
        let style = RawStyle {
            fg: self.fg,
            bg: self.bg,
            bold: self.bold,
            dim: false,
            italic: self.italic,
            underlined: false,
        }
        .into_style();
        Glyph { text: self.text, style }
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawForm {
    label: RawStyle,
    value: RawStyle,
    placeholder: RawStyle,
    button: RawStyle,
    button_focused: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    text: RawStyle,
    mask: RawStyle,
    stripe: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    form: RawForm,
    card: RawCard,
    backgrounds: HashMap<String, RawStyle>,
    glyphs: HashMap<String, RawGlyph>,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// A piece of artwork drawn as styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub style: Style,
}

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values, so nothing is
/// parsed at render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border style for the focused input.
    pub border_focused: Style,
    /// Border style for everything else.
    pub border_unfocused: Style,

    pub form_label: Style,
    pub form_value: Style,
    pub form_placeholder: Style,
    pub button: Style,
    pub button_focused: Style,
    /// Inline error text (command bar).
    pub error: Style,

    /// Text printed on the card face.
    pub card_text: Style,
    /// Placeholder glyphs on the card face.
    pub card_mask: Style,
    /// Magnetic stripe on the back of the card.
    pub card_stripe: Style,

    backgrounds: HashMap<String, Style>,
    glyphs: HashMap<String, Glyph>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Look a built-in theme up by name, falling back to the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            form_label: raw.form.label.into_style(),
            form_value: raw.form.value.into_style(),
            form_placeholder: raw.form.placeholder.into_style(),
            button: raw.form.button.into_style(),
            button_focused: raw.form.button_focused.into_style(),
            error: raw.form.error.into_style(),
            card_text: raw.card.text.into_style(),
            card_mask: raw.card.mask.into_style(),
            card_stripe: raw.card.stripe.into_style(),
            backgrounds: raw
                .backgrounds
                .into_iter()
                .map(|(id, s)| (id, s.into_style()))
                .collect(),
            glyphs: raw
                .glyphs
                .into_iter()
                .map(|(id, g)| (id, g.into_glyph()))
                .collect(),
        })
    }

    /// Card-face style for a background asset id.
    pub fn background(&self, id: &str) -> Style {
        self.backgrounds.get(id).copied().unwrap_or_default()
    }

    /// Styled text for a logo, icon or shared artwork id.
    pub fn glyph(&self, id: &str) -> Option<&Glyph> {
        self.glyphs.get(id)
    }

    /// Card-face style for a network.
    pub fn network_background(&self, network: CardNetwork) -> Style {
        self.background(network.assets().background)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
