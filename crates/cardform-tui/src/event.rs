//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Modes
//!
//! The form starts in insert mode, where printable keys type into the
//! focused input. `Esc` switches to normal mode, where single keys trigger
//! actions. The normal-mode action keys come from `[keybindings]` in the
//! config file and are resolved once into a [`Keymap`].
//!
//! ## Insert mode
//!
//! | Key(s)                  | Event              |
//! |-------------------------|--------------------|
//! | `Ctrl+c`                | `Quit`             |
//! | `Ctrl+r`                | `RandomFill`       |
//! | `Ctrl+f`                | `Flip`             |
//! | `F1`                    | `Help`             |
//! | `Tab`, `↓`              | `FocusNext`        |
//! | `Shift+Tab`, `↑`        | `FocusPrev`        |
//! | `←` / `→`               | `CursorLeft/Right` |
//! | printable char          | `Char(c)`          |
//! | `Backspace`             | `Backspace`        |
//! | `Enter`                 | `Enter`            |
//! | `Esc`                   | `Escape`           |
//!
//! ## Normal mode
//!
//! | Key(s)                  | Event              |
//! |-------------------------|--------------------|
//! | `q` (configurable)      | `Quit`             |
//! | `?` (configurable)      | `Help`             |
//! | `:` (configurable)      | `CommandMode`      |
//! | `r` (configurable)      | `RandomFill`       |
//! | `f` (configurable)      | `Flip`             |
//! | `i` (configurable)      | `InsertMode`       |
//! | `Tab`, `j`, `↓`         | `FocusNext`        |
//! | `Shift+Tab`, `k`, `↑`   | `FocusPrev`        |
//! | `Enter`                 | `Enter`            |
//! | `Esc`                   | `Escape`           |

use cardform_core::config::KeybindingsConfig;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::str::FromStr;

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move focus to the next input or button.
    FocusNext,
    /// Move focus to the previous input or button.
    FocusPrev,
    /// A printable character for the focused input.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the text cursor one character left.
    CursorLeft,
    /// Move the text cursor one character right.
    CursorRight,
    /// Activate the focused button, or advance from an input.
    Enter,
    /// Leave insert mode, or dismiss the active overlay.
    Escape,
    /// Fill the form with a random test card.
    RandomFill,
    /// Turn the card preview over.
    Flip,
    /// Toggle the help popup.
    Help,
    /// Open the `:` command bar.
    CommandMode,
    /// Return to insert mode.
    InsertMode,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

// ---------------------------------------------------------------------------
// Key bindings
// ---------------------------------------------------------------------------

/// Error returned when a `[keybindings]` entry cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeySpecError {
    #[error("empty key binding")]
    Empty,
    #[error("unknown key {0:?}")]
    Unknown(String),
}

/// A single key plus modifiers, parsed from strings such as `r`, `?`,
/// `Ctrl+r`, `F2` or `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Whether `key` triggers this binding. Plain character bindings also
    /// match with Shift held, since terminals disagree on whether `?` or `G`
    /// report it.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) if self.modifiers == KeyModifiers::NONE => {
                key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
            }
            _ => key.modifiers == self.modifiers,
        }
    }
}

impl FromStr for KeyBinding {
    type Err = KeySpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeySpecError::Empty);
        }
        // A lone "+" is a key, not a separator.
        let (modifiers, key) = match s.rsplit_once('+') {
            Some((prefix, key)) if !key.is_empty() => (parse_modifiers(prefix, s)?, key),
            _ => (KeyModifiers::NONE, s),
        };

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => match key.to_ascii_lowercase().as_str() {
                "enter" => KeyCode::Enter,
                "esc" | "escape" => KeyCode::Esc,
                "tab" => KeyCode::Tab,
                "space" => KeyCode::Char(' '),
                f if f.starts_with('f') => f[1..]
                    .parse::<u8>()
                    .map(KeyCode::F)
                    .map_err(|_| KeySpecError::Unknown(s.to_string()))?,
                _ => return Err(KeySpecError::Unknown(s.to_string())),
            },
        };
        Ok(KeyBinding { code, modifiers })
    }
}

fn parse_modifiers(prefix: &str, spec: &str) -> Result<KeyModifiers, KeySpecError> {
    prefix.split('+').try_fold(KeyModifiers::NONE, |acc, m| {
        match m.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Ok(acc | KeyModifiers::CONTROL),
            "alt" => Ok(acc | KeyModifiers::ALT),
            "shift" => Ok(acc | KeyModifiers::SHIFT),
            _ => Err(KeySpecError::Unknown(spec.to_string())),
        }
    })
}

/// Normal-mode action keys resolved from the config.
#[derive(Debug, Clone)]
pub struct Keymap {
    pub quit: KeyBinding,
    pub help: KeyBinding,
    pub command: KeyBinding,
    pub random_fill: KeyBinding,
    pub flip: KeyBinding,
    pub insert: KeyBinding,
}

impl Keymap {
    pub fn from_config(cfg: &KeybindingsConfig) -> Result<Self, KeySpecError> {
        Ok(Self {
            quit: cfg.quit.parse()?,
            help: cfg.help.parse()?,
            command: cfg.command.parse()?,
            random_fill: cfg.random_fill.parse()?,
            flip: cfg.flip.parse()?,
            insert: cfg.insert.parse()?,
        })
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
            .expect("default keybindings must parse")
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Map a raw crossterm [`Event`] to an [`AppEvent`] in normal mode.
///
/// Returns `None` for events with no meaning here (mouse, unbound keys).
pub fn to_app_event(event: Event, keymap: &Keymap) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key, keymap),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] while typing.
///
/// Every printable character is forwarded as [`AppEvent::Char`]; only
/// control chords, function keys and navigation keys keep a meaning.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent, keymap: &Keymap) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    // Ctrl+c always quits, whatever the keymap says
    if key.code == Char('c') && key.modifiers == Mod::CONTROL {
        return Some(AppEvent::Quit);
    }

    let bound = [
        (&keymap.quit, AppEvent::Quit),
        (&keymap.help, AppEvent::Help),
        (&keymap.command, AppEvent::CommandMode),
        (&keymap.random_fill, AppEvent::RandomFill),
        (&keymap.flip, AppEvent::Flip),
        (&keymap.insert, AppEvent::InsertMode),
    ];
    if let Some((_, ev)) = bound.into_iter().find(|(b, _)| b.matches(&key)) {
        return Some(ev);
    }

    match key.code {
        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::FocusPrev),
        Enter => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),
        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('r') if key.modifiers == Mod::CONTROL => Some(AppEvent::RandomFill),
        Char('f') if key.modifiers == Mod::CONTROL => Some(AppEvent::Flip),
        F(1) => Some(AppEvent::Help),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),
        Down => Some(AppEvent::FocusNext),
        Up => Some(AppEvent::FocusPrev),
        Left => Some(AppEvent::CursorLeft),
        Right => Some(AppEvent::CursorRight),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace => Some(AppEvent::Backspace),
        Enter => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
