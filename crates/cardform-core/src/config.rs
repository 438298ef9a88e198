//! Configuration types for cardform.
//!
//! [`Config::load`] reads `~/.config/cardform/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme              = "default"
mask_glyph         = "•"
holder_placeholder = "FULL NAME"
preview_width_pct  = 55

[keybindings]
quit        = "q"
help        = "?"
command     = ":"
random_fill = "r"
flip        = "f"
insert      = "i"

[generator]
prefixes    = ["3742", "3782", "5425", "5251", "4917", "4509"]
years_ahead = 13
names = [
    "Jose Lopez",
    "Mirtha Valencia",
    "Joaquin del Solar",
    "Micaela Velazquez Reinoso",
    "Cristina Vertolici",
    "Cristina Vertolici",
    "Juan Bautista Cuban",
    "Enrique Certuli",
]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/cardform/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Glyph used to pad partially typed values on the card preview.
    #[serde(default = "default_mask_glyph")]
    pub mask_glyph: String,
    /// Shown on the card while the holder name is empty.
    #[serde(default = "default_holder_placeholder")]
    pub holder_placeholder: String,
    #[serde(default = "default_preview_width_pct")]
    pub preview_width_pct: u16,
}

fn default_theme() -> String { "default".to_string() }
fn default_mask_glyph() -> String { "•".to_string() }
fn default_holder_placeholder() -> String { "FULL NAME".to_string() }
fn default_preview_width_pct() -> u16 { 55 }

impl UiConfig {
    /// First character of `mask_glyph`, or `•` when it is empty.
    pub fn mask_char(&self) -> char {
        self.mask_glyph.chars().next().unwrap_or('•')
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mask_glyph: default_mask_glyph(),
            holder_placeholder: default_holder_placeholder(),
            preview_width_pct: default_preview_width_pct(),
        }
    }
}

/// `[keybindings]` section of `config.toml`. These apply in normal mode.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_random_fill")]
    pub random_fill: String,
    #[serde(default = "default_flip")]
    pub flip: String,
    #[serde(default = "default_insert")]
    pub insert: String,
}

fn default_quit() -> String { "q".to_string() }
fn default_help() -> String { "?".to_string() }
fn default_command() -> String { ":".to_string() }
fn default_random_fill() -> String { "r".to_string() }
fn default_flip() -> String { "f".to_string() }
fn default_insert() -> String { "i".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            quit: default_quit(),
            help: default_help(),
            command: default_command(),
            random_fill: default_random_fill(),
            flip: default_flip(),
            insert: default_insert(),
        }
    }
}

/// `[generator]` section of `config.toml`: inputs for the random test card.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Network prefixes a generated number starts with, picked uniformly.
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    /// Generated expiration years fall in `this_year..=this_year + years_ahead`.
    #[serde(default = "default_years_ahead")]
    pub years_ahead: u8,
    /// Holder names, picked uniformly. A name listed twice is drawn twice as
    /// often.
    #[serde(default = "default_names")]
    pub names: Vec<String>,
}

fn default_prefixes() -> Vec<String> {
    ["3742", "3782", "5425", "5251", "4917", "4509"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_years_ahead() -> u8 { 13 }
fn default_names() -> Vec<String> {
    [
        "Jose Lopez",
        "Mirtha Valencia",
        "Joaquin del Solar",
        "Micaela Velazquez Reinoso",
        "Cristina Vertolici",
        "Cristina Vertolici",
        "Juan Bautista Cuban",
        "Enrique Certuli",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            years_ahead: default_years_ahead(),
            names: default_names(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/cardform/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    /// Creates the file with defaults if it does not exist.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("cardform")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
