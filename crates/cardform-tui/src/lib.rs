//! cardform TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use cardform_core::config::Config;
use std::path::PathBuf;

/// Startup overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Config file to use instead of `~/.config/cardform/config.toml`.
    pub config_path: Option<PathBuf>,
    /// Theme name overriding `[ui] theme`.
    pub theme: Option<String>,
}

/// Load the config and theme, then run the TUI until the user quits.
pub fn run(opts: RunOptions) -> anyhow::Result<()> {
    let loaded = match &opts.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        Config::defaults()
    });

    let theme_name = opts.theme.clone().unwrap_or_else(|| config.ui.theme.clone());
    tracing::info!(theme = %theme_name, "starting cardform");

    build_app(config, &theme_name)?.run()
}

/// Build the app from `config`, retrying with the built-in defaults when the
/// config loaded but holds values the app cannot use.
fn build_app(config: Config, theme_name: &str) -> anyhow::Result<App> {
    match App::new(config, theme::Theme::by_name(theme_name)) {
        Ok(app) => Ok(app),
        Err(e) => {
            tracing::warn!(error = %e, "config rejected, using defaults");
            App::new(Config::defaults(), theme::Theme::by_name(theme_name))
        }
    }
}
