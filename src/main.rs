use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardform", about = "Credit card entry form with a live card preview")]
struct Cli {
    /// Write debug logs to /tmp/cardform-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Colour theme (default, gruvbox). Overrides `[ui] theme`.
    #[arg(long)]
    theme: Option<String>,

    /// Config file to read instead of ~/.config/cardform/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/cardform-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("cardform debug log started, tail -f /tmp/cardform-debug.log");
    }

    cardform_tui::run(cardform_tui::RunOptions {
        config_path: cli.config,
        theme: cli.theme,
    })
}
