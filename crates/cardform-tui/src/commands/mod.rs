// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Fill the form with a random test card
    Random,
    // Turn the card over
    Flip,
    // Empty every field
    Clear,
    // Press the pay button
    Submit,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" => Ok(Command::Quit),
            "help" | "h" => Ok(Command::Help),
            "random" | "rand" => Ok(Command::Random),
            "flip" => Ok(Command::Flip),
            "clear" => Ok(Command::Clear),
            "submit" | "pay" => Ok(Command::Submit),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            tracing::debug!(theme = %name, "switching theme");
            s.theme = Theme::by_name(&name);
        }
        Command::Random => s.fill_random(),
        Command::Flip => s.flip(),
        Command::Clear => {
            s.form = s.form.clear();
            s.input.cursor = 0;
        }
        Command::Submit => s.submit(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("random"), Ok(Command::Random));
        assert_eq!(Command::parse("flip"), Ok(Command::Flip));
        assert_eq!(Command::parse("clear"), Ok(Command::Clear));
        assert_eq!(Command::parse("submit"), Ok(Command::Submit));
    }

    #[test]
    fn parse_trims_surrounding_space() {
        assert_eq!(Command::parse("  flip  "), Ok(Command::Flip));
    }

    #[test]
    fn parse_theme_takes_argument() {
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
        assert!(Command::parse("theme").unwrap_err().starts_with("usage"));
    }

    #[test]
    fn empty_input_is_sentinel() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("   "), Err(String::new()));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            Command::parse("checkout"),
            Err("unknown command: checkout".to_string())
        );
    }
}
