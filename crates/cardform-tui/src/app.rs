//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Keymap},
    theme::Theme,
    widgets::{
        card_preview::CardPreview,
        command_bar::{CommandBar, CommandBarState},
        form::{CardForm, FormInputState},
        help::HelpPopup,
        title_bar::TitleBar,
    },
};
use cardform_core::{config::Config, CardFormState, CardGenerator, Field};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Margin, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus + mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    /// The `Pay` button.
    Pay,
    /// The `Generate random data` button.
    Random,
    /// Vim-style `:` command line is active.
    Command,
}

impl Focus {
    /// Tab order: the four inputs, then the two buttons.
    const CYCLE: [Focus; 6] = [
        Focus::Input(Field::CardNumber),
        Focus::Input(Field::HolderName),
        Focus::Input(Field::Expiration),
        Focus::Input(Field::Cvc),
        Focus::Pay,
        Focus::Random,
    ];

    pub fn next(self) -> Focus {
        match Self::CYCLE.iter().position(|f| *f == self) {
            Some(i) => Self::CYCLE[(i + 1) % Self::CYCLE.len()],
            None => Self::CYCLE[0],
        }
    }

    pub fn prev(self) -> Focus {
        match Self::CYCLE.iter().position(|f| *f == self) {
            Some(i) => Self::CYCLE[(i + Self::CYCLE.len() - 1) % Self::CYCLE.len()],
            None => Self::CYCLE[0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Printable keys type into the focused input.
    Insert,
    /// Single keys trigger actions.
    Normal,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub form: CardFormState,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub mode: Mode,
    /// Cursor of the focused input.
    pub input: FormInputState,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub generator: CardGenerator,
    pub rng: StdRng,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Replace every card field with a generated test card.
    pub fn fill_random(&mut self) {
        let card = self.generator.generate(&mut self.rng);
        self.form = self.form.with_random(card);
        if let Focus::Input(field) = self.focus {
            self.input.move_to_end(&self.form, field);
        }
        tracing::debug!(network = %self.form.network(), "random fill");
    }

    pub fn flip(&mut self) {
        self.form = self.form.toggle_flip();
        tracing::debug!(flipped = self.form.flipped, "card flipped");
    }

    /// The pay button. There is no payment backend; the press is only logged.
    pub fn submit(&self) {
        tracing::info!(
            network = %self.form.network(),
            complete = is_complete(&self.form),
            "pay pressed"
        );
    }

    /// Move focus, putting the cursor at the end of a newly focused input.
    pub fn set_focus(&mut self, focus: Focus) {
        tracing::debug!(from = ?self.focus, to = ?focus, "focus change");
        self.focus = focus;
        if let Focus::Input(field) = focus {
            self.input.move_to_end(&self.form, field);
        }
    }
}

fn is_complete(form: &CardFormState) -> bool {
    use cardform_core::normalizer::{card_digits, CARD_NUMBER_DIGITS, CVC_DIGITS, EXPIRATION_DIGITS};
    card_digits(&form.card_number).len() == CARD_NUMBER_DIGITS
        && !form.holder_name.is_empty()
        && card_digits(&form.expiration).len() == EXPIRATION_DIGITS
        && form.cvc.len() == CVC_DIGITS
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> anyhow::Result<Self> {
        Self::with_rng(config, theme, StdRng::from_entropy())
    }

    /// Build an app whose random fills are reproducible.
    pub fn with_seed(config: Config, theme: Theme, seed: u64) -> anyhow::Result<Self> {
        Self::with_rng(config, theme, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, theme: Theme, rng: StdRng) -> anyhow::Result<Self> {
        let keymap = Keymap::from_config(&config.keybindings)?;
        let generator = CardGenerator::for_current_year(&config.generator)?;

        let state = AppState {
            form: CardFormState::default(),
            focus: Focus::Input(Field::CardNumber),
            prev_focus: Focus::Input(Field::CardNumber),
            mode: Mode::Insert,
            input: FormInputState::default(),
            theme,
            config,
            keymap,
            generator,
            rng,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        Ok(App { state })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Typing keeps every printable key, including the command bar
                        let app_event = if self.state.mode == Mode::Insert
                            || self.state.focus == Focus::Command
                        {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw, &self.state.keymap)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                mode = ?self.state.mode,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other, &self.state.keymap) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply one event to the application state.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::CommandMode => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::InsertMode => {
                tracing::debug!("mode: insert");
                s.mode = Mode::Insert;
            }

            AppEvent::Escape => {
                if s.mode == Mode::Insert {
                    tracing::debug!("mode: normal");
                    s.mode = Mode::Normal;
                }
            }

            AppEvent::RandomFill => s.fill_random(),
            AppEvent::Flip => s.flip(),

            AppEvent::FocusNext => {
                let next = s.focus.next();
                s.set_focus(next);
            }
            AppEvent::FocusPrev => {
                let prev = s.focus.prev();
                s.set_focus(prev);
            }

            // Enter advances from an input and presses a button
            AppEvent::Enter => match s.focus {
                Focus::Input(_) => {
                    let next = s.focus.next();
                    s.set_focus(next);
                }
                Focus::Pay => s.submit(),
                Focus::Random => s.fill_random(),
                Focus::Command => {}
            },

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            edit @ (AppEvent::Char(_)
            | AppEvent::Backspace
            | AppEvent::CursorLeft
            | AppEvent::CursorRight) => {
                if let (Mode::Insert, Focus::Input(field)) = (s.mode, s.focus) {
                    if let Some(next) = s.input.handle(&s.form, field, &edit) {
                        s.form = next;
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub(crate) fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line title bar | body
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    // Horizontal body split: card preview | form
    let pct = state.config.ui.preview_width_pct.clamp(20, 80);
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);
    let form_area = horiz[1].inner(Margin::new(1, 1));

    frame.render_widget(
        TitleBar::new(state.mode, state.form.network(), &state.config.keybindings),
        vert[0],
    );
    frame.render_widget(
        CardPreview::new(
            &state.form,
            &state.theme,
            state.config.ui.mask_char(),
            &state.config.ui.holder_placeholder,
        ),
        horiz[0],
    );
    let form = CardForm::new(&state.form, state.focus, &state.theme);
    let input_cursor = match (state.mode, state.focus) {
        (Mode::Insert, Focus::Input(field)) => {
            Some(form.cursor_position(form_area, field, state.input.cursor))
        }
        _ => None,
    };
    frame.render_widget(form, form_area);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme, &state.config.keybindings), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if let (Some(pos), false) = (input_cursor, state.show_help) {
        frame.set_cursor_position(pos);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
