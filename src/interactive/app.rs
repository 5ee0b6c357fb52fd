//! TUI application state and logic

use crate::commands::PlayOptions;
use crate::core::{ALPHABET, EQUATION_LENGTH};
use crate::game::{Game, GameState, ResultCode};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub options: PlayOptions,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub reveal_target: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the sessions played in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, game: &Game) {
        self.total_games += 1;
        if game.is_won() {
            self.games_won += 1;
            let guesses = game.history().len();
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(mut game: Game, options: PlayOptions) -> Self {
        if game.state() == GameState::NotStarted {
            game.start_new_game();
        }

        let mut app = Self {
            game,
            options,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            reveal_target: options.show_target,
        };
        app.add_message(
            "Welcome! Guess the hidden 7-character equation.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type digits, + - * / and '=', then press Enter.",
            MessageStyle::Info,
        );
        app
    }

    /// Append a typed character if it can appear in an equation
    pub fn push_char(&mut self, ch: char) {
        if self.input_buffer.chars().count() < EQUATION_LENGTH
            && (ALPHABET.contains(&ch) || ch == '=')
        {
            self.input_buffer.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        let code = match self.game.submit_guess(&input) {
            Ok(code) => code,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if code != ResultCode::Accepted {
            if self.options.show_errors {
                self.add_message(code.message(), MessageStyle::Error);
            }
            return;
        }

        self.input_buffer.clear();

        if self.game.is_over() {
            self.stats.record(&self.game);
            self.input_mode = InputMode::GameOver;

            if self.game.is_won() {
                let celebration = match self.game.history().len() {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            } else {
                let target = self
                    .game
                    .target()
                    .map(|t| t.text().to_string())
                    .unwrap_or_default();
                self.add_message(
                    &format!("No attempts left! The correct equation was: {target}"),
                    MessageStyle::Error,
                );
            }
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(
                &format!(
                    "Try again! Attempts remaining: {}",
                    self.game.remaining_attempts()
                ),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode == InputMode::Guessing && !self.game.can_restart() {
            self.add_message(
                "Make at least one valid guess before restarting.",
                MessageStyle::Error,
            );
            return;
        }

        // Abandoning a running game counts as a loss
        let abandoned = !self.game.is_over();
        if abandoned {
            self.stats.record(&self.game);
        }

        self.game.start_new_game();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.reveal_target = self.options.show_target;
        self.add_message("New game started!", MessageStyle::Info);
        if abandoned {
            self.add_message(
                "The unfinished game was counted as a loss.",
                MessageStyle::Info,
            );
        }
    }

    /// Switch between random and fixed targets for the next game
    pub fn toggle_random_target(&mut self) {
        let random = !self.game.config().random_target;
        self.game.set_random_target_selection(random);
        let text = if random {
            "Next game uses a random target."
        } else {
            "Next game uses the fixed target."
        };
        self.add_message(text, MessageStyle::Info);
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_target = !self.reveal_target;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Enter => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('r') => app.toggle_reveal(),
                    KeyCode::Char('f') => app.toggle_random_target(),
                    KeyCode::Char(c) => app.push_char(c),
                    KeyCode::Backspace => app.pop_char(),
                    KeyCode::Enter => app.submit(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equation;
    use crate::game::{GameConfig, TargetSelector};

    fn app() -> App {
        let config = GameConfig::new().with_random_target(false);
        let game = Game::new(config, TargetSelector::seeded(Vec::new(), 0));
        App::new(game, PlayOptions::default())
    }

    fn type_guess(app: &mut App, guess: &str) {
        for ch in guess.chars() {
            app.push_char(ch);
        }
        app.submit();
    }

    #[test]
    fn new_app_starts_game() {
        let app = app();
        assert_eq!(app.game.state(), GameState::InProgress);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(!app.reveal_target);
    }

    #[test]
    fn push_char_filters_and_limits() {
        let mut app = app();
        for ch in "1a+2 b+3=6=9".chars() {
            app.push_char(ch);
        }
        assert_eq!(app.input_buffer, "1+2+3=6");
        app.pop_char();
        assert_eq!(app.input_buffer, "1+2+3=");
    }

    #[test]
    fn rejected_guess_keeps_buffer_and_attempts() {
        let mut app = app();
        type_guess(&mut app, "1+2+3=7");
        assert_eq!(app.input_buffer, "1+2+3=7");
        assert_eq!(app.game.remaining_attempts(), 6);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "The left side is not equal to the right.");
    }

    #[test]
    fn win_updates_stats() {
        let mut app = app();
        type_guess(&mut app, "3+2+2=7");
        assert!(app.input_buffer.is_empty());
        type_guess(&mut app, "1+2+3=6");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.remaining_attempts(), 6);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn restart_needs_valid_guess() {
        let mut app = app();
        app.new_game();
        assert_eq!(app.stats.total_games, 0);
        assert_eq!(
            app.messages.last().unwrap().text,
            "Make at least one valid guess before restarting."
        );

        type_guess(&mut app, "2*8-9=7");
        app.new_game();
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.game.history().is_empty());
        assert_eq!(
            app.messages.last().unwrap().text,
            "The unfinished game was counted as a loss."
        );
    }

    #[test]
    fn finished_game_restart_has_no_loss_notice() {
        let mut app = app();
        type_guess(&mut app, "1+2+3=6");
        app.new_game();
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].text, "New game started!");
    }

    #[test]
    fn toggle_random_target_applies_to_next_game() {
        let config = GameConfig::new().with_random_target(true);
        let corpus = vec![Equation::new("2*8-9=7").unwrap()];
        let game = Game::new(config, TargetSelector::seeded(corpus, 0));
        let mut app = App::new(game, PlayOptions::default());
        assert_eq!(app.game.target().unwrap().text(), "2*8-9=7");

        app.toggle_random_target();
        assert!(!app.game.config().random_target);
        assert_eq!(
            app.messages.last().unwrap().text,
            "Next game uses the fixed target."
        );
        // The running game keeps its target
        assert_eq!(app.game.target().unwrap().text(), "2*8-9=7");

        type_guess(&mut app, "1+2*3=7");
        app.new_game();
        assert_eq!(app.game.target().unwrap().text(), "1+2+3=6");

        app.toggle_random_target();
        assert!(app.game.config().random_target);
        type_guess(&mut app, "1+2*3=7");
        app.new_game();
        assert_eq!(app.game.target().unwrap().text(), "2*8-9=7");
    }

    #[test]
    fn loss_reveals_target_in_messages() {
        let config = GameConfig::new()
            .with_random_target(false)
            .with_max_attempts(1);
        let game = Game::start(config, TargetSelector::seeded(Vec::new(), 0));
        let mut app = App::new(game, PlayOptions::default());

        type_guess(&mut app, "2*8-9=7");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The correct equation was: 1+2+3=6"))
        );
    }

    #[test]
    fn toggle_reveal() {
        let mut app = app();
        app.toggle_reveal();
        assert!(app.reveal_target);
        app.toggle_reveal();
        assert!(!app.reveal_target);
    }
}
