//! Numberle game state machine
//!
//! A `Game` owns one session at a time: the hidden target, the attempt
//! counter, the accepted guesses with their feedback, and the cumulative
//! keyboard colouring. Rejected guesses never change any of it.

use super::config::GameConfig;
use super::target::TargetSelector;
use crate::core::{
    ALPHABET, EQUATION_LENGTH, Equation, EquationError, Feedback, GrammarFault, TileSets,
};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, info, trace};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// The guess was valid and consumed an attempt
    Accepted,
    /// The guess is not exactly 7 characters
    InvalidLength,
    /// The guess does not contain exactly one `=`
    NoEqualSign,
    /// The guess does not match the equation grammar
    MissingSymbols(GrammarFault),
    /// Both sides parse but evaluate to different values
    NotEqual,
}

impl ResultCode {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Message shown to the player for this outcome
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Guess accepted",
            Self::InvalidLength => "Invalid input: the equation must be 7 characters",
            Self::NoEqualSign => "No equal '=' sign.",
            Self::MissingSymbols(GrammarFault::MissingOperator) => {
                "There must be at least one '+-*/'."
            }
            Self::MissingSymbols(GrammarFault::Malformed) => "The equation is not well formed.",
            Self::NotEqual => "The left side is not equal to the right.",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<EquationError> for ResultCode {
    fn from(err: EquationError) -> Self {
        match err {
            EquationError::InvalidLength(_) => Self::InvalidLength,
            EquationError::NoEqualSign => Self::NoEqualSign,
            EquationError::MissingSymbols(fault) => Self::MissingSymbols(fault),
            EquationError::NotEqual => Self::NotEqual,
        }
    }
}

/// Error for guesses submitted outside a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    NotStarted,
    AlreadyOver(GameState),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "No game in progress; start a new game first"),
            Self::AlreadyOver(state) => write!(f, "The game is already over ({state:?})"),
        }
    }
}

impl std::error::Error for GameError {}

/// An accepted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Equation,
    pub feedback: Feedback,
}

/// One player's Numberle session
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    selector: TargetSelector,
    state: GameState,
    target: Option<Equation>,
    remaining_attempts: u32,
    history: Vec<Attempt>,
    tiles: TileSets,
    used: FxHashSet<char>,
}

impl Game {
    /// Create a game that has not started yet
    #[must_use]
    pub fn new(config: GameConfig, selector: TargetSelector) -> Self {
        Self {
            config,
            selector,
            state: GameState::NotStarted,
            target: None,
            remaining_attempts: config.max_attempts,
            history: Vec::new(),
            tiles: TileSets::new(),
            used: FxHashSet::default(),
        }
    }

    /// Create a game and immediately start its first session
    ///
    /// # Examples
    /// ```
    /// use numberle::game::{Game, GameConfig, ResultCode, TargetSelector};
    ///
    /// let config = GameConfig::new().with_random_target(false);
    /// let mut game = Game::start(config, TargetSelector::new(Vec::new()));
    ///
    /// assert_eq!(game.submit_guess("1+2+3=7").unwrap(), ResultCode::NotEqual);
    /// assert_eq!(game.submit_guess("1+2+3=6").unwrap(), ResultCode::Accepted);
    /// assert!(game.is_won());
    /// ```
    #[must_use]
    pub fn start(config: GameConfig, selector: TargetSelector) -> Self {
        let mut game = Self::new(config, selector);
        game.start_new_game();
        game
    }

    /// Begin a fresh session, discarding everything from the previous one
    pub fn start_new_game(&mut self) {
        let target = self.selector.select(self.config.random_target);
        debug!(target = %target, "starting new game");

        self.target = Some(target);
        self.remaining_attempts = self.config.max_attempts;
        self.history.clear();
        self.tiles.clear();
        self.used.clear();
        self.state = GameState::InProgress;
    }

    /// Submit a guess
    ///
    /// Returns the result code for the guess. Only `Accepted` guesses consume
    /// an attempt or change any state.
    ///
    /// # Errors
    /// Returns `GameError` if no session is in progress.
    pub fn submit_guess(&mut self, input: &str) -> Result<ResultCode, GameError> {
        let target = match self.state {
            GameState::NotStarted => return Err(GameError::NotStarted),
            GameState::Won | GameState::Lost => return Err(GameError::AlreadyOver(self.state)),
            GameState::InProgress => self.target.as_ref().ok_or(GameError::NotStarted)?,
        };

        if input.chars().count() != EQUATION_LENGTH {
            debug!(input, "rejected guess: invalid length");
            return Ok(ResultCode::InvalidLength);
        }

        let guess = match Equation::new(input) {
            Ok(guess) => guess,
            Err(err) => {
                let code = ResultCode::from(err);
                debug!(input, ?code, "rejected guess");
                return Ok(code);
            }
        };

        let feedback = Feedback::calculate(&guess, target);
        for (i, (ch, classification)) in guess
            .chars()
            .iter()
            .zip(feedback.classifications())
            .enumerate()
        {
            trace!(position = i, %ch, ?classification, "classified");
        }

        let won = feedback.is_perfect();
        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        self.tiles.record_guess(&guess, &feedback);
        self.used
            .extend(guess.chars().iter().filter(|ch| ALPHABET.contains(*ch)));
        info!(
            guess = %guess,
            feedback = %feedback.to_emoji(),
            remaining = self.remaining_attempts,
            "accepted guess"
        );
        self.history.push(Attempt { guess, feedback });

        if won {
            self.state = GameState::Won;
            info!(attempts = self.history.len(), "game won");
        } else if self.remaining_attempts == 0 {
            self.state = GameState::Lost;
            info!("game lost");
        }

        Ok(ResultCode::Accepted)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    /// The hidden target, for reveal-on-loss and show-answer features
    #[must_use]
    pub const fn target(&self) -> Option<&Equation> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Change whether future sessions draw a random target
    pub const fn set_random_target_selection(&mut self, random: bool) {
        self.config.random_target = random;
    }

    /// Feedback for the most recent accepted guess
    #[must_use]
    pub fn position_feedback(&self) -> Option<&Feedback> {
        self.history.last().map(|attempt| &attempt.feedback)
    }

    /// Accepted guesses of the current session, oldest first
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Cumulative green, orange and gray character sets
    #[must_use]
    pub const fn classification_sets(&self) -> &TileSets {
        &self.tiles
    }

    /// Alphabet characters not yet used in any accepted guess, in alphabet order
    #[must_use]
    pub fn unused_characters(&self) -> Vec<char> {
        ALPHABET
            .iter()
            .copied()
            .filter(|ch| !self.used.contains(ch))
            .collect()
    }

    /// Whether restarting makes sense (at least one guess has been accepted)
    #[must_use]
    pub fn can_restart(&self) -> bool {
        !self.history.is_empty()
    }
}
