//! Numberle
//!
//! A Wordle-style game where the hidden answer is a 7-character arithmetic
//! equation such as `1+2+3=6`. Guesses must themselves be true equations and
//! are scored per position as correct, present or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::game::{Game, GameConfig, ResultCode, TargetSelector};
//!
//! // A fixed target uses the built-in fallback equation
//! let config = GameConfig::new().with_random_target(false);
//! let mut game = Game::start(config, TargetSelector::seeded(Vec::new(), 0));
//!
//! assert_eq!(game.submit_guess("1+2+3=7").unwrap(), ResultCode::NotEqual);
//! assert_eq!(game.submit_guess("3+2+2=7").unwrap(), ResultCode::Accepted);
//! println!("{}", game.position_feedback().unwrap().to_emoji());
//!
//! game.submit_guess("1+2+3=6").unwrap();
//! assert!(game.is_won());
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Equation corpus
pub mod equations;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
