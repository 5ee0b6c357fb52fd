//! Simple interactive CLI mode
//!
//! Text-based Numberle game without the TUI: type a guess, read the coloured
//! feedback, repeat until the equation is found or the attempts run out.

use super::PlayOptions;
use crate::core::Equation;
use crate::game::{Game, GameState, ResultCode};
use crate::output::formatters::{char_list, feedback_row, feedback_to_emoji, tile_summary};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(game: &mut Game, options: PlayOptions) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(game, options, &mut stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())
}

/// Drive the game from `input`, writing everything to `out`
///
/// Ends when the player quits, declines another game, or `input` is exhausted.
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    options: PlayOptions,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Numberle - Command Line Version              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the hidden equation. Every guess must be a true equation of")?;
    writeln!(out, "exactly 7 characters using digits, + - * / and a single '='.\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game, 'answer' to reveal\n")?;

    if game.state() == GameState::NotStarted {
        game.start_new_game();
    }
    announce_game(game, options, out)?;

    loop {
        if game.is_over() {
            report_outcome(game, out)?;

            let Some(answer) = prompt(input, out, "Play again? (yes/no)")? else {
                return Ok(());
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                game.start_new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
                announce_game(game, options, out)?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let Some(line) = prompt(input, out, "Enter your guess")? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                if game.can_restart() {
                    game.start_new_game();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    announce_game(game, options, out)?;
                } else {
                    writeln!(out, "Make at least one valid guess before restarting.\n")?;
                }
                continue;
            }
            "answer" | "show" => {
                if let Some(target) = game.target() {
                    writeln!(out, "The correct equation is: {}\n", target.text().bright_yellow())?;
                }
                continue;
            }
            _ => {}
        }

        let code = match game.submit_guess(&line) {
            Ok(code) => code,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        if code == ResultCode::Accepted {
            if let Some(attempt) = game.history().last() {
                writeln!(
                    out,
                    "\n  {}  {}\n",
                    feedback_row(&attempt.guess, &attempt.feedback),
                    feedback_to_emoji(&attempt.feedback)
                )?;
            }
        } else if options.show_errors {
            writeln!(out, "{}", format!("❌ {code}").red())?;
        }

        if !game.is_over() {
            writeln!(out, "Unused characters: {}", char_list(&game.unused_characters()))?;
            writeln!(out, "{}", tile_summary(game.classification_sets()))?;
            writeln!(
                out,
                "\nTry again. You have {} attempts left.\n",
                game.remaining_attempts()
            )?;
        }
    }
}

fn announce_game<W: Write>(game: &Game, options: PlayOptions, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "You have {} attempts to guess. The equation has 7 characters.",
        game.remaining_attempts()
    )?;
    if options.show_target
        && let Some(target) = game.target()
    {
        writeln!(out, "(Target: {})", target.text().bright_black())?;
    }
    writeln!(out)
}

fn report_outcome<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    if game.is_won() {
        let guesses = game.history().len();
        writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
        writeln!(
            out,
            "{}",
            format!(
                "    🎉 You won!! Solved in {guesses} {}",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        )?;
        writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    } else {
        let target = game.target().map_or("", Equation::text);
        writeln!(
            out,
            "{} {}",
            "You Lost! The correct equation is:".red().bold(),
            target.bright_yellow()
        )?;
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, attempt) in game.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            i + 1,
            attempt.guess.text().bright_white().bold(),
            feedback_to_emoji(&attempt.feedback)
        )?;
    }
    writeln!(out)
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
