//! Numberle - CLI
//!
//! Equation-guessing game with TUI and CLI modes, plus corpus tooling.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numberle::{
    commands::{PlayOptions, check_equation, run_audit, run_simple},
    core::Equation,
    equations::{
        EQUATIONS,
        loader::{equations_from_slice, load_or_empty},
    },
    game::{Game, GameConfig, TargetSelector},
    output::{print_audit_result, print_check_result},
};
use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Wordle for arithmetic: guess the hidden 7-character equation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus: 'embedded' (default) or path to a file with one equation per line
    #[arg(short, long, global = true, default_value = "embedded")]
    corpus: String,

    /// Always play the fixed equation 1+2+3=6 instead of a random one
    #[arg(long, global = true)]
    fixed: bool,

    /// Number of guesses per game
    #[arg(short, long, global = true, default_value_t = numberle::game::DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Reveal the target when a game starts
    #[arg(long, global = true)]
    show_target: bool,

    /// Do not explain why a guess was rejected
    #[arg(short, long, global = true)]
    quiet_errors: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type guesses at a prompt)
    Simple,

    /// Validate a single equation and show both sides
    Check {
        /// The equation to check
        equation: String,
    },

    /// Validate every line of the corpus
    Audit,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Load the target corpus based on the --corpus flag
///
/// An unreadable file gives an empty corpus, which makes every game use the
/// fallback equation.
fn load_corpus(corpus: &str) -> Vec<Equation> {
    match corpus {
        "embedded" => equations_from_slice(EQUATIONS),
        path => load_or_empty(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = GameConfig::new()
        .with_max_attempts(cli.attempts)
        .with_random_target(!cli.fixed);
    let options = PlayOptions {
        show_target: cli.show_target,
        show_errors: !cli.quiet_errors,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.corpus, config, options),
        Commands::Simple => run_simple_command(&cli.corpus, config, options),
        Commands::Check { equation } => {
            print_check_result(&check_equation(&equation));
            Ok(())
        }
        Commands::Audit => run_audit_command(&cli.corpus),
    }
}

fn run_play_command(corpus: &str, config: GameConfig, options: PlayOptions) -> Result<()> {
    use numberle::interactive::{App, run_tui};

    let game = Game::start(config, TargetSelector::new(load_corpus(corpus)));
    run_tui(App::new(game, options))
}

fn run_simple_command(corpus: &str, config: GameConfig, options: PlayOptions) -> Result<()> {
    let mut game = Game::start(config, TargetSelector::new(load_corpus(corpus)));
    run_simple(&mut game, options).map_err(|e| anyhow::anyhow!(e))
}

fn run_audit_command(corpus: &str) -> Result<()> {
    let result = if corpus == "embedded" {
        run_audit(EQUATIONS, true)
    } else {
        let content = std::fs::read_to_string(corpus)
            .with_context(|| format!("Failed to read corpus {corpus}"))?;
        let lines: Vec<&str> = content.lines().collect();
        run_audit(&lines, true)
    };

    print_audit_result(&result);
    Ok(())
}
