//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;

pub use audit::{AuditResult, RejectedEntry, run_audit};
pub use check::{CheckResult, check_equation};
pub use simple::run_simple;

/// Presentation switches shared by the CLI and TUI front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    /// Show the target when a game starts
    pub show_target: bool,
    /// Explain why a guess was rejected
    pub show_errors: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            show_target: false,
            show_errors: true,
        }
    }
}
