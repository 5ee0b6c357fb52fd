//! Equation check command
//!
//! Reports how the game would judge a single guess, with the value of each
//! side when the guess is well formed.

use crate::core::{Equation, evaluate, is_well_formed};
use crate::game::ResultCode;

/// Result of checking one candidate equation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub input: String,
    pub code: ResultCode,
    /// Left and right side values, when the candidate matches the grammar
    pub sides: Option<(f64, f64)>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.code.is_accepted()
    }
}

/// Judge `input` exactly as a submitted guess would be judged
#[must_use]
pub fn check_equation(input: &str) -> CheckResult {
    let code = match Equation::new(input) {
        Ok(_) => ResultCode::Accepted,
        Err(err) => ResultCode::from(err),
    };

    let sides = if is_well_formed(input) {
        input.split_once('=').and_then(|(lhs, rhs)| {
            let lhs = evaluate(lhs).ok()?;
            let rhs = evaluate(rhs).ok()?;
            Some((lhs, rhs))
        })
    } else {
        None
    };

    CheckResult {
        input: input.to_string(),
        code,
        sides,
    }
}
