//! Equation validation
//!
//! Classifies a candidate string as a valid equation or names the first
//! check it fails. The checks run in a fixed order and each one
//! short-circuits:
//!
//! 1. exactly one `=` (else [`Verdict::NoEqualSign`])
//! 2. the whole string matches the equation grammar (else [`Verdict::MissingSymbols`])
//! 3. both sides evaluate to the same value within [`TOLERANCE`] (else [`Verdict::NotEqual`])

use super::expression::evaluate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Maximum difference between two sides still considered balanced
///
/// Absorbs floating-point error introduced by division.
pub const TOLERANCE: f64 = 1e-4;

/// Operators allowed between numbers
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

static GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    // ASCII digits only: `\d` would also accept other Unicode digits
    Regex::new(r"^[+-]?[0-9]+([+\-*/][0-9]+)*=[+-]?[0-9]+([+\-*/][0-9]+)*$")
        .expect("grammar regex is valid")
});

/// Why a candidate failed the grammar check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarFault {
    /// No arithmetic operator appears on either side
    MissingOperator,
    /// Any other grammar failure (stray characters, operators in a row, ...)
    Malformed,
}

/// Outcome of validating a candidate equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Valid,
    NoEqualSign,
    MissingSymbols(GrammarFault),
    NotEqual,
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid equation"),
            Self::NoEqualSign => write!(f, "No equal '=' sign."),
            Self::MissingSymbols(GrammarFault::MissingOperator) => {
                write!(f, "There must be at least one '+-*/'.")
            }
            Self::MissingSymbols(GrammarFault::Malformed) => {
                write!(f, "The equation is not well formed.")
            }
            Self::NotEqual => write!(f, "The left side is not equal to the right."),
        }
    }
}

/// Check whether a candidate matches the equation grammar
///
/// The grammar is an optionally signed integer chain on each side of a
/// single `=`, with single operators between integers.
#[must_use]
pub fn is_well_formed(candidate: &str) -> bool {
    GRAMMAR.is_match(candidate)
}

/// Classify a candidate equation
///
/// Length is not checked here; callers that need exactly seven characters
/// check that first.
///
/// The `=` check counts characters, so a trailing `=` with an empty right
/// side still counts as the one required sign: `"*123+5="` gets past it and
/// is rejected by the grammar, not reported as `NoEqualSign`.
///
/// # Panics
/// Panics if a side that matched the grammar fails to evaluate, which would
/// mean the grammar and the evaluator disagree.
///
/// # Examples
/// ```
/// use numberle::core::{classify, GrammarFault, Verdict};
///
/// assert_eq!(classify("1+2+3=6"), Verdict::Valid);
/// assert_eq!(classify("12=12=1"), Verdict::NoEqualSign);
/// assert_eq!(classify("*123+5="), Verdict::MissingSymbols(GrammarFault::Malformed));
/// assert_eq!(classify("1+2+3=7"), Verdict::NotEqual);
/// ```
#[must_use]
pub fn classify(candidate: &str) -> Verdict {
    if candidate.matches('=').count() != 1 {
        return Verdict::NoEqualSign;
    }

    if !is_well_formed(candidate) {
        let fault = if candidate.contains(OPERATORS) {
            GrammarFault::Malformed
        } else {
            GrammarFault::MissingOperator
        };
        return Verdict::MissingSymbols(fault);
    }

    let (lhs, rhs) = candidate
        .split_once('=')
        .expect("exactly one '=' already checked");
    let lhs = evaluate(lhs).expect("left side already matched the grammar");
    let rhs = evaluate(rhs).expect("right side already matched the grammar");

    // NaN and infinity (division by zero) never compare as balanced
    if (lhs - rhs).abs() < TOLERANCE {
        Verdict::Valid
    } else {
        Verdict::NotEqual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_equations() {
        for candidate in [
            "1+2+3=6", "3+2+2=7", "+9+1=10", "2*8-9=7", "-8+5=-3", "1+4*2=9", "+3+2=+5",
        ] {
            assert_eq!(classify(candidate), Verdict::Valid, "{candidate}");
        }
    }

    #[test]
    fn equations_without_operator_are_grammatical() {
        // The grammar allows a bare number on each side
        assert_eq!(classify("123=123"), Verdict::Valid);
        assert_eq!(classify("1234=12"), Verdict::NotEqual);
    }

    #[test]
    fn division_balances_within_tolerance() {
        assert_eq!(classify("1/3*3=1"), Verdict::Valid);
        assert_eq!(classify("8/4/2=1"), Verdict::Valid);
        assert_eq!(classify("7/2=3"), Verdict::NotEqual);
    }

    #[test]
    fn division_by_zero_is_not_equal() {
        assert_eq!(classify("5/0=1+2"), Verdict::NotEqual);
        assert_eq!(classify("1/0=1/0"), Verdict::NotEqual);
        assert_eq!(classify("0/0=0"), Verdict::NotEqual);
    }

    #[test]
    fn equal_sign_count_checked_first() {
        assert_eq!(classify("12=12=1"), Verdict::NoEqualSign);
        assert_eq!(classify("+-*/+-*"), Verdict::NoEqualSign);
        assert_eq!(classify("1+2+3+6"), Verdict::NoEqualSign);
        // Fails the grammar too, but the '=' count wins
        assert_eq!(classify("a==b"), Verdict::NoEqualSign);
    }

    #[test]
    fn trailing_equal_sign_is_a_grammar_failure() {
        // An empty right side still leaves exactly one '='
        assert_eq!(
            classify("*123+5="),
            Verdict::MissingSymbols(GrammarFault::Malformed)
        );
        assert_eq!(
            classify("1+2+33="),
            Verdict::MissingSymbols(GrammarFault::Malformed)
        );
        assert_eq!(
            classify("123456="),
            Verdict::MissingSymbols(GrammarFault::MissingOperator)
        );
    }

    #[test]
    fn grammar_checked_before_balance() {
        assert_eq!(
            classify("*123+5="),
            Verdict::MissingSymbols(GrammarFault::Malformed)
        );
        assert_eq!(
            classify("1++2=33"),
            Verdict::MissingSymbols(GrammarFault::Malformed)
        );
        assert_eq!(
            classify("=1+2+33"),
            Verdict::MissingSymbols(GrammarFault::Malformed)
        );
    }

    #[test]
    fn missing_operator_fault() {
        assert_eq!(
            classify("abcd=fg"),
            Verdict::MissingSymbols(GrammarFault::MissingOperator)
        );
        assert_eq!(
            classify("12 4=16"),
            Verdict::MissingSymbols(GrammarFault::MissingOperator)
        );
    }

    #[test]
    fn not_equal() {
        assert_eq!(classify("1+2+3=7"), Verdict::NotEqual);
        assert_eq!(classify("2*3=5"), Verdict::NotEqual);
    }

    #[test]
    fn verdict_messages() {
        assert_eq!(Verdict::NoEqualSign.to_string(), "No equal '=' sign.");
        assert_eq!(
            Verdict::MissingSymbols(GrammarFault::MissingOperator).to_string(),
            "There must be at least one '+-*/'."
        );
        assert_eq!(
            Verdict::NotEqual.to_string(),
            "The left side is not equal to the right."
        );
    }

    #[test]
    fn well_formed() {
        assert!(is_well_formed("-8+5=-3"));
        assert!(!is_well_formed("1+2+3"));
        assert!(!is_well_formed("1+(2)=3"));
    }
}
