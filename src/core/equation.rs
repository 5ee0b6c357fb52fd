//! Numberle equation representation
//!
//! An `Equation` is a 7-character string that passes every validation check,
//! used for targets and corpus entries.

use super::validator::{GrammarFault, Verdict, classify};
use std::fmt;

/// Number of characters in every equation, `=` included
pub const EQUATION_LENGTH: usize = 7;

/// A validated 7-character equation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
    chars: [char; EQUATION_LENGTH],
}

/// Error type for strings that are not valid equations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    InvalidLength(usize),
    NoEqualSign,
    MissingSymbols(GrammarFault),
    NotEqual,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Equation must be exactly {EQUATION_LENGTH} characters, got {len}")
            }
            Self::NoEqualSign => write!(f, "{}", Verdict::NoEqualSign),
            Self::MissingSymbols(fault) => write!(f, "{}", Verdict::MissingSymbols(*fault)),
            Self::NotEqual => write!(f, "{}", Verdict::NotEqual),
        }
    }
}

impl std::error::Error for EquationError {}

impl Equation {
    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `EquationError` if the string is not exactly 7 characters or
    /// fails validation.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    ///
    /// let equation = Equation::new("1+2+3=6").unwrap();
    /// assert_eq!(equation.text(), "1+2+3=6");
    ///
    /// assert!(Equation::new("1+2=3").is_err());
    /// assert!(Equation::new("1+2+3=7").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        let len = text.chars().count();
        if len != EQUATION_LENGTH {
            return Err(EquationError::InvalidLength(len));
        }

        match classify(&text) {
            Verdict::Valid => {}
            Verdict::NoEqualSign => return Err(EquationError::NoEqualSign),
            Verdict::MissingSymbols(fault) => return Err(EquationError::MissingSymbols(fault)),
            Verdict::NotEqual => return Err(EquationError::NotEqual),
        }

        let chars: [char; EQUATION_LENGTH] = text
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation's characters
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; EQUATION_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= 7
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the equation contains a character anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Equation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
