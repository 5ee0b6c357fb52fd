//! Core domain types for Numberle
//!
//! Evaluation, validation, feedback and keyboard colouring. Everything here is
//! pure and deterministic; the game engine drives it.

mod equation;
mod expression;
mod feedback;
mod tiles;
mod validator;

pub use equation::{EQUATION_LENGTH, Equation, EquationError};
pub use expression::{ExpressionError, Operator, evaluate};
pub use feedback::{Classification, Feedback};
pub use tiles::{ALPHABET, TileColor, TileSets};
pub use validator::{GrammarFault, OPERATORS, TOLERANCE, Verdict, classify, is_well_formed};
