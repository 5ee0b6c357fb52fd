//! Equation corpus for Numberle targets
//!
//! Provides an embedded corpus compiled into the binary plus loaders for
//! corpus files supplied at runtime.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT};
