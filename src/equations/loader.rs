//! Equation corpus loading utilities
//!
//! Provides functions to load a corpus from a file or use the embedded list.
//! A corpus is plain text with one candidate equation per line.

use crate::core::Equation;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Parse corpus text, skipping blank lines and lines that are not valid equations
#[must_use]
pub fn equations_from_str(content: &str) -> Vec<Equation> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Equation::new(trimmed) {
                Ok(equation) => Some(equation),
                Err(err) => {
                    warn!(line = index + 1, text = trimmed, %err, "skipping corpus entry");
                    None
                }
            }
        })
        .collect()
}

/// Load equations from a file
///
/// Returns a vector of valid `Equation` instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numberle::equations::loader::load_from_file;
///
/// let equations = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", equations.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Equation>> {
    let content = fs::read_to_string(path)?;
    Ok(equations_from_str(&content))
}

/// Load equations from a file, treating an unreadable file as an empty corpus
///
/// An empty corpus makes the game fall back to its fixed equation.
#[must_use]
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Vec<Equation> {
    let path = path.as_ref();
    load_from_file(path).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "cannot read corpus, using fallback equation");
        Vec::new()
    })
}

/// Convert embedded string slice to Equation vector
///
/// # Examples
/// ```
/// use numberle::equations::loader::equations_from_slice;
/// use numberle::equations::EQUATIONS;
///
/// let equations = equations_from_slice(EQUATIONS);
/// assert_eq!(equations.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    slice.iter().filter_map(|&s| Equation::new(s).ok()).collect()
}
