//! Target equation selection
//!
//! Either draws uniformly at random from a corpus of candidate equations or
//! returns the fixed fallback `1+2+3=6`. The fallback is also used whenever
//! the corpus is empty.

use crate::core::Equation;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::debug;

/// Equation used when random selection is off or the corpus is empty
pub const FALLBACK_EQUATION: &str = "1+2+3=6";

/// Picks the hidden equation for each new session
#[derive(Debug, Clone)]
pub struct TargetSelector {
    corpus: Vec<Equation>,
    rng: StdRng,
}

impl TargetSelector {
    /// Create a selector over `corpus` seeded from the operating system
    #[must_use]
    pub fn new(corpus: Vec<Equation>) -> Self {
        Self::with_rng(corpus, StdRng::from_os_rng())
    }

    /// Create a selector with an explicit random source (used for reproducible games)
    #[must_use]
    pub const fn with_rng(corpus: Vec<Equation>, rng: StdRng) -> Self {
        Self { corpus, rng }
    }

    /// Create a selector that reproduces the same sequence of targets for `seed`
    #[must_use]
    pub fn seeded(corpus: Vec<Equation>, seed: u64) -> Self {
        Self::with_rng(corpus, StdRng::seed_from_u64(seed))
    }

    /// The fallback target
    ///
    /// # Panics
    /// Will not panic - the fallback is a valid equation.
    #[must_use]
    pub fn fallback() -> Equation {
        Equation::new(FALLBACK_EQUATION).expect("fallback equation is valid")
    }

    /// Select the next target
    pub fn select(&mut self, random: bool) -> Equation {
        if !random {
            debug!("random selection disabled, using fallback target");
            return Self::fallback();
        }

        if let Some(equation) = self.corpus.choose(&mut self.rng) {
            debug!(corpus_size = self.corpus.len(), "drew random target");
            equation.clone()
        } else {
            debug!("corpus is empty, using fallback target");
            Self::fallback()
        }
    }
}
