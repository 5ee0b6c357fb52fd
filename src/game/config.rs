//! Game configuration

/// Number of accepted guesses allowed per game
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Settings that shape a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Attempts available at the start of every session
    pub max_attempts: u32,
    /// Draw the target at random from the corpus instead of using the fallback
    pub random_target: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            random_target: true,
        }
    }

    /// Set the attempt budget (at least one attempt is always allowed)
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = if max_attempts == 0 { 1 } else { max_attempts };
        self
    }

    #[must_use]
    pub const fn with_random_target(mut self, random_target: bool) -> Self {
        self.random_target = random_target;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert!(config.random_target);
    }

    #[test]
    fn builder_methods() {
        let config = GameConfig::new()
            .with_max_attempts(3)
            .with_random_target(false);
        assert_eq!(config.max_attempts, 3);
        assert!(!config.random_target);
    }

    #[test]
    fn zero_attempts_clamped() {
        assert_eq!(GameConfig::new().with_max_attempts(0).max_attempts, 1);
    }
}
