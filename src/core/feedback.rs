//! Per-position feedback for a guess
//!
//! Each position of an accepted guess is classified against the target:
//! - `Correct` = right character, right position (green)
//! - `Present` = character occurs somewhere in the target (orange)
//! - `Absent`  = character does not occur in the target (gray)
//!
//! Presence is a plain containment test on the target and ignores
//! multiplicity: a digit guessed twice that appears once in the target can
//! be `Present` at both positions.

use super::equation::{EQUATION_LENGTH, Equation};

/// Classification of a single guessed character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Classify `ch` guessed at a position holding `expected` in `target`
    #[must_use]
    pub fn of(ch: char, expected: char, target: &Equation) -> Self {
        if ch == expected {
            Self::Correct
        } else if target.contains(ch) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Emoji square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟧',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one accepted guess, one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; EQUATION_LENGTH]);

impl Feedback {
    /// All correct (the guess is the target)
    pub const PERFECT: Self = Self([Classification::Correct; EQUATION_LENGTH]);

    /// Calculate the feedback when `guess` is guessed and `target` is hidden
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Classification::*, Equation, Feedback};
    ///
    /// let guess = Equation::new("3+2+2=7").unwrap();
    /// let target = Equation::new("1+2+3=6").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.classifications(),
    ///     &[Present, Correct, Correct, Correct, Present, Correct, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Equation, target: &Equation) -> Self {
        let mut result = [Classification::Absent; EQUATION_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            *slot = Classification::of(guess.char_at(i), target.char_at(i), target);
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; EQUATION_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;

    fn eq(text: &str) -> Equation {
        Equation::new(text).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert!(!Feedback::calculate(&eq("3+2+2=7"), &eq("1+2+3=6")).is_perfect());
    }

    #[test]
    fn feedback_self_is_perfect() {
        for text in ["1+2+3=6", "-8+5=-3", "2*8-9=7", "+9+1=10"] {
            let equation = eq(text);
            assert_eq!(Feedback::calculate(&equation, &equation), Feedback::PERFECT);
        }
    }

    #[test]
    fn feedback_mixed_fixture() {
        // 3: in target elsewhere, 2 at index 4: in target elsewhere, 7: absent
        let feedback = Feedback::calculate(&eq("3+2+2=7"), &eq("1+2+3=6"));
        assert_eq!(
            feedback.classifications(),
            &[Present, Correct, Correct, Correct, Present, Correct, Absent]
        );
    }

    #[test]
    fn feedback_ignores_multiplicity() {
        // Target has a single 1; both guessed 1s that miss their spot are present
        let feedback = Feedback::calculate(&eq("11-2=09"), &eq("1+2+3=6"));
        // 1: correct, 1: present, -: absent, 2: present, =: present, 0: absent, 9: absent
        assert_eq!(
            feedback.classifications(),
            &[Correct, Present, Absent, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_all_absent_except_equal_sign() {
        let feedback = Feedback::calculate(&eq("9*8=072"), &eq("1+2+3=6"));
        // 2 is in the target, '=' is present (different index)
        assert_eq!(
            feedback.classifications(),
            &[Absent, Absent, Absent, Present, Absent, Absent, Present]
        );
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩🟩🟩");
        let feedback = Feedback::calculate(&eq("3+2+2=7"), &eq("1+2+3=6"));
        assert_eq!(feedback.to_emoji(), "🟧🟩🟩🟩🟧🟩⬜");
    }
}
