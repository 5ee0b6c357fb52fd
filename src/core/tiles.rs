//! Cumulative keyboard colouring
//!
//! Tracks which characters of the alphabet have been seen as green (correct
//! position), orange (present elsewhere) or gray (absent) across every guess
//! of a session. Priority is green > orange > gray: once a character turns
//! green it never appears in the other two sets again.

use super::equation::Equation;
use super::feedback::{Classification, Feedback};
use rustc_hash::FxHashSet;

/// Characters that can be typed in a guess, `=` excluded
pub const ALPHABET: [char; 14] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/',
];

/// Colour of a keyboard tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Green,
    Orange,
    Gray,
}

/// Green, orange and gray character sets for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSets {
    green: FxHashSet<char>,
    orange: FxHashSet<char>,
    gray: FxHashSet<char>,
}

impl TileSets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one character's classification into the sets
    ///
    /// Characters outside [`ALPHABET`] (the `=` sign) are ignored.
    pub fn record(&mut self, ch: char, classification: Classification) {
        if !ALPHABET.contains(&ch) {
            return;
        }

        match classification {
            Classification::Correct => {
                self.green.insert(ch);
                self.orange.remove(&ch);
                self.gray.remove(&ch);
            }
            Classification::Present => {
                if !self.green.contains(&ch) {
                    self.orange.insert(ch);
                    self.gray.remove(&ch);
                }
            }
            Classification::Absent => {
                if !self.green.contains(&ch) && !self.orange.contains(&ch) {
                    self.gray.insert(ch);
                }
            }
        }
    }

    /// Fold every position of an accepted guess into the sets
    pub fn record_guess(&mut self, guess: &Equation, feedback: &Feedback) {
        for (&ch, &classification) in guess.chars().iter().zip(feedback.classifications()) {
            self.record(ch, classification);
        }
    }

    pub fn clear(&mut self) {
        self.green.clear();
        self.orange.clear();
        self.gray.clear();
    }

    #[must_use]
    pub const fn green(&self) -> &FxHashSet<char> {
        &self.green
    }

    #[must_use]
    pub const fn orange(&self) -> &FxHashSet<char> {
        &self.orange
    }

    #[must_use]
    pub const fn gray(&self) -> &FxHashSet<char> {
        &self.gray
    }

    /// Colour of a character's tile, or `None` if it has not been classified
    #[must_use]
    pub fn color_of(&self, ch: char) -> Option<TileColor> {
        if self.green.contains(&ch) {
            Some(TileColor::Green)
        } else if self.orange.contains(&ch) {
            Some(TileColor::Orange)
        } else if self.gray.contains(&ch) {
            Some(TileColor::Gray)
        } else {
            None
        }
    }

    /// Characters of one colour in alphabet order
    #[must_use]
    pub fn sorted(&self, color: TileColor) -> Vec<char> {
        let set = match color {
            TileColor::Green => &self.green,
            TileColor::Orange => &self.orange,
            TileColor::Gray => &self.gray,
        };
        ALPHABET.iter().copied().filter(|ch| set.contains(ch)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_disjoint(sets: &TileSets) {
        assert!(sets.green().is_disjoint(sets.orange()));
        assert!(sets.green().is_disjoint(sets.gray()));
    }

    #[test]
    fn green_removes_weaker_colors() {
        let mut sets = TileSets::new();
        sets.record('3', Classification::Absent);
        assert_eq!(sets.color_of('3'), Some(TileColor::Gray));

        sets.record('3', Classification::Present);
        assert_eq!(sets.color_of('3'), Some(TileColor::Orange));
        assert!(!sets.gray().contains(&'3'));

        sets.record('3', Classification::Correct);
        assert_eq!(sets.color_of('3'), Some(TileColor::Green));
        assert!(!sets.orange().contains(&'3'));
        assert_disjoint(&sets);
    }

    #[test]
    fn green_never_regresses() {
        let mut sets = TileSets::new();
        sets.record('+', Classification::Correct);
        sets.record('+', Classification::Present);
        sets.record('+', Classification::Absent);

        assert_eq!(sets.color_of('+'), Some(TileColor::Green));
        assert!(sets.orange().is_empty());
        assert!(sets.gray().is_empty());
    }

    #[test]
    fn orange_not_downgraded_to_gray() {
        let mut sets = TileSets::new();
        sets.record('2', Classification::Present);
        sets.record('2', Classification::Absent);
        assert_eq!(sets.color_of('2'), Some(TileColor::Orange));
        assert!(sets.gray().is_empty());
    }

    #[test]
    fn equal_sign_ignored() {
        let mut sets = TileSets::new();
        sets.record('=', Classification::Correct);
        assert_eq!(sets.color_of('='), None);
        assert!(sets.green().is_empty());
    }

    #[test]
    fn record_guess_fixture() {
        let guess = Equation::new("3+2+2=7").unwrap();
        let target = Equation::new("1+2+3=6").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        let mut sets = TileSets::new();
        sets.record_guess(&guess, &feedback);

        // '2' is correct at index 2 and present at index 4: green wins
        assert_eq!(sets.sorted(TileColor::Green), vec!['2', '+']);
        assert_eq!(sets.sorted(TileColor::Orange), vec!['3']);
        assert_eq!(sets.sorted(TileColor::Gray), vec!['7']);
        assert_disjoint(&sets);
    }

    #[test]
    fn clear_resets_everything() {
        let mut sets = TileSets::new();
        sets.record('1', Classification::Correct);
        sets.record('5', Classification::Absent);
        sets.clear();
        assert_eq!(sets, TileSets::new());
        assert_eq!(sets.color_of('1'), None);
    }
}
