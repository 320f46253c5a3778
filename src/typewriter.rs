use std::time::Duration;

use crate::config::{DELETE_SPEED_MS, HOLD_MS, TYPE_SPEED_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types each word out, holds it, deletes it, then moves on to the next one forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn word_len(&self) -> usize {
        self.words
            .get(self.word)
            .map(|w| w.chars().count())
            .unwrap_or(0)
    }

    /// Visible prefix of the current word.
    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    /// Advances one step and returns how long to wait before the next.
    pub fn tick(&mut self) -> Duration {
        if self.words.is_empty() {
            return Duration::from_millis(HOLD_MS);
        }
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(self.word_len());
                if self.shown == self.word_len() {
                    self.phase = Phase::Holding;
                    Duration::from_millis(HOLD_MS)
                } else {
                    Duration::from_millis(TYPE_SPEED_MS)
                }
            }
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    Duration::from_millis(TYPE_SPEED_MS)
                } else {
                    Duration::from_millis(DELETE_SPEED_MS)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(w: &[&str]) -> Typewriter {
        Typewriter::new(w.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_types_holds_and_deletes() {
        let mut tw = words(&["Hey", "Yo"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), Duration::from_millis(TYPE_SPEED_MS));
        assert_eq!(tw.text(), "H");
        tw.tick();
        assert_eq!(tw.text(), "He");
        assert_eq!(tw.tick(), Duration::from_millis(HOLD_MS));
        assert_eq!(tw.text(), "Hey");

        assert_eq!(tw.tick(), Duration::from_millis(DELETE_SPEED_MS));
        assert_eq!(tw.text(), "He");
        tw.tick();
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), Duration::from_millis(TYPE_SPEED_MS));
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "Y");
    }

    #[test]
    fn test_loops_back_to_first_word() {
        let mut tw = words(&["ab", "c"]);
        // "ab": 2 types, 2 deletes; "c": 1 type, 1 delete
        for _ in 0..6 {
            tw.tick();
        }
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut tw = words(&["héllo⚛"]);
        for _ in 0..6 {
            tw.tick();
        }
        assert_eq!(tw.text(), "héllo⚛");
        tw.tick();
        assert_eq!(tw.text(), "héllo");
    }

    #[test]
    fn test_no_words() {
        let mut tw = words(&[]);
        assert_eq!(tw.tick(), Duration::from_millis(HOLD_MS));
        assert_eq!(tw.text(), "");
    }
}
