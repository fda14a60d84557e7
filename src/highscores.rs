//! High score tracking
//!
//! Kept in memory for the lifetime of the process only.

use serde::{Deserialize, Serialize};

/// Best score of the session plus whether the current run has beaten it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
    /// The current run raised the high score
    is_new: bool,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the current score. Returns true if it raised the high score.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            self.is_new = true;
            return true;
        }
        false
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Start a new run; the best score is kept
    pub fn start_run(&mut self) {
        self.is_new = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_raises_best() {
        let mut hs = HighScore::new();
        assert!(!hs.record(0));
        assert!(!hs.is_new());

        assert!(hs.record(5));
        assert_eq!(hs.best(), 5);
        assert!(hs.is_new());

        assert!(!hs.record(3));
        assert_eq!(hs.best(), 5);
    }

    #[test]
    fn test_new_run_keeps_best() {
        let mut hs = HighScore::new();
        hs.record(12);
        hs.start_run();
        assert!(!hs.is_new());
        assert_eq!(hs.best(), 12);
        assert!(!hs.record(12));
        assert!(hs.record(13));
    }
}
