//! Leaderboard of finished runs
//!
//! Kept for the lifetime of the process only; tracks the top 10 runs.

use crate::sim::Outcome;

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRecord {
    /// Furthest x reached (whole pixels)
    pub score: u32,
    pub outcome: Outcome,
}

/// Run leaderboard, sorted by score descending
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished run
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_run(&mut self, score: u32, outcome: Outcome) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = RunRecord { score, outcome };
        // Ties keep the earlier run ahead
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score so far (if any)
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_descending() {
        let mut board = HighScores::new();
        assert_eq!(board.add_run(500, Outcome::Lost), Some(1));
        assert_eq!(board.add_run(3800, Outcome::Won), Some(1));
        assert_eq!(board.add_run(700, Outcome::Lost), Some(2));
        assert_eq!(board.best(), Some(3800));
        let scores: Vec<u32> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![3800, 700, 500]);
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut board = HighScores::new();
        assert_eq!(board.add_run(0, Outcome::Lost), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_board_is_capped() {
        let mut board = HighScores::new();
        for score in 1..=MAX_HIGH_SCORES as u32 {
            board.add_run(score * 100, Outcome::Lost);
        }
        assert!(!board.qualifies(50));
        assert_eq!(board.add_run(50, Outcome::Lost), None);
        assert_eq!(board.add_run(150, Outcome::Lost), Some(MAX_HIGH_SCORES));
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(board.entries.last().map(|e| e.score), Some(150));
    }
}
