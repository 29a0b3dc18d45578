//! Terminal scoring, always from player O's point of view.

use crate::rules::{check_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a finished game, relative to player O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// O completed a line.
    Win,
    /// Board is full with no line.
    Tie,
    /// X completed a line.
    Loss,
}

impl Score {
    /// Numeric score: +1 win, 0 tie, -1 loss.
    pub fn value(self) -> i8 {
        match self {
            Score::Win => 1,
            Score::Tie => 0,
            Score::Loss => -1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Scores a board if the game is over on it.
///
/// Returns `None` while further moves are possible.
pub fn terminal_score(board: &Board) -> Option<Score> {
    match check_winner(board) {
        Some(Player::O) => Some(Score::Win),
        Some(Player::X) => Some(Score::Loss),
        None if is_full(board) => Some(Score::Tie),
        None => None,
    }
}
