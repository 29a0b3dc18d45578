//! Legal replies invariant: each reply is one O mark added to its key.

use super::Invariant;
use crate::{Board, Player, Square, StrategyTable};

/// Invariant: every reply differs from its key by exactly one new O.
pub struct LegalRepliesInvariant;

fn is_single_o_move(from: &Board, to: &Board) -> bool {
    let mut placed = 0;
    for (before, after) in from.squares().iter().zip(to.squares()) {
        match (before, after) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(Player::O)) => placed += 1,
            _ => return false,
        }
    }
    placed == 1
}

impl Invariant<StrategyTable> for LegalRepliesInvariant {
    fn holds(table: &StrategyTable) -> bool {
        table
            .iter()
            .all(|(key, replies)| replies.iter().all(|reply| is_single_o_move(key, reply)))
    }

    fn description() -> &'static str {
        "Every reply is a single O move from its key"
    }
}
