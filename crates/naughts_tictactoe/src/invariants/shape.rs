//! Structural invariants: the table has entries, keys are open, replies exist.

use super::Invariant;
use crate::StrategyTable;
use crate::rules::terminal_score;

/// Invariant: the table has at least one key.
pub struct NonEmptyTableInvariant;

impl Invariant<StrategyTable> for NonEmptyTableInvariant {
    fn holds(table: &StrategyTable) -> bool {
        !table.is_empty()
    }

    fn description() -> &'static str {
        "Table has at least one entry"
    }
}

/// Invariant: O can still move on every key.
pub struct OpenKeysInvariant;

impl Invariant<StrategyTable> for OpenKeysInvariant {
    fn holds(table: &StrategyTable) -> bool {
        table.keys().all(|board| terminal_score(board).is_none())
    }

    fn description() -> &'static str {
        "Every key is an unfinished game"
    }
}

/// Invariant: every key has at least one reply.
pub struct NonEmptyRepliesInvariant;

impl Invariant<StrategyTable> for NonEmptyRepliesInvariant {
    fn holds(table: &StrategyTable) -> bool {
        table.iter().all(|(_, replies)| !replies.is_empty())
    }

    fn description() -> &'static str {
        "Every key has at least one reply"
    }
}
