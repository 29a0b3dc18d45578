//! Coverage invariant: the table answers every X continuation.

use super::Invariant;
use crate::rules::{successors, terminal_score};
use crate::{Player, StrategyTable};

/// Invariant: each open X answer to an open reply is itself a key.
pub struct RepliesCoveredInvariant;

impl Invariant<StrategyTable> for RepliesCoveredInvariant {
    fn holds(table: &StrategyTable) -> bool {
        table
            .iter()
            .flat_map(|(_, replies)| replies)
            .filter(|reply| terminal_score(reply).is_none())
            .flat_map(|reply| successors(reply, Player::X))
            .filter(|answer| terminal_score(answer).is_none())
            .all(|answer| table.contains(&answer))
    }

    fn description() -> &'static str {
        "Every X answer to a reply has an entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_continuation_violates() {
        let table: StrategyTable =
            serde_json::from_value(serde_json::json!({ "....x....": ["o...x...."] })).unwrap();
        assert!(!RepliesCoveredInvariant::holds(&table));
    }

    #[test]
    fn test_finished_replies_need_no_entry() {
        // O completes the middle row; nothing follows.
        let table: StrategyTable =
            serde_json::from_value(serde_json::json!({ "xx.oo.x..": ["xx.ooox.."] })).unwrap();
        assert!(RepliesCoveredInvariant::holds(&table));
    }
}
