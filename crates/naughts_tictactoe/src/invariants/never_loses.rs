//! No-loss invariant: O's replies never let X complete a line.

use super::Invariant;
use crate::rules::{Score, successors, terminal_score};
use crate::{Player, StrategyTable};

/// Invariant: no reply, and no X answer to a reply, is an X win.
pub struct NeverLosesInvariant;

impl Invariant<StrategyTable> for NeverLosesInvariant {
    fn holds(table: &StrategyTable) -> bool {
        table.iter().flat_map(|(_, replies)| replies).all(|reply| {
            match terminal_score(reply) {
                Some(Score::Loss) => false,
                Some(_) => true,
                None => successors(reply, Player::X)
                    .iter()
                    .all(|answer| terminal_score(answer) != Some(Score::Loss)),
            }
        })
    }

    fn description() -> &'static str {
        "O never plays into an X win"
    }
}
