//! Collapse a pruned tree into a lookup table.

use super::{GameTree, NodeId};
use crate::{Player, StrategyTable};
use tracing::{debug, instrument};

impl GameTree {
    /// Collects every reachable O-to-move position and O's remaining replies.
    ///
    /// Keys are boards O must answer; values are the boards after each
    /// surviving O move, in successor order. Terminal nodes contribute
    /// nothing. The same board reached through different move orders maps
    /// to the same replies and is recorded once.
    #[instrument(skip(self))]
    pub fn flatten(&self) -> StrategyTable {
        let mut table = StrategyTable::default();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_terminal() {
                continue;
            }
            if node.mover() == Player::O {
                let replies = node
                    .children()
                    .iter()
                    .map(|&c| self.node(c).board())
                    .collect();
                table.record(node.board(), replies);
            }
            stack.extend_from_slice(node.children());
        }

        debug!(entries = table.len(), "Tree flattened");
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_terminal_root_flattens_to_nothing() {
        let tree = GameTree::solve("xxx.oo...".parse::<Board>().unwrap(), Player::O);
        assert!(tree.flatten().is_empty());
    }

    #[test]
    fn test_single_forced_reply() {
        let board: Board = "xx..o....".parse().unwrap();
        let table = GameTree::solve(board, Player::O).flatten();
        let replies: Vec<String> = table
            .lookup(&board)
            .unwrap()
            .iter()
            .map(Board::to_string)
            .collect();
        assert_eq!(replies, vec!["xxo.o...."]);
    }

    #[test]
    fn test_only_o_positions_are_keys() {
        let table = GameTree::solve(Board::new(), Player::X).flatten();
        assert_eq!(table.len(), 1141);
        for (board, _) in table.iter() {
            assert_eq!(board.count(Player::X), board.count(Player::O) + 1);
        }
    }
}
