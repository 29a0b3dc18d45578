//! Full expansion of the game from a starting board.

use super::{GameNode, GameTree, NodeId};
use crate::rules::{successors, terminal_score};
use crate::{Board, Player};
use tracing::{debug, instrument};

impl GameTree {
    /// Expands every legal line of play from `board`, `mover` to move.
    ///
    /// No transpositions are shared: a board reached by two move orders
    /// becomes two nodes. Expansion stops at boards with a terminal score.
    #[instrument(skip_all, fields(board = %board, mover = %mover))]
    pub fn build(board: Board, mover: Player) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1 << 16),
        };
        tree.expand(board, mover);
        debug!(nodes = tree.nodes.len(), "Game tree expanded");
        tree
    }

    fn expand(&mut self, board: Board, mover: Player) -> NodeId {
        let id = NodeId(self.nodes.len());
        let score = terminal_score(&board);
        self.nodes.push(GameNode::new(board, mover, score));

        if score.is_none() {
            let children = successors(&board, mover)
                .into_iter()
                .map(|next| self.expand(next, mover.opponent()))
                .collect();
            self.nodes[id.0].children = children;
        }
        id
    }
}
