//! Bottom-up win/loss classification relative to O.

use super::{GameTree, NodeId};
use crate::Player;
use crate::rules::Score;
use tracing::{debug, instrument};

impl GameTree {
    /// Sets the winning and losing flags on every node.
    ///
    /// Leaves take their flags from the terminal score. An O-to-move node
    /// is winning if any child is and losing only if all children are; an
    /// X-to-move node is winning only if all children are and losing if any
    /// child is. Sweeping the arena from the back visits every child before
    /// its parent.
    #[instrument(skip(self), fields(nodes = self.nodes.len()))]
    pub fn mark(&mut self) {
        for index in (0..self.nodes.len()).rev() {
            let (winning, losing) = self.classify(NodeId(index));
            let node = &mut self.nodes[index];
            node.winning = winning;
            node.losing = losing;
        }

        let root = self.root();
        debug!(winning = root.is_winning(), losing = root.is_losing(), "Tree marked");
    }

    fn classify(&self, id: NodeId) -> (bool, bool) {
        let node = self.node(id);
        if let Some(score) = node.score() {
            return (score == Score::Win, score == Score::Loss);
        }

        let children = node.children();
        let any_winning = children.iter().any(|&c| self.node(c).winning);
        let all_winning = children.iter().all(|&c| self.node(c).winning);
        let any_losing = children.iter().any(|&c| self.node(c).losing);
        let all_losing = children.iter().all(|&c| self.node(c).losing);

        match node.mover() {
            Player::O => (any_winning, all_losing),
            Player::X => (all_winning, any_losing),
        }
    }
}
