//! Top-down removal of O's bad choices.

use super::{GameTree, NodeId};
use crate::Player;
use tracing::{debug, instrument};

impl GameTree {
    /// Filters the children of every reachable O-to-move node.
    ///
    /// A winning node keeps only its winning children; any other node keeps
    /// the children that are not losing. X-to-move nodes keep everything,
    /// since O must have an answer to every X move. The filtered list is
    /// stored before the walk descends into it.
    ///
    /// Call after [`GameTree::mark`].
    #[instrument(skip(self), fields(nodes = self.nodes.len()))]
    pub fn prune(&mut self) {
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.mover() == Player::O && !node.is_terminal() {
                let kept = self.kept_children(id);
                self.nodes[id.0].children = kept;
            }
            stack.extend_from_slice(self.node(id).children());
        }

        debug!(reachable = self.reachable(), "Tree pruned");
    }

    fn kept_children(&self, id: NodeId) -> Vec<NodeId> {
        let node = self.node(id);
        node.children()
            .iter()
            .copied()
            .filter(|&c| {
                let child = self.node(c);
                if node.is_winning() {
                    child.is_winning()
                } else {
                    !child.is_losing()
                }
            })
            .collect()
    }
}
