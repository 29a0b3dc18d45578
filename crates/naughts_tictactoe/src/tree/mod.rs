//! Arena-allocated game tree.
//!
//! The full game is expanded once into a `Vec<GameNode>` addressed by
//! [`NodeId`]. Nodes are pushed parent-first, so every child has a larger
//! id than its parent; the marking pass relies on that ordering.
//!
//! Lifecycle: [`GameTree::build`] expands and scores every node,
//! [`GameTree::mark`] classifies nodes bottom-up, [`GameTree::prune`]
//! filters O's choices top-down and [`GameTree::flatten`] collects the
//! surviving choices into a [`StrategyTable`](crate::StrategyTable).

mod builder;
mod flattener;
mod marker;
mod node;
mod pruner;

pub use node::{GameNode, NodeId};

use crate::{Board, Player};
use std::fmt::Write;
use tracing::instrument;

/// Full game tree for one starting board and mover.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<GameNode>,
}

impl GameTree {
    /// Builds, marks and prunes the tree rooted at `board`.
    #[instrument(skip_all, fields(board = %board, mover = %mover))]
    pub fn solve(board: Board, mover: Player) -> Self {
        let mut tree = Self::build(board, mover);
        tree.mark();
        tree.prune();
        tree
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if the id did not come from this tree.
    pub fn node(&self, id: NodeId) -> &GameNode {
        &self.nodes[id.0]
    }

    /// The root node.
    pub fn root(&self) -> &GameNode {
        self.node(NodeId::ROOT)
    }

    /// Number of nodes ever built, including pruned ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction on.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes still reachable from the root.
    pub fn reachable(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend_from_slice(self.node(id).children());
        }
        count
    }

    /// Keeps only the root children whose board satisfies `keep`.
    ///
    /// Used to force O's opening move before flattening.
    pub fn retain_root_children(&mut self, keep: impl Fn(&Board) -> bool) {
        let kept: Vec<NodeId> = self.nodes[NodeId::ROOT.0]
            .children
            .iter()
            .copied()
            .filter(|&child| keep(&self.nodes[child.0].board()))
            .collect();
        self.nodes[NodeId::ROOT.0].children = kept;
    }

    /// Indented rendering of the reachable tree, `depth` levels deep.
    pub fn dump(&self, depth: usize) -> String {
        let mut out = String::new();
        self.dump_into(NodeId::ROOT, 0, depth, &mut out);
        out
    }

    fn dump_into(&self, id: NodeId, level: usize, depth: usize, out: &mut String) {
        let node = self.node(id);
        let _ = writeln!(out, "{:indent$}{node}", "", indent = level * 2);
        if level < depth {
            for &child in node.children() {
                self.dump_into(child, level + 1, depth, out);
            }
        }
    }
}
