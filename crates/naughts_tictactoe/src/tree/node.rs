//! Arena node types for the game tree.

use crate::rules::Score;
use crate::{Board, Player};
use std::fmt;

/// Index into the node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of this node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One board together with the player about to move on it.
///
/// `winning` and `losing` are both relative to O and are independent:
/// a node may be neither (some lines tie, none lose).
#[derive(Clone, Debug)]
pub struct GameNode {
    board: Board,
    mover: Player,
    score: Option<Score>,
    pub(crate) winning: bool,
    pub(crate) losing: bool,
    pub(crate) children: Vec<NodeId>,
}

impl GameNode {
    pub(crate) fn new(board: Board, mover: Player, score: Option<Score>) -> Self {
        Self {
            board,
            mover,
            score,
            winning: false,
            losing: false,
            children: Vec::new(),
        }
    }

    /// The board at this node.
    pub fn board(&self) -> Board {
        self.board
    }

    /// The player whose move produces this node's children.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Terminal score, or `None` if play continues.
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// O can force a win from here.
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    /// O cannot avoid a loss from here.
    pub fn is_losing(&self) -> bool {
        self.losing
    }

    /// True when the game is over on this board.
    pub fn is_terminal(&self) -> bool {
        self.score.is_some()
    }

    /// Child ids, in successor order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl fmt::Display for GameNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}|{}", self.board, self.mover)?;
        if self.winning {
            write!(f, "W")?;
        }
        if self.losing {
            write!(f, "L")?;
        }
        if let Some(score) = self.score {
            write!(f, "{score}")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tags_flags_and_score() {
        let board: Board = "ooo.xx.x.".parse().unwrap();
        let mut node = GameNode::new(board, Player::X, Some(Score::Win));
        node.winning = true;
        assert_eq!(node.to_string(), "<ooo.xx.x.|xW1>");

        let open = GameNode::new(Board::new(), Player::O, None);
        assert_eq!(open.to_string(), "<.........|o>");
    }
}
