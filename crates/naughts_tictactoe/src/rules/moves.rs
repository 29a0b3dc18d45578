//! Successor generation.

use crate::{Board, Player, Position};

/// Every board reachable by `mover` marking one empty cell.
///
/// Results follow cell order, so the first entry fills the lowest empty
/// index. A full board has no successors.
pub fn successors(board: &Board, mover: Player) -> Vec<Board> {
    Position::valid_moves(board)
        .into_iter()
        .map(|pos| board.with(pos, mover))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_successors() {
        let next = successors(&Board::new(), Player::X);
        assert_eq!(next.len(), 9);
        assert_eq!(next[0].to_string(), "x........");
        assert_eq!(next[8].to_string(), "........x");
    }

    #[test]
    fn test_successors_preserve_cell_order() {
        let board: Board = "x.o.x.o.x".parse().unwrap();
        let next: Vec<String> = successors(&board, Player::O)
            .iter()
            .map(Board::to_string)
            .collect();
        assert_eq!(next, vec!["xoo.x.o.x", "x.oox.o.x", "x.o.xoo.x", "x.o.x.oox"]);
    }

    #[test]
    fn test_full_board_has_no_successors() {
        let board: Board = "xoxoxxoxo".parse().unwrap();
        assert!(successors(&board, Player::O).is_empty());
    }
}
