//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Canonical character for an empty cell.
pub const EMPTY: char = '.';

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (the opponent).
    X,
    /// Player O (the table owner).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Canonical lowercase mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Canonical character for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => EMPTY,
            Square::Occupied(player) => player.symbol(),
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            EMPTY => Some(Square::Empty),
            'x' => Some(Square::Occupied(Player::X)),
            'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// Why a string could not be read as a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The string does not have exactly nine cells.
    #[display("Board must have 9 cells, got {}", _0)]
    Length(#[error(not(source))] usize),
    /// A cell holds something other than `x`, `o` or `.`.
    #[display("Invalid cell {:?} at index {}", found, index)]
    Cell {
        /// The offending character.
        found: char,
        /// Its position in the string.
        index: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values; the solver always produces new boards
/// rather than editing one in place. Ordering follows the canonical string,
/// so sorted maps keyed by `Board` iterate in the same order as their text
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `player` marked at `pos`.
    pub fn with(&self, pos: Position, player: Player) -> Self {
        debug_assert!(self.is_empty(pos), "cell {pos} is already taken");
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Number of empty cells.
    pub fn empty_cells(&self) -> usize {
        self.squares.iter().filter(|&&s| s == Square::Empty).count()
    }

    fn symbols(&self) -> [u8; 9] {
        self.squares.map(|s| s.symbol() as u8)
    }

    /// Formats the board as a human-readable grid.
    pub fn to_grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(Player::X) => "X".to_string(),
                    Square::Occupied(Player::O) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Ord for Board {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbols().cmp(&other.symbols())
    }
}

impl PartialOrd for Board {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != 9 {
            return Err(BoardError::Length(length));
        }
        let mut squares = [Square::Empty; 9];
        for (index, c) in s.chars().enumerate() {
            squares[index] = Square::from_symbol(c).ok_or(BoardError::Cell { found: c, index })?;
        }
        Ok(Self { squares })
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Returns true if `s` is a well-formed canonical board string.
pub fn is_valid_board(s: &str) -> bool {
    s.parse::<Board>().is_ok()
}
