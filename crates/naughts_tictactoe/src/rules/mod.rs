//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): line detection, terminal
//! scoring and successor generation. These are the leaves everything else in
//! the solver is built on.

pub mod draw;
pub mod moves;
pub mod score;
pub mod win;

pub use draw::is_full;
pub use moves::successors;
pub use score::{Score, terminal_score};
pub use win::{LINES, check_winner};
