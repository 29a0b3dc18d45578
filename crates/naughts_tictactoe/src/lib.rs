//! Naughts - a never-losing tic-tac-toe player for O
//!
//! The whole game is small enough to expand exhaustively, so the solver
//! builds every line of play once, classifies each position for O, prunes
//! O's losing choices and flattens what is left into direct lookup tables.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Position`], lines and terminal scoring
//! - **Tree**: arena [`GameTree`] with build, mark, prune and flatten passes
//! - **Tables**: [`build_tables`] assembles the tuff and nice [`StrategyTable`]s
//! - **Verification**: [`verify_table`] checks a table's invariants on demand
//!
//! # Example
//!
//! ```no_run
//! use naughts_tictactoe::{Board, Variant, build_tables};
//!
//! let tables = build_tables();
//! let board: Board = "....x....".parse().unwrap();
//! let replies = tables.get(Variant::Nice).lookup(&board).unwrap();
//! assert!(!replies.is_empty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod table;
mod types;
mod verification;

pub mod invariants;
pub mod rules;
pub mod tree;

// Crate-level exports - Board model
pub use position::Position;
pub use rules::{LINES, Score, successors, terminal_score};
pub use types::{Board, BoardError, EMPTY, Player, Square, is_valid_board};

// Crate-level exports - Tree
pub use tree::{GameNode, GameTree, NodeId};

// Crate-level exports - Tables
pub use table::{StrategyTable, StrategyTables, Variant, build_tables, o_first_tables, x_first_table};

// Crate-level exports - Verification
pub use verification::{TableReport, VerificationError, verify_table};
