//! Strategy tables: the published product of the solver.

use crate::tree::GameTree;
use crate::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Instant;
use tracing::{info, instrument};

/// Map from a board O must answer to O's acceptable replies.
///
/// Keys are sorted by their canonical string, so the JSON rendering is
/// byte-identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyTable {
    entries: BTreeMap<Board, Vec<Board>>,
}

impl StrategyTable {
    /// Replies for `board`, or `None` if O never has to answer it.
    pub fn lookup(&self, board: &Board) -> Option<&[Board]> {
        self.entries.get(board).map(Vec::as_slice)
    }

    /// Replies for a canonical board string; malformed strings are absent.
    pub fn get(&self, board: &str) -> Option<&[Board]> {
        board.parse().ok().and_then(|b: Board| self.lookup(&b))
    }

    /// True if `board` is a key.
    pub fn contains(&self, board: &Board) -> bool {
        self.entries.contains_key(board)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Board, &[Board])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Board> {
        self.entries.keys()
    }

    /// Merges two tables with disjoint keys.
    ///
    /// # Panics
    /// Panics if a board is a key in both tables.
    pub fn union(mut self, other: &StrategyTable) -> Self {
        for (board, replies) in &other.entries {
            let previous = self.entries.insert(*board, replies.clone());
            assert!(
                previous.is_none(),
                "board {board} is a key in both tables being merged"
            );
        }
        self
    }

    /// Pretty JSON with sorted keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn record(&mut self, board: Board, replies: Vec<Board>) {
        match self.entries.entry(board) {
            Entry::Vacant(slot) => {
                slot.insert(replies);
            }
            Entry::Occupied(slot) => {
                debug_assert_eq!(slot.get(), &replies, "transposition of {board} disagrees");
            }
        }
    }
}

/// Which table to consult.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// O always opens in the centre.
    Tuff,
    /// O may open anywhere that does not lose.
    Nice,
}

impl Variant {
    /// Both variants.
    pub const ALL: [Variant; 2] = [Variant::Tuff, Variant::Nice];

    /// The other variant.
    pub fn other(self) -> Self {
        match self {
            Variant::Tuff => Variant::Nice,
            Variant::Nice => Variant::Tuff,
        }
    }
}

/// The two published tables.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StrategyTables {
    /// X moves first, or O opens in the centre.
    tuff: StrategyTable,
    /// X moves first, or O opens anywhere.
    nice: StrategyTable,
}

impl StrategyTables {
    /// The table for `variant`.
    pub fn get(&self, variant: Variant) -> &StrategyTable {
        match variant {
            Variant::Tuff => &self.tuff,
            Variant::Nice => &self.nice,
        }
    }

    /// `(tuff, nice)`.
    pub fn into_pair(self) -> (StrategyTable, StrategyTable) {
        (self.tuff, self.nice)
    }
}

/// Table for games X opens.
#[instrument]
pub fn x_first_table() -> StrategyTable {
    GameTree::solve(Board::new(), Player::X).flatten()
}

/// Tables for games O opens: `(nice, tuff)`.
///
/// The tuff table comes from the same solved tree with O's opening
/// restricted to the centre.
#[instrument]
pub fn o_first_tables() -> (StrategyTable, StrategyTable) {
    let mut tree = GameTree::solve(Board::new(), Player::O);
    let nice = tree.flatten();
    tree.retain_root_children(|board| board.get(Position::Center) == Square::Occupied(Player::O));
    let tuff = tree.flatten();
    (nice, tuff)
}

/// Runs the whole solver and returns both published tables.
///
/// Deterministic; builds two full game trees and discards them once
/// flattened.
#[instrument]
pub fn build_tables() -> StrategyTables {
    let started = Instant::now();

    let x_first = x_first_table();
    let (o_nice, o_tuff) = o_first_tables();

    let tables = StrategyTables {
        tuff: x_first.clone().union(&o_tuff),
        nice: x_first.union(&o_nice),
    };

    info!(
        tuff = tables.tuff.len(),
        nice = tables.nice.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Strategy tables built"
    );
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[&str])]) -> StrategyTable {
        let mut table = StrategyTable::default();
        for (key, replies) in entries {
            let replies = replies.iter().map(|r| r.parse().unwrap()).collect();
            table.record(key.parse().unwrap(), replies);
        }
        table
    }

    #[test]
    fn test_get_parses_and_looks_up() {
        let t = table(&[("....x....", &["o...x...."])]);
        assert_eq!(t.get("....x....").map(<[Board]>::len), Some(1));
        assert!(t.get("........x").is_none());
        assert!(t.get("bogus").is_none());
    }

    #[test]
    fn test_union_of_disjoint_tables() {
        let a = table(&[("....x....", &["o...x...."])]);
        let b = table(&[(".........", &["....o...."])]);
        let merged = a.union(&b);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    #[should_panic(expected = "key in both tables")]
    fn test_union_rejects_overlap() {
        let a = table(&[("....x....", &["o...x...."])]);
        let b = table(&[("....x....", &["..o.x...."])]);
        let _ = a.union(&b);
    }

    #[test]
    fn test_json_keys_are_sorted() {
        let t = table(&[
            ("x........", &["xo......."]),
            (".........", &["....o...."]),
        ]);
        let json = t.to_json().unwrap();
        let empty = json.find("\".........\"").unwrap();
        let corner = json.find("\"x........\"").unwrap();
        assert!(empty < corner);
        let back: StrategyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::Tuff.to_string(), "tuff");
        assert_eq!("nice".parse::<Variant>().unwrap(), Variant::Nice);
        assert!("mean".parse::<Variant>().is_err());
        assert_eq!(Variant::Nice.other(), Variant::Tuff);
    }
}
