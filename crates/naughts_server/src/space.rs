//! Empty-cell escape characters used on the wire.
//!
//! The tables always use `.` for an empty cell. Callers may pick another
//! character with the `_` query parameter; boards are translated to the
//! canonical form before lookup and back again in the response.

use naughts_tictactoe::{Board, EMPTY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters a caller may use for empty cells.
pub const SPACE_CHARS: [char; 5] = [' ', '+', '-', '_', '.'];

/// Always read as an empty cell on input, whatever the space char.
const PLUS: char = '+';

/// A validated empty-cell escape character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct SpaceChar(char);

impl SpaceChar {
    /// A literal space.
    pub const DEFAULT: SpaceChar = SpaceChar(' ');

    /// Accepts one of [`SPACE_CHARS`].
    pub fn new(c: char) -> Option<Self> {
        SPACE_CHARS.contains(&c).then_some(Self(c))
    }

    /// Reads the `_` query parameter, falling back to `default` unless it
    /// is exactly one accepted character.
    pub fn from_param(param: Option<&str>, default: SpaceChar) -> Self {
        let mut chars = param.unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c).unwrap_or(default),
            _ => default,
        }
    }

    /// The character itself.
    pub fn get(self) -> char {
        self.0
    }

    /// True if `raw` contains this char or `+`, i.e. has some empty cell
    /// written the way a caller would.
    pub fn marks_empty_in(self, raw: &str) -> bool {
        raw.contains(self.0) || raw.contains(PLUS)
    }

    /// Rewrites this char and `+` to the canonical empty marker.
    pub fn to_canonical(self, raw: &str) -> String {
        raw.chars()
            .map(|c| if c == self.0 || c == PLUS { EMPTY } else { c })
            .collect()
    }

    /// Renders a board with this char for empty cells.
    pub fn render(self, board: &Board) -> String {
        board
            .to_string()
            .chars()
            .map(|c| if c == EMPTY { self.0 } else { c })
            .collect()
    }
}

impl Default for SpaceChar {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SpaceChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl TryFrom<char> for SpaceChar {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| format!("{c:?} is not one of {SPACE_CHARS:?}"))
    }
}

impl From<SpaceChar> for char {
    fn from(space: SpaceChar) -> Self {
        space.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_accepts_listed_chars() {
        for c in SPACE_CHARS {
            let param = c.to_string();
            assert_eq!(SpaceChar::from_param(Some(&param), SpaceChar::DEFAULT).get(), c);
        }
    }

    #[test]
    fn test_from_param_falls_back() {
        let dash = SpaceChar::new('-').unwrap();
        assert_eq!(SpaceChar::from_param(None, dash), dash);
        assert_eq!(SpaceChar::from_param(Some("@"), dash), dash);
        assert_eq!(SpaceChar::from_param(Some("--"), dash), dash);
        assert_eq!(SpaceChar::from_param(Some(""), dash), dash);
    }

    #[test]
    fn test_canonical_round_trip() {
        let dash = SpaceChar::new('-').unwrap();
        let canonical = dash.to_canonical("--x+-----");
        assert_eq!(canonical, "..x......");
        let board: Board = canonical.parse().unwrap();
        assert_eq!(dash.render(&board), "--x------");
    }

    #[test]
    fn test_marks_empty_in() {
        assert!(SpaceChar::DEFAULT.marks_empty_in("    x    "));
        assert!(SpaceChar::DEFAULT.marks_empty_in("++++x++++"));
        assert!(!SpaceChar::DEFAULT.marks_empty_in("xoxoxoxox"));
    }
}
