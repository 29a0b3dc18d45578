//! Explicit verification entry point for published tables.
//!
//! Nothing here runs during [`build_tables`](crate::build_tables); callers
//! opt in through [`verify_table`].

use crate::invariants::{InvariantSet, InvariantViolation, TableInvariants};
use crate::rules::{Score, successors, terminal_score};
use crate::{Player, StrategyTable};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Tally of the outcomes a table reaches one and two plies ahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Display)]
#[display("{} countered x moves, {} wins, {} ties", countered, wins, ties)]
pub struct TableReport {
    /// Number of X positions the table answers.
    countered: usize,
    /// Replies or X answers that end in an O win.
    wins: usize,
    /// Replies or X answers that end in a tie.
    ties: usize,
}

impl TableReport {
    fn count(&mut self, score: Option<Score>) {
        match score {
            Some(Score::Win) => self.wins += 1,
            Some(Score::Tie) => self.ties += 1,
            Some(Score::Loss) | None => {}
        }
    }
}

/// A table failed one or more invariants.
#[derive(Debug, Clone, Display, Error)]
#[display("Table violates {} invariant(s): {}", violations.len(), summary(violations))]
pub struct VerificationError {
    /// Every violated invariant.
    #[error(not(source))]
    pub violations: Vec<InvariantViolation>,
}

fn summary(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks every table invariant, then tallies wins and ties.
///
/// For each key and reply the reply's terminal score is counted; when the
/// reply leaves the game open, each X answer to it is counted as well.
#[instrument(skip(table), fields(entries = table.len()))]
pub fn verify_table(table: &StrategyTable) -> Result<TableReport, VerificationError> {
    if let Err(violations) = TableInvariants::check_all(table) {
        warn!(count = violations.len(), "Table failed verification");
        return Err(VerificationError { violations });
    }

    let mut report = TableReport {
        countered: table.len(),
        ..TableReport::default()
    };
    for reply in table.iter().flat_map(|(_, replies)| replies) {
        let score = terminal_score(reply);
        report.count(score);
        if score.is_none() {
            for answer in successors(reply, Player::X) {
                report.count(terminal_score(&answer));
            }
        }
    }

    info!(%report, "Table verified");
    Ok(report)
}
