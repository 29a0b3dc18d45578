//! Turning a caller's board into O's countermove.

use crate::space::SpaceChar;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use naughts_tictactoe::{Board, StrategyTable, Variant};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Path serving each variant's lookups.
pub fn route_for(variant: Variant) -> &'static str {
    match variant {
        Variant::Tuff => "/tictactoe",
        Variant::Nice => "/tictactoe/nice",
    }
}

/// Path serving each variant's JSON table.
pub fn table_route_for(variant: Variant) -> &'static str {
    match variant {
        Variant::Tuff => "/tictactoe/table.json",
        Variant::Nice => "/tictactoe/nice/table.json",
    }
}

/// Why a lookup produced no move. Every case is a 400 for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LookupError {
    /// No usable board given; the usage page is returned instead.
    #[display("{}", help_text(*_0))]
    Help(#[error(not(source))] Variant),
    /// Wrong length or characters outside `x`, `o` and empty.
    #[display("Invalid board format. Try ?board=++o+x++++ or ?_=.&board=..x.o....")]
    InvalidBoard,
    /// Well formed, but never a position O has to answer.
    #[display("Unreachable board state: I'm player O. {}", unreachable_hint(*_0))]
    Unreachable(#[error(not(source))] Variant),
}

fn unreachable_hint(variant: Variant) -> &'static str {
    match variant {
        Variant::Nice => "Must have been a typo?",
        Variant::Tuff => "Are you trying to cheat?",
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Usage page for a variant.
pub fn help_text(variant: Variant) -> String {
    let (mood, other) = match variant {
        Variant::Tuff => ("less", Variant::Nice),
        Variant::Nice => ("more", Variant::Tuff),
    };
    format!(
        "
                TIC TAC TOE (I play 'o')
Send me a board in the 'board' query parameter and I answer with the
same board plus my move. Start with ?board=+++++++++ to let me open,
or open yourself by placing an 'x': ?board=++++x++++. Empty cells may
be written as '+', as a URL-encoded '%20' space, or with your own
escape character given in the '_' parameter, e.g. ?_=-&board=--x------.
I answer using your escape character, or a plain space if you gave
none. Accepted escape characters are ' ', '+', '-', '_' and '.'.
Cells are numbered left to right, top to bottom:

     0 1 2           o x o                    012345678
     3 4 5  so that  x o    encodes as ?board=oxoxo++x+
     6 7 8             x

A {mood} aggressive version of me lives at {other_route}

My full table of moves is at {table}
",
        other_route = route_for(other),
        table = table_route_for(variant),
    )
}

/// Looks up O's answer to `raw` and picks one reply at random.
///
/// `raw` is the board as the caller wrote it; `space` is the caller's empty
/// marker. The reply is rendered back with the same marker.
#[instrument(skip_all, fields(variant = %variant, space = %space))]
pub fn respond<R: Rng + ?Sized>(
    table: &StrategyTable,
    variant: Variant,
    raw: Option<&str>,
    space: SpaceChar,
    rng: &mut R,
) -> Result<String, LookupError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() && space.marks_empty_in(raw) => raw,
        _ => return Err(LookupError::Help(variant)),
    };

    let board: Board = space
        .to_canonical(raw)
        .parse()
        .map_err(|_| LookupError::InvalidBoard)?;

    let replies = table
        .lookup(&board)
        .ok_or(LookupError::Unreachable(variant))?;
    let reply = replies
        .choose(rng)
        .ok_or(LookupError::Unreachable(variant))?;

    debug!(%board, %reply, choices = replies.len(), "Countermove chosen");
    Ok(space.render(reply))
}
