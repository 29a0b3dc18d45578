//! Naughts server - HTTP lookup service for the naughts strategy tables
//!
//! Thin adapters around [`naughts_tictactoe`]: query parsing, empty-cell
//! translation, random reply selection and JSON rendering.
//!
//! # Architecture
//!
//! - **Space**: caller escape characters for empty cells
//! - **Lookup**: board in, countermove or 400 message out
//! - **Server**: axum routes and shared read-only state
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod lookup;
mod server;
mod space;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Lookup
pub use lookup::{LookupError, help_text, respond, route_for, table_route_for};

// Crate-level exports - Server
pub use server::{AppState, LookupQuery, router};

// Crate-level exports - Space characters
pub use space::{SPACE_CHARS, SpaceChar};
