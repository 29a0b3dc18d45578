//! Command-line interface for naughts.

use clap::{Parser, Subcommand};
use naughts_tictactoe::Variant;

/// Naughts - a tic-tac-toe player that never loses as O
#[derive(Parser, Debug)]
#[command(name = "naughts")]
#[command(about = "Never-losing tic-tac-toe lookup service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP lookup server
    Serve {
        /// Path to the TOML config file (defaults apply if it is missing)
        #[arg(short, long, default_value = "naughts.toml")]
        config: std::path::PathBuf,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a strategy table as JSON
    Table {
        /// Which table to print (tuff or nice)
        #[arg(short, long, default_value = "tuff")]
        variant: Variant,
    },

    /// Check both tables and print win/tie tallies
    Verify,

    /// Answer a single board without starting the server
    Lookup {
        /// Board to answer, e.g. "....x...."
        #[arg(short, long, allow_hyphen_values = true)]
        board: String,

        /// Which table to consult (tuff or nice)
        #[arg(short, long, default_value = "tuff")]
        variant: Variant,

        /// Empty-cell character used in the board
        #[arg(short, long, default_value = ".", allow_hyphen_values = true)]
        space: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::parse_from(["naughts", "lookup", "--board", "--x------", "--space", "-", "-v", "nice"]);
        match cli.command {
            Command::Lookup { board, variant, space } => {
                assert_eq!(board, "--x------");
                assert_eq!(variant, Variant::Nice);
                assert_eq!(space, '-');
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_serve_overrides_default_to_none() {
        let cli = Cli::parse_from(["naughts", "serve"]);
        match cli.command {
            Command::Serve { host, port, config } => {
                assert!(host.is_none());
                assert!(port.is_none());
                assert_eq!(config, std::path::PathBuf::from("naughts.toml"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["naughts", "table", "--variant", "mean"]).is_err());
    }
}
