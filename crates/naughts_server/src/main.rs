//! Naughts - unified CLI
//!
//! Serves the strategy tables over HTTP or inspects them offline.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use naughts_server::{AppState, ServerConfig, SpaceChar, respond, router};
use naughts_tictactoe::{Board, Variant, build_tables, verify_table};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Table { variant } => print_table(variant),
        Command::Verify => verify(),
        Command::Lookup {
            board,
            variant,
            space,
        } => lookup(&board, variant, space),
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,naughts_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the HTTP lookup server
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_server(
    config_path: std::path::PathBuf,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let config = ServerConfig::load_or_default(&config_path)?.with_overrides(host, port);

    info!("Building strategy tables");
    let tables = tokio::task::spawn_blocking(build_tables)
        .await
        .context("Table construction panicked")?;
    let state = AppState::new(tables, *config.default_space())?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(host = %config.host(), port = config.port(), "Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

/// Print one table as JSON on stdout
#[instrument]
fn print_table(variant: Variant) -> Result<()> {
    let tables = build_tables();
    println!("{}", tables.get(variant).to_json()?);
    Ok(())
}

/// Verify both tables and print their tallies
#[instrument]
fn verify() -> Result<()> {
    let tables = build_tables();
    for variant in Variant::ALL {
        let report = verify_table(tables.get(variant))
            .with_context(|| format!("{variant} table failed verification"))?;
        println!("{variant}: {report}");
    }
    Ok(())
}

/// Answer one board offline
#[instrument]
fn lookup(board: &str, variant: Variant, space: char) -> Result<()> {
    let space = SpaceChar::new(space)
        .with_context(|| format!("{space:?} is not an accepted empty-cell character"))?;
    let tables = build_tables();
    let reply = respond(
        tables.get(variant),
        variant,
        Some(board),
        space,
        &mut rand::rng(),
    )?;
    let grid: Board = space.to_canonical(&reply).parse()?;
    println!("{reply}\n\n{}", grid.to_grid());
    Ok(())
}
