//! HTTP routes over the published tables.

use crate::lookup::{LookupError, respond, route_for, table_route_for};
use crate::space::SpaceChar;
use axum::body::{Body, Bytes};
use axum::extract::{Query, State};
use axum::http::{HeaderName, Request, header};
use axum::response::IntoResponse;
use axum::Router;
use axum::routing::get;
use naughts_tictactoe::{StrategyTable, StrategyTables, Variant};
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{info, instrument, warn};

/// Query string accepted by the lookup routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupQuery {
    /// Board as the caller wrote it.
    pub board: Option<String>,
    /// Caller's empty-cell character.
    #[serde(rename = "_")]
    pub space: Option<String>,
}

struct Published {
    tables: StrategyTables,
    tuff_json: Bytes,
    nice_json: Bytes,
    default_space: SpaceChar,
}

/// Shared, read-only state for every request.
///
/// Built once at startup; handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Published>,
}

impl AppState {
    /// Renders both tables to JSON and wraps everything for sharing.
    #[instrument(skip(tables))]
    pub fn new(tables: StrategyTables, default_space: SpaceChar) -> serde_json::Result<Self> {
        let tuff_json = Bytes::from(tables.tuff().to_json()?);
        let nice_json = Bytes::from(tables.nice().to_json()?);
        info!(
            tuff_bytes = tuff_json.len(),
            nice_bytes = nice_json.len(),
            "Table JSON cached"
        );
        Ok(Self {
            inner: Arc::new(Published {
                tables,
                tuff_json,
                nice_json,
                default_space,
            }),
        })
    }

    /// The table for `variant`.
    pub fn table(&self, variant: Variant) -> &StrategyTable {
        self.inner.tables.get(variant)
    }

    /// Cached JSON for `variant`.
    pub fn json(&self, variant: Variant) -> Bytes {
        match variant {
            Variant::Tuff => self.inner.tuff_json.clone(),
            Variant::Nice => self.inner.nice_json.clone(),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(route_for(Variant::Tuff), get(tuff))
        .route(route_for(Variant::Nice), get(nice))
        .route(table_route_for(Variant::Tuff), get(tuff_table))
        .route(table_route_for(Variant::Nice), get(nice_table))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn tuff(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<String, LookupError> {
    lookup(&state, Variant::Tuff, &query)
}

async fn nice(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<String, LookupError> {
    lookup(&state, Variant::Nice, &query)
}

async fn tuff_table(State(state): State<AppState>) -> impl IntoResponse {
    json(&state, Variant::Tuff)
}

async fn nice_table(State(state): State<AppState>) -> impl IntoResponse {
    json(&state, Variant::Nice)
}

#[instrument(skip_all, fields(variant = %variant, board = ?query.board))]
fn lookup(state: &AppState, variant: Variant, query: &LookupQuery) -> Result<String, LookupError> {
    let space = SpaceChar::from_param(query.space.as_deref(), state.inner.default_space);
    let result = respond(
        state.table(variant),
        variant,
        query.board.as_deref(),
        space,
        &mut rand::rng(),
    );
    match &result {
        Ok(reply) => info!(%reply, "Countermove sent"),
        Err(LookupError::Help(_)) => info!("Usage page sent"),
        Err(e) => warn!(error = %e, "Lookup rejected"),
    }
    result
}

fn json(state: &AppState, variant: Variant) -> ([(HeaderName, &'static str); 1], Bytes) {
    ([(header::CONTENT_TYPE, "application/json")], state.json(variant))
}
