//! Tests for the HTTP routes.

use std::sync::OnceLock;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use naughts_server::{AppState, SpaceChar, router};
use naughts_tictactoe::{Board, Player, Position, Score, Square, StrategyTable, StrategyTables, build_tables, terminal_score};
use tower::ServiceExt;

fn tables() -> &'static StrategyTables {
    static TABLES: OnceLock<StrategyTables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

fn app() -> Router {
    let state = AppState::new(tables().clone(), SpaceChar::DEFAULT).expect("JSON renders");
    router(state)
}

/// Sends a GET and returns status, content type and body.
async fn get(uri: &str) -> (StatusCode, String, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_center_opening_gets_safe_reply() {
    for route in ["/tictactoe", "/tictactoe/nice"] {
        let (status, content_type, body) = get(&format!("{route}?_=.&board=....x....")).await;
        assert_eq!(status, StatusCode::OK, "{route}: {body}");
        assert!(content_type.starts_with("text/plain"));

        let reply: Board = body.parse().unwrap();
        assert_eq!(reply.count(Player::O), 1);
        assert_eq!(reply.get(Position::Center), Square::Occupied(Player::X));
        assert!(
            tables().nice().get("....x....").unwrap().contains(&reply),
            "{route}: {reply}"
        );
        assert_ne!(terminal_score(&reply), Some(Score::Loss));
    }
}

#[tokio::test]
async fn test_tuff_opens_in_center() {
    let (status, _, body) = get("/tictactoe?_=.&board=.........").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "....o....");
}

#[tokio::test]
async fn test_nice_opens_anywhere() {
    let (status, _, body) = get("/tictactoe/nice?_=-&board=---------").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.len(), 9);
    assert_eq!(body.matches('o').count(), 1);
    assert_eq!(body.matches('-').count(), 8);
}

#[tokio::test]
async fn test_plus_means_space_in_query() {
    // '+' decodes to ' ', the default empty marker.
    let (status, _, body) = get("/tictactoe?board=++++x++++").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(' ').count(), 7);
}

#[tokio::test]
async fn test_full_board_is_rejected() {
    let (status, content_type, body) = get("/tictactoe?board=xoxoxoxox").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.starts_with("text/plain"));
    assert!(body.contains("TIC TAC TOE"));
}

#[tokio::test]
async fn test_won_board_is_unreachable() {
    let (status, _, body) = get("/tictactoe/nice?_=.&board=xxx...ooo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Unreachable board state"));
    assert!(body.contains("typo"));

    let (status, _, body) = get("/tictactoe?_=.&board=xxx...ooo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("cheat"));
}

#[tokio::test]
async fn test_malformed_boards_are_rejected() {
    for uri in [
        "/tictactoe?_=.&board=....x...",
        "/tictactoe?_=.&board=....x.....",
        "/tictactoe?_=.&board=....z....",
        "/tictactoe?_=.&board=....X....",
    ] {
        let (status, _, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body.starts_with("Invalid board format"), "{uri}: {body}");
    }
}

#[tokio::test]
async fn test_missing_board_shows_help() {
    let (status, _, body) = get("/tictactoe/nice").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("/tictactoe/nice/table.json"));
}

#[tokio::test]
async fn test_table_json_matches_tables() {
    for (uri, table) in [
        ("/tictactoe/table.json", tables().tuff()),
        ("/tictactoe/nice/table.json", tables().nice()),
    ] {
        let (status, content_type, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        let parsed: StrategyTable = serde_json::from_str(&body).unwrap();
        assert_eq!(&parsed, table);
        assert_eq!(body, table.to_json().unwrap());
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _, _) = get("/checkers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
