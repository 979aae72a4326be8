use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const DEFAULT_PAYLOAD_LEN: usize = 8 * 1024 * 1024;
pub const DEFAULT_POPULATION: u64 = 10_000;
pub const DEFAULT_PAGE_LIMIT: i64 = 500;
pub const MAX_PAGE_LIMIT: i64 = 1000;

#[derive(Clone, Debug)]
pub struct Config {
    /// Size of the body served from `/`.
    pub payload_len: usize,
    /// Number of users behind `/users/`.
    pub population: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payload_len: DEFAULT_PAYLOAD_LEN,
            population: DEFAULT_POPULATION,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct Page {
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Clone)]
struct AppState {
    payload: Bytes,
    population: u64,
}

pub fn app() -> Router {
    app_with(Config::default())
}

pub fn app_with(config: Config) -> Router {
    let state = AppState {
        payload: Bytes::from(vec![b'x'; config.payload_len]),
        population: config.population,
    };
    Router::new()
        .route("/", get(payload))
        .route("/api/health/status", get(health))
        .route("/users/", get(list_users))
        .route("/users/count/", get(count_users))
        .route("/status/{code}", get(status))
        .fallback(not_found)
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Config::default()).await
}

pub async fn run_with(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(config)).await
}

async fn payload(State(state): State<AppState>) -> Bytes {
    state.payload.clone()
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "UP" }))
}

async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<User>>, StatusCode> {
    let limit = page.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) || page.offset < 0 {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let start = (page.offset as u64).min(state.population);
    let end = (start + limit as u64).min(state.population);
    Ok(Json(
        (start..end)
            .map(|id| User {
                id,
                name: format!("user-{id}"),
            })
            .collect(),
    ))
}

async fn count_users(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "count": state.population }))
}

/// Respond with exactly the requested status and an empty body. 1xx codes
/// are not valid final responses and are rejected.
async fn status(Path(code): Path<u16>) -> StatusCode {
    match StatusCode::from_u16(code) {
        Ok(status) if (200..=599).contains(&code) => status,
        _ => StatusCode::BAD_REQUEST,
    }
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_to_json() {
        let user = User {
            id: 7,
            name: "user-7".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "user-7");
    }

    #[test]
    fn page_defaults_offset_to_zero() {
        let page: Page = serde_json::from_str(r#"{"limit":10}"#).unwrap();
        assert_eq!(page.limit, Some(10));
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn page_all_fields_optional() {
        let page: Page = serde_json::from_str(r#"{}"#).unwrap();
        assert!(page.limit.is_none());
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn default_config_serves_eight_mebibytes() {
        let config = Config::default();
        assert_eq!(config.payload_len, 8 * 1024 * 1024);
        assert_eq!(config.population, DEFAULT_POPULATION);
    }
}
