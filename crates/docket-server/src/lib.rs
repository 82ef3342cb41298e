//! HTTP server for the Docket precedent catalogue.
//!
//! Mounts the JSON API under `/api`, and adds the landing page, the
//! `/stats` aggregate endpoint, and a JSON 404 fallback on top.

pub mod pages;
pub mod stats;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json,
  Router,
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use docket_core::store::PrecedentStore;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `docket.toml` and
/// the `DOCKET_*` environment overlay.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Path of the SQLite database file.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }
fn default_store_path() -> PathBuf { PathBuf::from("precedents.db") }

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the full application router for `store`.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: PrecedentStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(pages::landing))
    .route("/stats", get(stats::handler::<S>))
    .with_state(store.clone())
    .nest("/api", docket_api::api_router(store))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
}

/// Any unmatched path answers a JSON 404.
async fn not_found() -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({ "error": "Resource not found" })),
  )
}

// ─── Integration tests ───────────────────────────────────────────────────────
