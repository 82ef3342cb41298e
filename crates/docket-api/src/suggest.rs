//! Handler for `GET /suggestions`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use docket_core::{store::PrecedentStore, suggest};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct SuggestParams {
  pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
  pub suggestions: Vec<String>,
}

/// `GET /suggestions?q=<prefix>` — always 200; an under-length prefix
/// answers an empty list without touching the store.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, ApiError>
where
  S: PrecedentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let raw = params.q.unwrap_or_default();
  let Some(prefix) = suggest::normalized_prefix(&raw) else {
    return Ok(Json(SuggestResponse { suggestions: Vec::new() }));
  };

  let records = store.scan().await.map_err(ApiError::store)?;
  Ok(Json(SuggestResponse {
    suggestions: suggest::suggestions(&records, &prefix),
  }))
}
