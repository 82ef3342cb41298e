//! Handler for `GET /stats`.

use std::sync::Arc;

use axum::{Json, extract::State};
use docket_api::ApiError;
use docket_core::{
  stats::{self, Stats},
  store::PrecedentStore,
};

/// `GET /stats` — total record count plus per-year and per-court
/// breakdowns, aggregated in memory over a full scan.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Stats>, ApiError>
where
  S: PrecedentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store.scan().await.map_err(ApiError::store)?;
  Ok(Json(stats::compute(&records)))
}
