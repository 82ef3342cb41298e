//! Handler for `GET /search`.
//!
//! Query params map onto [`SearchQuery`]. The query text is validated
//! before the store is touched; a malformed `year` filter is dropped
//! silently (the request still succeeds without it) rather than
//! rejecting the whole request.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use docket_core::{
  query::{SearchPage, SearchQuery},
  store::PrecedentStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  /// Free-text query; required, at least 2 characters after trimming.
  pub q:        Option<String>,
  /// Exact year filter, parsed as an integer; ignored if unparseable.
  pub year:     Option<String>,
  /// Case-insensitive substring filter on the court name.
  pub court:    Option<String>,
  /// One of `year` | `title` | `court`; anything else → year descending.
  pub sort:     Option<String>,
  /// `asc` or `desc` (default).
  pub order:    Option<String>,
  pub page:     Option<usize>,
  pub per_page: Option<usize>,
}

/// `GET /search?q=...[&year=...][&court=...][&sort=...][&order=...][&page=...][&per_page=...]`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, ApiError>
where
  S: PrecedentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let raw = params.q.unwrap_or_default();
  let mut query =
    SearchQuery::new(&raw).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  if let Some(year) = &params.year {
    query.year = year.trim().parse().ok();
  }
  query.court = params.court.filter(|c| !c.trim().is_empty());
  query.apply_sort(params.sort.as_deref(), params.order.as_deref());
  if let Some(page) = params.page {
    query.page = page;
  }
  if let Some(per_page) = params.per_page {
    query.per_page = per_page;
  }

  let records = store.scan().await.map_err(ApiError::store)?;
  Ok(Json(query.run(&records)))
}
