//! Handlers for `/precedent` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/precedent/:id` | 404 if not found |
//! | `POST` | `/precedent` | Body: [`CreateBody`]; returns 201 + stored record |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use docket_core::{
  precedent::{NewPrecedent, Precedent},
  store::PrecedentStore,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /precedent/:id`
///
/// A non-integer id never names a resource; it answers the same JSON
/// 404 an unmatched path would, not a plain-text extractor rejection.
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Precedent>, ApiError>
where
  S: PrecedentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Ok(id) = id.parse::<i64>() else {
    return Err(ApiError::NotFound("Resource not found".to_string()));
  };
  let record = store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Precedent not found".to_string()))?;
  Ok(Json(record))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `year` in the request body may be a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YearField {
  Int(i64),
  Text(String),
}

impl YearField {
  fn parse(&self) -> Result<i32, String> {
    match self {
      Self::Int(n) => {
        i32::try_from(*n).map_err(|_| format!("year out of range: {n}"))
      }
      Self::Text(s) => s
        .trim()
        .parse()
        .map_err(|_| format!("invalid year: {s:?}")),
    }
  }
}

/// JSON body accepted by `POST /precedent`. Every required field is an
/// `Option` so that absence is answered with a 400 body instead of a
/// deserialisation rejection.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub title:       Option<String>,
  pub case_number: Option<String>,
  pub year:        Option<YearField>,
  pub court:       Option<String>,
  pub description: Option<String>,
  pub keywords:    Option<String>,
  pub section:     Option<String>,
  pub article:     Option<String>,
}

impl CreateBody {
  /// Validate required fields. Blank strings count as missing.
  fn into_new_precedent(self) -> Result<NewPrecedent, ApiError> {
    let required = |field: Option<String>| {
      field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
          ApiError::BadRequest("Missing required fields".to_string())
        })
    };

    let title = required(self.title)?;
    let case_number = required(self.case_number)?;
    let court = required(self.court)?;
    let description = required(self.description)?;

    // A missing year is missing input; a present-but-unparseable year
    // is a type mismatch, answered like any other rejected write: 500
    // with the underlying message, nothing stored.
    let year = match &self.year {
      None => {
        return Err(ApiError::BadRequest(
          "Missing required fields".to_string(),
        ));
      }
      Some(field) => {
        field.parse().map_err(|msg| ApiError::Store(msg.into()))?
      }
    };

    Ok(NewPrecedent {
      title,
      case_number,
      year,
      court,
      description,
      keywords: self.keywords.filter(|s| !s.trim().is_empty()),
      section: self.section.filter(|s| !s.trim().is_empty()),
      article: self.article.filter(|s| !s.trim().is_empty()),
    })
  }
}

/// `POST /precedent` — returns 201 + the stored record. A duplicate
/// title (or any other store failure) rolls back and answers 500 with
/// the failure message.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PrecedentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = body.into_new_precedent()?;
  let record = store.insert(input).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(record)))
}
