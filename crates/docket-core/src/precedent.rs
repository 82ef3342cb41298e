//! Precedent — one legal case record.
//!
//! Records are created and deleted whole; there is no edit operation.
//! `id` and both timestamps are assigned by the store, never by callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored legal case record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precedent {
  /// Store-assigned integer identifier; immutable.
  pub id:          i64,
  /// Case title; unique across the whole table.
  pub title:       String,
  /// Free-form citation identifier; not required to be unique.
  pub case_number: String,
  pub year:        i32,
  /// Name of the issuing court.
  pub court:       String,
  pub description: String,
  /// Comma-separated tag terms, e.g. `"contract, liability"`.
  pub keywords:    Option<String>,
  /// Statute/section cross-reference, taken whole as a suggestion term.
  pub section:     Option<String>,
  /// Article cross-reference, taken whole as a suggestion term.
  pub article:     Option<String>,
  pub created_at:  DateTime<Utc>,
  /// Refreshed by the store on any re-save; no explicit edit exists.
  pub updated_at:  DateTime<Utc>,
}

/// Input to [`crate::store::PrecedentStore::insert`].
/// `id` and timestamps are always set by the store.
#[derive(Debug, Clone)]
pub struct NewPrecedent {
  pub title:       String,
  pub case_number: String,
  pub year:        i32,
  pub court:       String,
  pub description: String,
  pub keywords:    Option<String>,
  pub section:     Option<String>,
  pub article:     Option<String>,
}
