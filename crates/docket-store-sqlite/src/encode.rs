//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; everything else maps to
//! TEXT/INTEGER columns directly.

use chrono::{DateTime, Utc};
use docket_core::precedent::Precedent;

use crate::{Error, Result};

/// Column list shared by every SELECT; order must match
/// [`RawPrecedent::from_row`].
pub const COLUMNS: &str = "id, title, case_number, year, court, \
                           description, keywords, section, article, \
                           created_at, updated_at";

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `precedents` row.
pub struct RawPrecedent {
  pub id:          i64,
  pub title:       String,
  pub case_number: String,
  pub year:        i32,
  pub court:       String,
  pub description: String,
  pub keywords:    Option<String>,
  pub section:     Option<String>,
  pub article:     Option<String>,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawPrecedent {
  /// Read one row in [`COLUMNS`] order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      title:       row.get(1)?,
      case_number: row.get(2)?,
      year:        row.get(3)?,
      court:       row.get(4)?,
      description: row.get(5)?,
      keywords:    row.get(6)?,
      section:     row.get(7)?,
      article:     row.get(8)?,
      created_at:  row.get(9)?,
      updated_at:  row.get(10)?,
    })
  }

  pub fn into_precedent(self) -> Result<Precedent> {
    Ok(Precedent {
      id:          self.id,
      title:       self.title,
      case_number: self.case_number,
      year:        self.year,
      court:       self.court,
      description: self.description,
      keywords:    self.keywords,
      section:     self.section,
      article:     self.article,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}
