//! Error type for `docket-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Insert hit the UNIQUE constraint on `title`; the transaction was
  /// rolled back and the table is unchanged.
  #[error("a precedent titled {0:?} already exists")]
  DuplicateTitle(String),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
