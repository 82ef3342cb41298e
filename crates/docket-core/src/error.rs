//! Error types for `docket-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The free-text query was empty or shorter than two characters after
  /// trimming and whitespace collapsing. Search never runs in this case.
  #[error("Search query must be at least 2 characters")]
  QueryTooShort,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
