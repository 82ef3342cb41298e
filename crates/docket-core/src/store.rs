//! The `PrecedentStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `docket-store-sqlite`). Higher layers (`docket-api`, `docket-cli`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::precedent::{NewPrecedent, Precedent};

/// Abstraction over a precedent store backend.
///
/// Every operation is a single atomic unit: `insert` either fully
/// commits or fully rolls back (e.g. on a duplicate title), leaving the
/// table unchanged. Isolation between concurrent callers is the
/// backend's own discipline; no locking happens above this trait.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PrecedentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record, assigning its `id` and both timestamps.
  ///
  /// Fails with the backend's duplicate-title error when `title` is
  /// already taken.
  fn insert(
    &self,
    input: NewPrecedent,
  ) -> impl Future<Output = Result<Precedent, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Precedent>, Self::Error>> + Send + '_;

  /// Delete a record by id, returning the deleted record, or `None` if
  /// there was nothing to delete.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Precedent>, Self::Error>> + Send + '_;

  /// Full-table scan, ordered by `id`. Search and suggestions operate
  /// over this snapshot in memory.
  fn scan(
    &self,
  ) -> impl Future<Output = Result<Vec<Precedent>, Self::Error>> + Send + '_;

  /// Number of stored records.
  fn count(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
