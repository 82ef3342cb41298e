//! [`SqliteStore`] — the SQLite implementation of [`PrecedentStore`].

use std::path::Path;

use chrono::Utc;
use docket_core::{
  precedent::{NewPrecedent, Precedent},
  store::PrecedentStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{COLUMNS, RawPrecedent, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A precedent store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Did the failed call hit a UNIQUE/NOT NULL constraint?
fn is_constraint_violation(err: &tokio_rusqlite::Error) -> bool {
  matches!(
    err,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

// ─── PrecedentStore impl ─────────────────────────────────────────────────────

impl PrecedentStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewPrecedent) -> Result<Precedent> {
    let now = Utc::now();
    let now_str = encode_dt(now);
    let row = input.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO precedents (
             title, case_number, year, court, description,
             keywords, section, article, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            row.title,
            row.case_number,
            row.year,
            row.court,
            row.description,
            row.keywords,
            row.section,
            row.article,
            now_str,
            now_str,
          ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(|e| {
        if is_constraint_violation(&e) {
          Error::DuplicateTitle(input.title.clone())
        } else {
          Error::Database(e)
        }
      })?;

    Ok(Precedent {
      id,
      title: input.title,
      case_number: input.case_number,
      year: input.year,
      court: input.court,
      description: input.description,
      keywords: input.keywords,
      section: input.section,
      article: input.article,
      created_at: now,
      updated_at: now,
    })
  }

  async fn get(&self, id: i64) -> Result<Option<Precedent>> {
    let raw: Option<RawPrecedent> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM precedents WHERE id = ?1"),
              rusqlite::params![id],
              RawPrecedent::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPrecedent::into_precedent).transpose()
  }

  async fn delete(&self, id: i64) -> Result<Option<Precedent>> {
    let raw: Option<RawPrecedent> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let raw = tx
          .query_row(
            &format!("SELECT {COLUMNS} FROM precedents WHERE id = ?1"),
            rusqlite::params![id],
            RawPrecedent::from_row,
          )
          .optional()?;
        if raw.is_some() {
          tx.execute("DELETE FROM precedents WHERE id = ?1", rusqlite::params![
            id
          ])?;
        }
        tx.commit()?;
        Ok(raw)
      })
      .await?;

    raw.map(RawPrecedent::into_precedent).transpose()
  }

  async fn scan(&self) -> Result<Vec<Precedent>> {
    let raws: Vec<RawPrecedent> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {COLUMNS} FROM precedents ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawPrecedent::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPrecedent::into_precedent).collect()
  }

  async fn count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM precedents", [], |row| {
          row.get(0)
        })?)
      })
      .await?;

    Ok(count as u64)
  }
}
