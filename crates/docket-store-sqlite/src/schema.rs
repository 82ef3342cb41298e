//! SQL schema for the Docket SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated
//! on the `user_version` pragma.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS precedents (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL UNIQUE,
    case_number TEXT    NOT NULL,
    year        INTEGER NOT NULL,
    court       TEXT    NOT NULL,
    description TEXT    NOT NULL,
    keywords    TEXT,               -- comma-separated tag terms
    section     TEXT,
    article     TEXT,
    created_at  TEXT    NOT NULL,   -- RFC 3339 UTC; store-assigned
    updated_at  TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS precedents_year_idx  ON precedents(year);
CREATE INDEX IF NOT EXISTS precedents_court_idx ON precedents(court);

PRAGMA user_version = 1;
";
