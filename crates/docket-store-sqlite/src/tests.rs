//! Integration tests for `SqliteStore` against an in-memory database.

use docket_core::{precedent::NewPrecedent, store::PrecedentStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn sample(title: &str, year: i32) -> NewPrecedent {
  NewPrecedent {
    title: title.to_string(),
    case_number: format!("{year}-CV-001"),
    year,
    court: "Supreme Court".to_string(),
    description: "Landmark case establishing precedent for contract law."
      .to_string(),
    keywords: Some("contract, liability, negligence".to_string()),
    section: None,
    article: None,
  }
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_timestamps() {
  let s = store().await;

  let a = s.insert(sample("Smith v. Johnson", 2023)).await.unwrap();
  let b = s.insert(sample("Brown v. Board", 1954)).await.unwrap();

  assert!(a.id > 0);
  assert!(b.id > a.id);
  assert_eq!(a.created_at, a.updated_at);
}

#[tokio::test]
async fn get_returns_inserted_record() {
  let s = store().await;

  let inserted = s.insert(sample("Smith v. Johnson", 2023)).await.unwrap();
  let fetched = s.get(inserted.id).await.unwrap().unwrap();

  assert_eq!(fetched.id, inserted.id);
  assert_eq!(fetched.title, "Smith v. Johnson");
  assert_eq!(fetched.year, 2023);
  assert_eq!(
    fetched.keywords.as_deref(),
    Some("contract, liability, negligence")
  );
  assert_eq!(fetched.created_at, inserted.created_at);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(99999).await.unwrap().is_none());
}

#[tokio::test]
async fn optional_fields_roundtrip() {
  let s = store().await;

  let mut input = sample("Statutory case", 1882);
  input.section = Some("Section 10".to_string());
  input.article = Some("Article 368".to_string());

  let inserted = s.insert(input).await.unwrap();
  let fetched = s.get(inserted.id).await.unwrap().unwrap();

  assert_eq!(fetched.section.as_deref(), Some("Section 10"));
  assert_eq!(fetched.article.as_deref(), Some("Article 368"));
}

// ─── Title uniqueness ────────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_title_is_rejected_and_count_unchanged() {
  let s = store().await;

  s.insert(sample("Smith v. Johnson", 2023)).await.unwrap();
  assert_eq!(s.count().await.unwrap(), 1);

  let err = s
    .insert(sample("Smith v. Johnson", 1999))
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::DuplicateTitle(ref t) if t == "Smith v. Johnson"));

  // The failed insert rolled back; the table is unchanged.
  assert_eq!(s.count().await.unwrap(), 1);
  let all = s.scan().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].year, 2023);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_record_and_removes_it() {
  let s = store().await;

  let inserted = s.insert(sample("Marbury v. Madison", 1803)).await.unwrap();
  let deleted = s.delete(inserted.id).await.unwrap().unwrap();

  assert_eq!(deleted.title, "Marbury v. Madison");
  assert!(s.get(inserted.id).await.unwrap().is_none());
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_missing_returns_none() {
  let s = store().await;
  assert!(s.delete(42).await.unwrap().is_none());
}

// ─── Scan / count ────────────────────────────────────────────────────────────

#[tokio::test]
async fn scan_returns_all_records_in_id_order() {
  let s = store().await;

  s.insert(sample("Case A", 2001)).await.unwrap();
  s.insert(sample("Case B", 2002)).await.unwrap();
  s.insert(sample("Case C", 2003)).await.unwrap();

  let all = s.scan().await.unwrap();
  assert_eq!(all.len(), 3);
  assert!(all.windows(2).all(|w| w[0].id < w[1].id));
  assert_eq!(s.count().await.unwrap(), 3);
}
