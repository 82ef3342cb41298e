//! Subcommand implementations.
//!
//! Domain failures (duplicate title, unknown id, too-short query) print
//! a `✗` line and exit 0; only infrastructure failures propagate.

use anyhow::Result;
use docket_core::{
  precedent::{NewPrecedent, Precedent},
  query::SearchQuery,
  store::PrecedentStore,
};
use docket_store_sqlite::SqliteStore;

pub async fn add(store: &SqliteStore, input: NewPrecedent) -> Result<()> {
  match store.insert(input).await {
    Ok(record) => {
      println!("✓ Successfully added precedent: {}", record.title);
    }
    Err(e) => println!("✗ Error adding precedent: {e}"),
  }
  Ok(())
}

pub async fn list(store: &SqliteStore) -> Result<()> {
  let records = store.scan().await?;
  if records.is_empty() {
    println!("No precedents found in database.");
    return Ok(());
  }

  println!();
  println!("{:<5} {:<30} {:<6} {:<20}", "ID", "Title", "Year", "Court");
  println!("{}", "-".repeat(65));
  for r in &records {
    println!(
      "{:<5} {:<30} {:<6} {:<20}",
      r.id,
      truncate(&r.title, 30),
      r.year,
      r.court
    );
  }
  println!("\nTotal: {} precedents", records.len());
  Ok(())
}

pub async fn delete(store: &SqliteStore, id: i64) -> Result<()> {
  match store.delete(id).await {
    Ok(Some(record)) => {
      println!("✓ Successfully deleted precedent: {}", record.title);
    }
    Ok(None) => println!("✗ Precedent with ID {id} not found."),
    Err(e) => println!("✗ Error deleting precedent: {e}"),
  }
  Ok(())
}

pub async fn search(store: &SqliteStore, raw: &str) -> Result<()> {
  let query = match SearchQuery::new(raw) {
    Ok(q) => q,
    Err(e) => {
      println!("✗ {e}");
      return Ok(());
    }
  };

  let records = store.scan().await?;
  let matches: Vec<&Precedent> =
    records.iter().filter(|r| query.matches(r)).collect();

  if matches.is_empty() {
    println!("No results found for: {}", query.text);
    return Ok(());
  }

  println!("\nFound {} result(s) for '{}':\n", matches.len(), query.text);
  for r in matches {
    println!("Title: {}", r.title);
    println!("Case #: {}", r.case_number);
    println!("Year: {}", r.year);
    println!("Court: {}", r.court);
    println!("Description: {}", truncate(&r.description, 100));
    if let Some(keywords) = &r.keywords {
      println!("Keywords: {keywords}");
    }
    println!("{}", "-".repeat(60));
  }
  Ok(())
}

pub async fn seed(store: &SqliteStore) -> Result<()> {
  if store.count().await? > 0 {
    println!("Database already contains precedents; nothing to do.");
    return Ok(());
  }

  for input in sample_precedents() {
    let record = store.insert(input).await?;
    println!("✓ Added: {}", record.title);
  }
  println!("Database initialized with sample data.");
  Ok(())
}

fn sample_precedents() -> Vec<NewPrecedent> {
  vec![
    NewPrecedent {
      title: "Smith v. Johnson".to_string(),
      case_number: "2023-CV-001".to_string(),
      year: 2023,
      court: "Supreme Court".to_string(),
      description: "Landmark case establishing precedent for contract law."
        .to_string(),
      keywords: Some("contract, liability, negligence".to_string()),
      section: Some("Section 73, Contract Act".to_string()),
      article: None,
    },
    NewPrecedent {
      title: "Brown v. Board of Education".to_string(),
      case_number: "1954-SC-001".to_string(),
      year: 1954,
      court: "Supreme Court".to_string(),
      description: "Landmark case on equal protection and education."
        .to_string(),
      keywords: Some("education, equality, civil rights".to_string()),
      section: None,
      article: Some("Fourteenth Amendment".to_string()),
    },
    NewPrecedent {
      title: "Marbury v. Madison".to_string(),
      case_number: "1803-SC-001".to_string(),
      year: 1803,
      court: "Supreme Court".to_string(),
      description: "Established judicial review in the United States."
        .to_string(),
      keywords: Some("judicial review, constitutional law".to_string()),
      section: None,
      article: Some("Article III".to_string()),
    },
  ]
}

fn truncate(text: &str, max: usize) -> String {
  if text.chars().count() > max {
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
  } else {
    text.to_string()
  }
}
