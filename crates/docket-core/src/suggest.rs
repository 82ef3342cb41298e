//! Autocomplete suggestions from the stored vocabulary.
//!
//! Candidate terms are rebuilt from the full record set on every call —
//! no cache, no incremental index. The candidate set for a record is:
//! its comma-split keyword tokens, its `section` and `article` strings
//! taken whole, and every title word longer than two characters, all
//! lower-cased. Output is deduplicated, lexicographically sorted, and
//! capped, so identical inputs over an unchanged store always produce
//! identical output.

use std::collections::BTreeSet;

use crate::precedent::Precedent;

pub const MAX_SUGGESTIONS: usize = 5;
pub const MIN_PREFIX_LEN: usize = 2;

/// Lower-cased, trimmed prefix, or `None` when it is too short to
/// suggest for. Callers skip the table scan entirely on `None`.
pub fn normalized_prefix(raw: &str) -> Option<String> {
  let prefix = raw.trim().to_lowercase();
  (prefix.chars().count() >= MIN_PREFIX_LEN).then_some(prefix)
}

/// Up to [`MAX_SUGGESTIONS`] vocabulary terms starting with `prefix`,
/// sorted ascending. An under-length prefix yields no suggestions.
pub fn suggestions(records: &[Precedent], prefix: &str) -> Vec<String> {
  let Some(prefix) = normalized_prefix(prefix) else {
    return Vec::new();
  };

  let mut terms: BTreeSet<String> = BTreeSet::new();
  for record in records {
    if let Some(keywords) = &record.keywords {
      for token in keywords.split(',') {
        let token = token.trim().to_lowercase();
        if !token.is_empty() {
          terms.insert(token);
        }
      }
    }
    if let Some(section) = &record.section {
      terms.insert(section.trim().to_lowercase());
    }
    if let Some(article) = &record.article {
      terms.insert(article.trim().to_lowercase());
    }
    for word in record.title.split_whitespace() {
      if word.chars().count() > 2 {
        terms.insert(word.to_lowercase());
      }
    }
  }

  terms
    .into_iter()
    .filter(|term| term.starts_with(&prefix))
    .take(MAX_SUGGESTIONS)
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  fn record(id: i64, title: &str, keywords: Option<&str>) -> Precedent {
    Precedent {
      id,
      title: title.to_string(),
      case_number: format!("{id:04}-SC"),
      year: 1973,
      court: "Supreme Court".to_string(),
      description: "description".to_string(),
      keywords: keywords.map(str::to_string),
      section: None,
      article: None,
      created_at: Utc::now(),
      updated_at: Utc::now(),
    }
  }

  #[test]
  fn short_prefix_returns_nothing() {
    let records = vec![record(1, "Some Case", Some("basic structure"))];
    assert!(suggestions(&records, "").is_empty());
    assert!(suggestions(&records, "b").is_empty());
    assert!(normalized_prefix(" b ").is_none());
  }

  #[test]
  fn keyword_tokens_are_split_trimmed_and_lowercased() {
    let records = vec![record(
      1,
      "Kesavananda Bharati v. State of Kerala",
      Some("basic structure, constitutional amendments"),
    )];
    assert_eq!(suggestions(&records, "bas"), vec!["basic structure"]);
    assert_eq!(
      suggestions(&records, "co"),
      vec!["constitutional amendments"]
    );
  }

  #[test]
  fn title_words_longer_than_two_chars_are_candidates() {
    let records = vec![record(1, "Kesavananda Bharati v. State of Kerala", None)];
    assert_eq!(suggestions(&records, "kes"), vec!["kesavananda"]);
    // "v." and "of" are too short to be candidates.
    assert!(suggestions(&records, "v.").is_empty());
    assert!(suggestions(&records, "of").is_empty());
  }

  #[test]
  fn section_and_article_are_whole_terms() {
    let mut r = record(1, "Some Title", None);
    r.section = Some("Section 10 Transfer of Property Act".to_string());
    r.article = Some("Article 368".to_string());
    let records = vec![r];

    assert_eq!(
      suggestions(&records, "sec"),
      vec!["section 10 transfer of property act"]
    );
    assert_eq!(suggestions(&records, "art"), vec!["article 368"]);
  }

  #[test]
  fn output_is_sorted_deduplicated_prefix_anchored_and_capped() {
    let records: Vec<Precedent> = (0..10)
      .map(|i| {
        record(
          i,
          &format!("Statute {i}"),
          Some("statute, statute, statutory duty"),
        )
      })
      .collect();

    let out = suggestions(&records, "stat");
    assert!(out.len() <= MAX_SUGGESTIONS);
    assert!(out.iter().all(|t| t.starts_with("stat")));
    let mut sorted = out.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(out, sorted);
  }
}
