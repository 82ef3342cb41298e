//! The search core: free-text filter, optional year/court filters,
//! sorting, and pagination over an in-memory snapshot of the table.
//!
//! Matching is containment matching — a case-insensitive substring test
//! against every searchable field, not tokenized word matching. There
//! is no relevance ranking; ordering comes solely from the requested
//! sort field and direction.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{
  error::{Error, Result},
  precedent::Precedent,
};

pub const DEFAULT_PER_PAGE: usize = 20;

// ─── Sort ────────────────────────────────────────────────────────────────────

/// Field a result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
  Year,
  Title,
  Court,
}

impl SortField {
  /// Parse a raw `sort` parameter. `None` means the value is not one of
  /// the supported fields.
  pub fn parse(raw: &str) -> Option<Self> {
    match raw.trim().to_ascii_lowercase().as_str() {
      "year" => Some(Self::Year),
      "title" => Some(Self::Title),
      "court" => Some(Self::Court),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  Asc,
  Desc,
}

impl SortOrder {
  /// `"asc"` selects ascending; anything else (including absent) is
  /// descending, the default.
  pub fn parse(raw: Option<&str>) -> Self {
    match raw {
      Some(s) if s.trim().eq_ignore_ascii_case("asc") => Self::Asc,
      _ => Self::Desc,
    }
  }
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// A validated search request. Construct with [`SearchQuery::new`];
/// filters and paging can be adjusted on the public fields afterwards.
#[derive(Debug, Clone)]
pub struct SearchQuery {
  /// Normalised free-text query: trimmed, inner whitespace collapsed,
  /// at least two characters.
  pub text:     String,
  /// Exact-match year filter. The HTTP layer drops unparseable values
  /// silently rather than failing the request.
  pub year:     Option<i32>,
  /// Case-insensitive substring filter on the court name.
  pub court:    Option<String>,
  pub sort:     SortField,
  pub order:    SortOrder,
  /// 1-indexed page number.
  pub page:     usize,
  pub per_page: usize,
}

impl SearchQuery {
  /// Normalise and validate the free-text query. Fails with
  /// [`Error::QueryTooShort`] before any store access can happen.
  pub fn new(raw: &str) -> Result<Self> {
    let text = normalize(raw);
    if text.chars().count() < 2 {
      return Err(Error::QueryTooShort);
    }
    Ok(Self {
      text,
      year: None,
      court: None,
      sort: SortField::Year,
      order: SortOrder::Desc,
      page: 1,
      per_page: DEFAULT_PER_PAGE,
    })
  }

  /// Apply raw `sort`/`order` parameters. An unsupported sort field
  /// falls back to year descending, ignoring the order parameter.
  pub fn apply_sort(&mut self, sort: Option<&str>, order: Option<&str>) {
    match sort {
      None => self.order = SortOrder::parse(order),
      Some(s) => match SortField::parse(s) {
        Some(field) => {
          self.sort = field;
          self.order = SortOrder::parse(order);
        }
        None => {
          self.sort = SortField::Year;
          self.order = SortOrder::Desc;
        }
      },
    }
  }

  /// Does `record` satisfy the text match and both filters?
  pub fn matches(&self, record: &Precedent) -> bool {
    let needle = self.text.to_lowercase();

    let in_text = [
      Some(record.title.as_str()),
      Some(record.description.as_str()),
      record.keywords.as_deref(),
      Some(record.case_number.as_str()),
      record.section.as_deref(),
      record.article.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle));

    if !in_text {
      return false;
    }

    if let Some(year) = self.year
      && record.year != year
    {
      return false;
    }

    if let Some(court) = &self.court
      && !record.court.to_lowercase().contains(&court.to_lowercase())
    {
      return false;
    }

    true
  }

  /// Filter, sort, and paginate `records` into one result page.
  ///
  /// `total` is counted before slicing; out-of-range pages yield an
  /// empty `results` slice, never an error.
  pub fn run(&self, records: &[Precedent]) -> SearchPage {
    let mut hits: Vec<&Precedent> =
      records.iter().filter(|r| self.matches(r)).collect();
    hits.sort_by(|a, b| self.compare(a, b));

    let total = hits.len();
    let per_page = self.per_page.max(1);
    let page = self.page.max(1);
    let pages = total.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(total);
    let results = if start < total {
      hits[start..end].iter().map(|r| (*r).clone()).collect()
    } else {
      Vec::new()
    };

    SearchPage { results, total, page, per_page, pages }
  }

  /// Total ordering over matches: the requested field and direction,
  /// ties broken by id ascending so pagination is stable.
  fn compare(&self, a: &Precedent, b: &Precedent) -> Ordering {
    let primary = match self.sort {
      SortField::Year => a.year.cmp(&b.year),
      SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
      SortField::Court => a.court.to_lowercase().cmp(&b.court.to_lowercase()),
    };
    let directed = match self.order {
      SortOrder::Asc => primary,
      SortOrder::Desc => primary.reverse(),
    };
    directed.then(a.id.cmp(&b.id))
  }
}

/// Trim and collapse runs of whitespace to single spaces.
pub fn normalize(raw: &str) -> String {
  raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ─── Result page ─────────────────────────────────────────────────────────────

/// One page of search results plus paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
  pub results:  Vec<Precedent>,
  /// Count of all matches, before slicing.
  pub total:    usize,
  pub page:     usize,
  pub per_page: usize,
  /// `ceil(total / per_page)`; zero when there are no matches.
  pub pages:    usize,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  fn record(id: i64, title: &str, year: i32, court: &str) -> Precedent {
    Precedent {
      id,
      title: title.to_string(),
      case_number: format!("{year}-CV-{id:03}"),
      year,
      court: court.to_string(),
      description: "A case description.".to_string(),
      keywords: None,
      section: None,
      article: None,
      created_at: Utc::now(),
      updated_at: Utc::now(),
    }
  }

  #[test]
  fn query_shorter_than_two_chars_is_rejected() {
    assert!(matches!(SearchQuery::new(""), Err(Error::QueryTooShort)));
    assert!(matches!(SearchQuery::new("a"), Err(Error::QueryTooShort)));
    assert!(matches!(SearchQuery::new("   a   "), Err(Error::QueryTooShort)));
    assert!(SearchQuery::new("ab").is_ok());
  }

  #[test]
  fn query_text_is_trimmed_and_collapsed() {
    let q = SearchQuery::new("  transfer   of    property ").unwrap();
    assert_eq!(q.text, "transfer of property");
  }

  #[test]
  fn containment_matches_any_searchable_field() {
    let mut r = record(1, "Smith v. Johnson", 2023, "Supreme Court");
    r.description = "Landmark case on contract law.".to_string();
    r.keywords = Some("contract, liability, negligence".to_string());
    r.section = Some("Section 73".to_string());
    r.article = Some("Article 14".to_string());

    for needle in
      ["smith", "CONTRACT", "negligence", "2023-cv", "section 73", "article 14"]
    {
      let q = SearchQuery::new(needle).unwrap();
      assert!(q.matches(&r), "expected {needle:?} to match");
    }

    let q = SearchQuery::new("habeas").unwrap();
    assert!(!q.matches(&r));
  }

  #[test]
  fn containment_is_substring_not_word_boundary() {
    let mut r = record(1, "Transfer of Property Act", 1882, "High Court");
    r.description = "Contract formalities.".to_string();

    // "act" hits both "Act" and "Contract".
    let q = SearchQuery::new("act").unwrap();
    assert!(q.matches(&r));
  }

  #[test]
  fn year_and_court_filters_intersect_with_text_match() {
    let a = record(1, "Alpha case", 1990, "Supreme Court");
    let b = record(2, "Alpha appeal", 2005, "High Court of Delhi");

    let mut q = SearchQuery::new("alpha").unwrap();
    q.year = Some(2005);
    let page = q.run(&[a.clone(), b.clone()]);
    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].id, 2);

    let mut q = SearchQuery::new("alpha").unwrap();
    q.court = Some("delhi".to_string());
    let page = q.run(&[a.clone(), b.clone()]);
    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].id, 2);

    // Both filters AND together.
    let mut q = SearchQuery::new("alpha").unwrap();
    q.year = Some(1990);
    q.court = Some("delhi".to_string());
    assert_eq!(q.run(&[a, b]).total, 0);
  }

  #[test]
  fn default_sort_is_year_descending() {
    let records = vec![
      record(1, "Old case", 1950, "Supreme Court"),
      record(2, "New case", 2020, "Supreme Court"),
      record(3, "Mid case", 1990, "Supreme Court"),
    ];
    let q = SearchQuery::new("case").unwrap();
    let years: Vec<i32> = q.run(&records).results.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2020, 1990, 1950]);
  }

  #[test]
  fn unsupported_sort_falls_back_to_year_descending() {
    let mut q = SearchQuery::new("case").unwrap();
    q.apply_sort(Some("relevance"), Some("asc"));
    assert_eq!(q.sort, SortField::Year);
    assert_eq!(q.order, SortOrder::Desc);
  }

  #[test]
  fn sort_by_title_ascending() {
    let records = vec![
      record(1, "Zeta v. State", 2000, "Supreme Court"),
      record(2, "alpha v. State", 2001, "Supreme Court"),
      record(3, "Mango v. State", 2002, "Supreme Court"),
    ];
    let mut q = SearchQuery::new("state").unwrap();
    q.apply_sort(Some("title"), Some("asc"));
    let ids: Vec<i64> = q.run(&records).results.iter().map(|r| r.id).collect();
    // Case-insensitive: alpha < Mango < Zeta.
    assert_eq!(ids, vec![2, 3, 1]);
  }

  #[test]
  fn pages_is_ceil_of_total_over_per_page() {
    let records: Vec<Precedent> = (1..=45)
      .map(|i| record(i, &format!("Case {i}"), 2000 + i as i32, "High Court"))
      .collect();

    let mut q = SearchQuery::new("case").unwrap();
    q.per_page = 20;
    let page = q.run(&records);
    assert_eq!(page.total, 45);
    assert_eq!(page.pages, 3);

    let empty = q.run(&[]);
    assert_eq!(empty.total, 0);
    assert_eq!(empty.pages, 0);
    assert!(empty.results.is_empty());
  }

  #[test]
  fn pages_concatenate_to_the_full_match_list_exactly_once() {
    let records: Vec<Precedent> = (1..=23)
      .map(|i| record(i, &format!("Case {i}"), 2000, "High Court"))
      .collect();

    let mut q = SearchQuery::new("case").unwrap();
    q.per_page = 7;

    let first = q.run(&records);
    let mut seen: Vec<i64> = Vec::new();
    for p in 1..=first.pages {
      let mut q = q.clone();
      q.page = p;
      let page = q.run(&records);
      seen.extend(page.results.iter().map(|r| r.id));
    }

    // Year ties break by id ascending, so the full list is 1..=23.
    assert_eq!(seen, (1..=23).collect::<Vec<i64>>());
  }

  #[test]
  fn out_of_range_page_returns_empty_slice() {
    let records = vec![record(1, "Only case", 2000, "High Court")];
    let mut q = SearchQuery::new("case").unwrap();
    q.page = 9;
    let page = q.run(&records);
    assert!(page.results.is_empty());
    assert_eq!(page.total, 1);
    assert_eq!(page.pages, 1);
  }
}
