//! Aggregate counts over the catalogue, grouped by year and by court.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::precedent::Precedent;

#[derive(Debug, Clone, Serialize)]
pub struct YearCount {
  pub year:  i32,
  pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourtCount {
  pub court: String,
  pub count: u64,
}

/// Payload of `GET /stats`.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
  pub total_precedents: u64,
  /// Sorted by year ascending.
  pub by_year:          Vec<YearCount>,
  /// Sorted by court name ascending.
  pub by_court:         Vec<CourtCount>,
}

/// Group a scan in memory. Output order is deterministic.
pub fn compute(records: &[Precedent]) -> Stats {
  let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
  let mut by_court: BTreeMap<String, u64> = BTreeMap::new();

  for record in records {
    *by_year.entry(record.year).or_default() += 1;
    *by_court.entry(record.court.clone()).or_default() += 1;
  }

  Stats {
    total_precedents: records.len() as u64,
    by_year: by_year
      .into_iter()
      .map(|(year, count)| YearCount { year, count })
      .collect(),
    by_court: by_court
      .into_iter()
      .map(|(court, count)| CourtCount { court, count })
      .collect(),
  }
}
