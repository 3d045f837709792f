//! Property Report Engine — rule-based investment report; no model, no DB, no network.
//!
//! `generate` is the pure core: same property and as-of date, same report. The `normalize`
//! and `listing` modules validate requests at the boundary; the binary wires them to
//! stdin/stdout.

pub mod charts;
pub mod config;
pub mod error;
pub mod listing;
pub mod normalize;
pub mod risk;
pub mod score;
pub mod stream;
pub mod summary;
pub mod types;

use chrono::{Datelike, NaiveDate};

pub use config::Config;
pub use error::EngineError;
pub use listing::Role;
pub use types::{AnalysisReport, AnalyzePropertyRequest, CreateListing, ListingRecord, PropertyInput};

pub const ZONING_NOTES: [&str; 3] = [
  "Verify zoning use aligns with intended occupancy.",
  "Permit required for major structural changes.",
  "Check local parking minimums for multi-unit conversions.",
];

/// Build the report for `input` as of the given date (no I/O, no clock reads).
pub fn generate(input: &PropertyInput, as_of: NaiveDate) -> AnalysisReport {
  let age = score::property_age(input, as_of.year());
  let investment_score = score::compute_investment_score(input, age);
  let rehab_estimate = score::compute_rehab_estimate(input, age);
  let risk_factors = risk::compute_risk_factors(input, age);
  let charts = charts::compute_charts(investment_score, rehab_estimate);
  let summary = summary::compute_summary(input, investment_score, rehab_estimate);

  AnalysisReport {
    summary,
    investment_score,
    rehab_estimate,
    zoning_notes: ZONING_NOTES.iter().map(|s| s.to_string()).collect(),
    risk_factors,
    charts,
  }
}

/// Validate a raw request, then generate.
pub fn analyze(raw: &AnalyzePropertyRequest, as_of: NaiveDate) -> Result<AnalysisReport, EngineError> {
  let input = normalize::normalize(raw)?;
  Ok(generate(&input, as_of))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generate_returns_valid_output_shape() {
    let input = PropertyInput {
      address: "274 Donahue Ave, Lowell, MA".to_string(),
      bedrooms: 3,
      bathrooms: 2,
      sqft: 1400,
      year_built: Some(1985),
    };
    let out = generate(&input, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert!(out.investment_score <= 100);
    assert_eq!(out.zoning_notes.len(), 3);
    assert!(!out.risk_factors.is_empty());
    assert_eq!(out.charts.rehab_breakdown.len(), 3);
    assert!(out.summary.contains("$48,500"));
  }
}
