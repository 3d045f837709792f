//! Risk factors derived from property age, size, bathroom count, and build year.

use crate::types::PropertyInput;

pub const AGING_SYSTEMS: &str =
  "Likely has original plumbing and electrical in sections; the property is older than 50 years.";
pub const HIGH_CARRYING_COST: &str = "High living costs due to the size of the property.";
pub const FEW_BATHROOMS: &str = "Below market for number of bathrooms relative to the area.";
pub const LEAD_PAINT: &str = "Built before 1978; there is a risk of lead paint.";
pub const NO_MAJOR_RISKS: &str =
  "No major immediate risks identified; please validate with an inspection.";

/// Checks run in a fixed order so output ordering is reproducible. Never empty.
pub fn compute_risk_factors(input: &PropertyInput, age: i64) -> Vec<String> {
  let mut out = Vec::new();
  if age > 50 {
    out.push(AGING_SYSTEMS.to_string());
  }
  if input.sqft > 2500 {
    out.push(HIGH_CARRYING_COST.to_string());
  }
  if input.bathrooms < 2 {
    out.push(FEW_BATHROOMS.to_string());
  }
  if input.known_year_built().is_some_and(|y| y < 1978) {
    out.push(LEAD_PAINT.to_string());
  }
  if out.is_empty() {
    out.push(NO_MAJOR_RISKS.to_string());
  }
  out
}
