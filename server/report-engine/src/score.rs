//! Property age, size/room factors, investment score, and rehab estimate.

use crate::types::PropertyInput;

/// Age assumed when the build year is unknown.
pub const UNKNOWN_AGE_YEARS: i64 = 40;

const BASE_SCORE: f64 = 70.0;
const SIZE_WEIGHT: f64 = 15.0;
const ROOM_WEIGHT: f64 = 10.0;
const MAX_AGE_PENALTY: f64 = 15.0;

const REHAB_BASE: f64 = 15_000.0;
const REHAB_PER_YEAR: f64 = 500.0;
const REHAB_PER_SQFT: f64 = 10.0;

/// Years since construction as of `current_year`; never negative.
pub fn property_age(input: &PropertyInput, current_year: i32) -> i64 {
  match input.known_year_built() {
    Some(year) => (i64::from(current_year) - i64::from(year)).max(0),
    None => UNKNOWN_AGE_YEARS,
  }
}

/// 0..=1, saturating at 2000 sqft.
pub fn size_factor(sqft: u32) -> f64 {
  (f64::from(sqft) / 2000.0).min(1.0)
}

/// 0..=1, saturating at six bedrooms plus bathrooms.
pub fn bed_bath_factor(bedrooms: u32, bathrooms: u32) -> f64 {
  ((f64::from(bedrooms) + f64::from(bathrooms)) / 6.0).min(1.0)
}

/// Score 0–100: base 70, bounded size and room bonuses, age penalty capped at 15.
pub fn compute_investment_score(input: &PropertyInput, age: i64) -> u8 {
  let penalty = (age as f64 / 5.0).min(MAX_AGE_PENALTY);
  let raw = BASE_SCORE + SIZE_WEIGHT * size_factor(input.sqft)
    + ROOM_WEIGHT * bed_bath_factor(input.bedrooms, input.bathrooms)
    - penalty;
  raw.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Linear cost model: fixed baseline plus age and size components.
pub fn compute_rehab_estimate(input: &PropertyInput, age: i64) -> i64 {
  let raw = REHAB_BASE + age as f64 * REHAB_PER_YEAR + f64::from(input.sqft) * REHAB_PER_SQFT;
  raw.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  fn property(bedrooms: u32, bathrooms: u32, sqft: u32, year_built: Option<i32>) -> PropertyInput {
    PropertyInput {
      address: "1 Test St".into(),
      bedrooms,
      bathrooms,
      sqft,
      year_built,
    }
  }

  #[test]
  fn age_uses_fallback_when_year_unknown() {
    assert_eq!(property_age(&property(3, 2, 1400, None), 2024), 40);
    assert_eq!(property_age(&property(3, 2, 1400, Some(0)), 2024), 40);
  }

  #[test]
  fn age_never_negative_for_future_build_year() {
    assert_eq!(property_age(&property(3, 2, 1400, Some(2030)), 2024), 0);
  }

  #[test]
  fn factors_saturate_at_one() {
    assert_relative_eq!(size_factor(1400), 0.7);
    assert_relative_eq!(size_factor(10_000), 1.0);
    assert_relative_eq!(bed_bath_factor(3, 2), 5.0 / 6.0);
    assert_relative_eq!(bed_bath_factor(50, 50), 1.0);
    assert_relative_eq!(size_factor(0), 0.0);
  }

  #[test]
  fn score_for_typical_home() {
    // 70 + 10.5 + 8.33 - 7.8 = 81.03
    let p = property(3, 2, 1400, Some(1985));
    assert_eq!(compute_investment_score(&p, 39), 81);
  }

  #[test]
  fn age_penalty_is_capped() {
    let p = property(0, 0, 0, Some(1850));
    assert_eq!(compute_investment_score(&p, 174), 55);
    assert_eq!(compute_investment_score(&p, 75), 55);
  }

  #[test]
  fn score_rounds_half_to_even() {
    let p = property(0, 0, 0, None);
    assert_eq!(compute_investment_score(&p, 38), 62);
    assert_eq!(compute_investment_score(&p, 37), 63);
    // 70 + 4.5 = 74.5
    assert_eq!(compute_investment_score(&property(0, 0, 600, None), 0), 74);
    // 70 + 7.5 = 77.5
    assert_eq!(compute_investment_score(&property(0, 0, 1000, None), 0), 78);
  }

  #[test]
  fn rehab_estimate_is_linear() {
    let p = property(3, 2, 1400, Some(1985));
    assert_eq!(compute_rehab_estimate(&p, 39), 48_500);
    assert_eq!(compute_rehab_estimate(&property(0, 0, 0, None), 0), 15_000);
  }
}
