//! Chart payloads: price per sqft comparison and rehab cost breakdown.

use crate::types::{Charts, PricePerSqft, Quartiles, RehabCategory, RehabLineItem};

const SUBJECT_BASE_PRICE_PER_SQFT: i64 = 325;
const MARKET_AVG_PRICE_PER_SQFT: i64 = 350;
const NEIGHBORHOOD_QUARTILES: Quartiles = Quartiles {
  p25: 300,
  p50: 340,
  p75: 390,
};

const BREAKDOWN_ORDER: [RehabCategory; 3] = [
  RehabCategory::Exterior,
  RehabCategory::MechanicalAndSystems,
  RehabCategory::Interior,
];

pub fn compute_charts(investment_score: u8, rehab_estimate: i64) -> Charts {
  Charts {
    price_per_sqft: price_per_sqft(investment_score),
    rehab_breakdown: rehab_breakdown(rehab_estimate),
  }
}

/// Subject price is centered at 325 and shifted by the score's distance from 70.
fn price_per_sqft(investment_score: u8) -> PricePerSqft {
  PricePerSqft {
    subject: SUBJECT_BASE_PRICE_PER_SQFT + (i64::from(investment_score) - 70),
    market_avg: MARKET_AVG_PRICE_PER_SQFT,
    neighborhood_quartiles: NEIGHBORHOOD_QUARTILES,
  }
}

/// Each category is rounded on its own; the sum may drift from the total by one.
fn rehab_breakdown(rehab_estimate: i64) -> Vec<RehabLineItem> {
  BREAKDOWN_ORDER
    .iter()
    .map(|&category| RehabLineItem {
      category,
      estimate: (rehab_estimate as f64 * category.fraction()).round_ties_even() as i64,
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn subject_price_tracks_score() {
    assert_eq!(price_per_sqft(70).subject, 325);
    assert_eq!(price_per_sqft(81).subject, 336);
    assert_eq!(price_per_sqft(55).subject, 310);
    assert_eq!(price_per_sqft(81).market_avg, 350);
  }

  #[test]
  fn breakdown_splits_rehab_in_order() {
    let items = rehab_breakdown(48_500);
    let got: Vec<(RehabCategory, i64)> = items.iter().map(|i| (i.category, i.estimate)).collect();
    assert_eq!(
      got,
      vec![
        (RehabCategory::Exterior, 16_975),
        (RehabCategory::MechanicalAndSystems, 14_550),
        (RehabCategory::Interior, 16_975),
      ]
    );
  }

  #[test]
  fn breakdown_drift_is_not_reconciled() {
    let items = rehab_breakdown(15_010);
    let total: i64 = items.iter().map(|i| i.estimate).sum();
    assert!((total - 15_010).abs() <= 1);
  }
}
