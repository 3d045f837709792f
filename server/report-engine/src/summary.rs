//! Human-readable synopsis shown at the top of a report.

use crate::types::PropertyInput;

const ADDRESS_FALLBACK: &str = "Subject property";

pub fn compute_summary(input: &PropertyInput, investment_score: u8, rehab_estimate: i64) -> String {
  let address = match input.address.trim() {
    "" => ADDRESS_FALLBACK,
    a => a,
  };
  let built = input
    .known_year_built()
    .map(|y| y.to_string())
    .unwrap_or_else(|| "N/A".to_string());

  format!(
    "{}: approx. {} sqft, {} bd / {} ba, built {}. Investment score: {}/100. Estimated rehab: ${}.",
    address,
    input.sqft,
    input.bedrooms,
    input.bathrooms,
    built,
    investment_score,
    with_thousands(rehab_estimate)
  )
}

/// `48500` -> `"48,500"`.
pub fn with_thousands(n: i64) -> String {
  let digits = n.unsigned_abs().to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
  if n < 0 {
    out.push('-');
  }
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn thousands_separators() {
    assert_eq!(with_thousands(0), "0");
    assert_eq!(with_thousands(999), "999");
    assert_eq!(with_thousands(48_500), "48,500");
    assert_eq!(with_thousands(1_234_567), "1,234,567");
    assert_eq!(with_thousands(-15_000), "-15,000");
  }

  #[test]
  fn summary_interpolates_fields() {
    let p = PropertyInput {
      address: "274 Donahue Ave, Lowell, MA".into(),
      bedrooms: 3,
      bathrooms: 2,
      sqft: 1400,
      year_built: Some(1985),
    };
    assert_eq!(
      compute_summary(&p, 81, 48_500),
      "274 Donahue Ave, Lowell, MA: approx. 1400 sqft, 3 bd / 2 ba, built 1985. \
       Investment score: 81/100. Estimated rehab: $48,500."
    );
  }

  #[test]
  fn blank_address_and_unknown_year_fall_back() {
    let p = PropertyInput {
      address: "   ".into(),
      ..Default::default()
    };
    let s = compute_summary(&p, 62, 35_000);
    assert!(s.starts_with("Subject property: "));
    assert!(s.contains("built N/A."));
  }
}
