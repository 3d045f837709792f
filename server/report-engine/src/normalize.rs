//! Validate inbound analyze requests into the PropertyInput the generator consumes.

use crate::error::EngineError;
use crate::types::{AnalyzePropertyRequest, PropertyInput};

pub const MIN_YEAR_BUILT: i64 = 1800;
pub const MAX_YEAR_BUILT: i64 = 2100;

/// Missing counts become 0; negative or oversized counts and out-of-range years are rejected.
pub fn normalize(raw: &AnalyzePropertyRequest) -> Result<PropertyInput, EngineError> {
  let bedrooms = count("bedrooms", raw.bedrooms)?;
  let bathrooms = count("bathrooms", raw.bathrooms)?;
  let sqft = count("sqft", raw.sqft)?;

  let year_built = match raw.year_built {
    None | Some(0) => None,
    Some(y) if (MIN_YEAR_BUILT..=MAX_YEAR_BUILT).contains(&y) => Some(y as i32),
    Some(_) => {
      return Err(EngineError::validation(
        "year_built",
        &format!("must be between {} and {}", MIN_YEAR_BUILT, MAX_YEAR_BUILT),
      ))
    }
  };

  Ok(PropertyInput {
    address: raw.address.trim().to_string(),
    bedrooms,
    bathrooms,
    sqft,
    year_built,
  })
}

fn count(field: &str, value: Option<i64>) -> Result<u32, EngineError> {
  let v = value.unwrap_or(0);
  if v < 0 {
    return Err(EngineError::validation(field, "must be >= 0"));
  }
  u32::try_from(v).map_err(|_| EngineError::validation(field, "is too large"))
}
