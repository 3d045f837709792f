//! Input/output types for the report engine (JSON contract with the API server).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Analyze-property request as received. Numeric fields are optional and signed so the
/// normalizer can report which field is out of range. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzePropertyRequest {
  pub address: String,
  #[serde(default)]
  pub bedrooms: Option<i64>,
  #[serde(default)]
  pub bathrooms: Option<i64>,
  #[serde(default)]
  pub sqft: Option<i64>,
  #[serde(default)]
  pub year_built: Option<i64>,
}

/// Create-listing request as received.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListing {
  pub address: String,
  pub city: String,
  pub state: String,
  pub zip: String,
  pub price: i64,
}

// ---------------------------------------------------------------------------
// Validated input for the generator
// ---------------------------------------------------------------------------

/// Property description the generator works on. Missing counts are already 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyInput {
  pub address: String,
  pub bedrooms: u32,
  pub bathrooms: u32,
  pub sqft: u32,
  /// `None` and `Some(0)` both mean "unknown".
  pub year_built: Option<i32>,
}

impl PropertyInput {
  /// Build year, with 0 folded into `None`.
  pub fn known_year_built(&self) -> Option<i32> {
    self.year_built.filter(|&y| y != 0)
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
  pub summary: String,
  pub investment_score: u8,
  pub rehab_estimate: i64,
  pub zoning_notes: Vec<String>,
  pub risk_factors: Vec<String>,
  pub charts: Charts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charts {
  pub price_per_sqft: PricePerSqft,
  pub rehab_breakdown: Vec<RehabLineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePerSqft {
  pub subject: i64,
  pub market_avg: i64,
  pub neighborhood_quartiles: Quartiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quartiles {
  pub p25: i64,
  pub p50: i64,
  pub p75: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RehabCategory {
  Exterior,
  MechanicalAndSystems,
  Interior,
}

impl RehabCategory {
  /// Share of the total rehab estimate assigned to this category.
  pub fn fraction(self) -> f64 {
    match self {
      Self::Exterior => 0.35,
      Self::MechanicalAndSystems => 0.30,
      Self::Interior => 0.35,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RehabLineItem {
  pub category: RehabCategory,
  pub estimate: i64,
}

/// Row shape handed to the listing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
  pub owner_id: String,
  pub address: String,
  pub city: String,
  pub state: String,
  pub zip: String,
  pub price: i64,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for rejected input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&crate::error::EngineError> for ErrorOutput {
  fn from(e: &crate::error::EngineError) -> Self {
    match e {
      crate::error::EngineError::Validation { field, reason } => {
        ErrorOutput::new(reason.clone()).with_field(field.clone())
      }
      _ => ErrorOutput::new(e.to_string()),
    }
  }
}
