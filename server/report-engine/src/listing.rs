//! Account roles and the create-listing gate.
//!
//! Only agents and sellers may create listings. The listing store enforces ownership on
//! its side as well; this module shapes and checks the row before it gets there.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{CreateListing, ListingRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Buyer,
  Seller,
  Agent,
  Investor,
}

impl Role {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Buyer => "buyer",
      Self::Seller => "seller",
      Self::Agent => "agent",
      Self::Investor => "investor",
    }
  }

  pub fn can_create_listings(self) -> bool {
    matches!(self, Self::Agent | Self::Seller)
  }
}

pub fn authorize(role: Role) -> Result<(), EngineError> {
  if role.can_create_listings() {
    Ok(())
  } else {
    Err(EngineError::Forbidden {
      role: role.as_str().to_string(),
    })
  }
}

/// Trim and length-check each field; state is upper-cased.
pub fn validate_listing(raw: &CreateListing, owner_id: &str) -> Result<ListingRecord, EngineError> {
  let owner_id = owner_id.trim();
  if owner_id.is_empty() {
    return Err(EngineError::validation("owner_id", "must not be empty"));
  }

  let address = raw.address.trim();
  if address.chars().count() < 3 {
    return Err(EngineError::validation("address", "must be at least 3 characters"));
  }
  let city = raw.city.trim();
  if city.chars().count() < 2 {
    return Err(EngineError::validation("city", "must be at least 2 characters"));
  }
  let state = raw.state.trim();
  if state.chars().count() != 2 {
    return Err(EngineError::validation("state", "must be exactly 2 characters"));
  }
  let zip = raw.zip.trim();
  if !(5..=10).contains(&zip.chars().count()) {
    return Err(EngineError::validation("zip", "must be 5 to 10 characters"));
  }
  if raw.price <= 0 {
    return Err(EngineError::validation("price", "must be > 0"));
  }

  Ok(ListingRecord {
    owner_id: owner_id.to_string(),
    address: address.to_string(),
    city: city.to_string(),
    state: state.to_ascii_uppercase(),
    zip: zip.to_string(),
    price: raw.price,
  })
}

/// Role gate first, then field validation.
pub fn create_listing(role: Role, owner_id: &str, raw: &CreateListing) -> Result<ListingRecord, EngineError> {
  authorize(role)?;
  validate_listing(raw, owner_id)
}
