//! Boundary configuration with sane defaults, overridable from the environment.

use chrono::{NaiveDate, Utc};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

pub const ENV_AS_OF: &str = "REPORT_ENGINE_AS_OF";
pub const ENV_LOG_JSON: &str = "REPORT_ENGINE_LOG_JSON";
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "report_engine=info,warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Date reports are computed as of. `None` means today (UTC).
  pub as_of: Option<NaiveDate>,
  /// Emit JSON log lines on stderr instead of human-readable ones.
  pub log_json: bool,
  /// `tracing_subscriber::EnvFilter` directive.
  pub log_filter: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      as_of: None,
      log_json: false,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

/// Values given on the command line. A set field wins over the environment, and the
/// matching environment key is not parsed at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
  pub as_of: Option<NaiveDate>,
  pub log_json: Option<bool>,
}

impl Config {
  pub fn from_env() -> Result<Self, EngineError> {
    Self::from_env_with(&Overrides::default())
  }

  pub fn from_env_with(overrides: &Overrides) -> Result<Self, EngineError> {
    Self::from_lookup_with(|key| std::env::var(key).ok(), overrides)
  }

  /// Build from any key lookup; unset or blank keys keep their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
  where
    F: Fn(&str) -> Option<String>,
  {
    Self::from_lookup_with(lookup, &Overrides::default())
  }

  pub fn from_lookup_with<F>(lookup: F, overrides: &Overrides) -> Result<Self, EngineError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let mut cfg = Self::default();

    cfg.as_of = match overrides.as_of {
      Some(d) => Some(d),
      None => get(ENV_AS_OF).map(|v| parse_as_of(&v)).transpose()?,
    };
    cfg.log_json = match overrides.log_json {
      Some(b) => b,
      None => match get(ENV_LOG_JSON) {
        Some(v) => parse_bool(&v)
          .ok_or_else(|| EngineError::config(format!("{ENV_LOG_JSON}: expected 1|0|true|false|yes|no")))?,
        None => false,
      },
    };
    if let Some(v) = get(ENV_LOG_FILTER) {
      EnvFilter::try_new(&v).map_err(|e| EngineError::config(format!("{ENV_LOG_FILTER} '{v}': {e}")))?;
      cfg.log_filter = v;
    }
    Ok(cfg)
  }

  /// Filter for the tracing subscriber; `log_filter` was checked when the config was built.
  pub fn env_filter(&self) -> Result<EnvFilter, EngineError> {
    EnvFilter::try_new(&self.log_filter)
      .map_err(|e| EngineError::config(format!("log filter '{}': {e}", self.log_filter)))
  }

  /// The injected as-of date, or today's UTC date.
  pub fn as_of_or_today(&self) -> NaiveDate {
    self.as_of.unwrap_or_else(|| Utc::now().date_naive())
  }
}

pub fn parse_as_of(s: &str) -> Result<NaiveDate, EngineError> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| EngineError::config(format!("as-of date '{s}': expected YYYY-MM-DD: {e}")))
}

fn parse_bool(s: &str) -> Option<bool> {
  match s.to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" => Some(true),
    "0" | "false" | "no" => Some(false),
    _ => None,
  }
}
