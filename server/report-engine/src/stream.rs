//! Request/response plumbing for the binary, over any reader and writer.
//!
//! Each function writes exactly one JSON value per request: the result, or an
//! `ErrorOutput` when the request is rejected. The `bool` results tell the caller whether
//! the request was accepted so it can pick an exit status.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::listing::{self, Role};
use crate::types::{AnalyzePropertyRequest, CreateListing, ErrorOutput};

/// Counts from a JSON-lines run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
  pub ok: usize,
  pub rejected: usize,
}

/// Process exit status: 0 when the request was accepted, 1 otherwise.
pub fn exit_status(accepted: bool) -> u8 {
  if accepted {
    0
  } else {
    1
  }
}

/// One analyze request in `raw`; writes a report or an error object.
pub fn analyze_one<W: Write>(raw: &str, as_of: NaiveDate, out: &mut W) -> io::Result<bool> {
  let outcome = serde_json::from_str::<AnalyzePropertyRequest>(raw)
    .map_err(EngineError::from)
    .and_then(|req| crate::analyze(&req, as_of));

  match outcome {
    Ok(report) => {
      debug!(score = report.investment_score, rehab = report.rehab_estimate, "report generated");
      serde_json::to_writer(&mut *out, &report)?;
      Ok(true)
    }
    Err(e) => {
      warn!(error = %e, "analyze: request rejected");
      serde_json::to_writer(&mut *out, &ErrorOutput::from(&e))?;
      Ok(false)
    }
  }
}

/// JSON lines: blank lines are skipped, every other line yields one output line, and
/// rejected lines do not stop the run.
pub fn analyze_lines<R: BufRead, W: Write>(input: R, as_of: NaiveDate, out: &mut W) -> io::Result<LineStats> {
  let mut stats = LineStats::default();

  for (idx, line) in input.lines().enumerate() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    if analyze_one(trimmed, as_of, out)? {
      stats.ok += 1;
    } else {
      debug!(line = idx + 1, "analyze: line rejected");
      stats.rejected += 1;
    }
    writeln!(out)?;
  }

  Ok(stats)
}

/// One create-listing request in `raw` for the given caller.
pub fn listing_one<W: Write>(raw: &str, role: Role, owner_id: &str, out: &mut W) -> io::Result<bool> {
  let outcome = serde_json::from_str::<CreateListing>(raw)
    .map_err(EngineError::from)
    .and_then(|req| listing::create_listing(role, owner_id, &req));

  match outcome {
    Ok(record) => {
      serde_json::to_writer(&mut *out, &record)?;
      Ok(true)
    }
    Err(e) => {
      warn!(error = %e, "listing: request rejected");
      serde_json::to_writer(&mut *out, &ErrorOutput::from(&e))?;
      Ok(false)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::Value;

  fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
  }

  fn output_lines(buf: &[u8]) -> Vec<Value> {
    String::from_utf8(buf.to_vec())
      .unwrap()
      .lines()
      .map(|l| serde_json::from_str(l).unwrap())
      .collect()
  }

  #[test]
  fn lines_mode_keeps_going_after_bad_lines() {
    let input = concat!(
      "{\"address\":\"a\",\"bathrooms\":-1}\n",
      "\n",
      "   \n",
      "{\"address\":\"b\"}\n",
      "not json\n",
    );
    let mut out = Vec::new();
    let stats = analyze_lines(input.as_bytes(), as_of(), &mut out).unwrap();

    assert_eq!(stats, LineStats { ok: 1, rejected: 2 });
    let lines = output_lines(&out);
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0]["error"], true);
    assert_eq!(lines[0]["field"], "bathrooms");

    assert_eq!(lines[1]["rehab_estimate"], 35_000);
    assert!(lines[1]["summary"].as_str().unwrap().starts_with("b: "));

    assert_eq!(lines[2]["error"], true);
    assert!(lines[2].get("field").is_none());
    assert!(lines[2]["message"].as_str().unwrap().starts_with("json:"));
  }

  #[test]
  fn lines_mode_empty_input_writes_nothing() {
    let mut out = Vec::new();
    let stats = analyze_lines("\n\n".as_bytes(), as_of(), &mut out).unwrap();
    assert_eq!(stats, LineStats::default());
    assert!(out.is_empty());
  }

  #[test]
  fn single_request_accepted_and_rejected() {
    let mut out = Vec::new();
    let ok = analyze_one(r#"{"address":"x","sqft":1400,"bathrooms":2}"#, as_of(), &mut out).unwrap();
    assert!(ok);
    assert_eq!(exit_status(ok), 0);
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert!(v["investment_score"].is_u64());

    let mut out = Vec::new();
    let ok = analyze_one(r#"{"address":"x","year_built":1700}"#, as_of(), &mut out).unwrap();
    assert!(!ok);
    assert_eq!(exit_status(ok), 1);
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["field"], "year_built");
  }

  #[test]
  fn listing_rejected_for_buyer() {
    let raw = r#"{"address":"12 Main St","city":"Lowell","state":"MA","zip":"01852","price":1}"#;

    let mut out = Vec::new();
    let ok = listing_one(raw, Role::Buyer, "user-1", &mut out).unwrap();
    assert_eq!(exit_status(ok), 1);
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert!(v["message"].as_str().unwrap().starts_with("forbidden"));

    let mut out = Vec::new();
    let ok = listing_one(raw, Role::Agent, "user-1", &mut out).unwrap();
    assert_eq!(exit_status(ok), 0);
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["owner_id"], "user-1");
  }
}
