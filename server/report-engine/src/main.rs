//! Binary entrypoint: JSON requests on stdin, JSON reports (or errors) on stdout.
//!
//! `analyze` reads one request object, or JSON lines with `--lines` (one output line per
//! non-blank input line). `listing` reads one create-listing object and checks the role.
//! Logs go to stderr.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report_engine::config::{self, Overrides};
use report_engine::{stream, Config, EngineError, Role};

#[derive(Parser, Debug)]
#[command(name = "report-engine", version, about = "Property investment report engine")]
struct Cli {
  #[arg(long, global = true, value_parser = parse_date, help = "Compute reports as of this date (YYYY-MM-DD)")]
  as_of: Option<NaiveDate>,
  #[arg(long, global = true, help = "Emit JSON log lines on stderr")]
  log_json: bool,
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Generate an investment report for a property.
  Analyze {
    #[arg(long, help = "Read JSON lines; one report or error line per request")]
    lines: bool,
  },
  /// Validate a create-listing request for the given role.
  Listing {
    #[arg(long, value_enum)]
    role: Role,
    #[arg(long)]
    owner_id: String,
  },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
  config::parse_as_of(s).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let overrides = Overrides {
    as_of: cli.as_of,
    log_json: cli.log_json.then_some(true),
  };
  let cfg = match Config::from_env_with(&overrides) {
    Ok(c) => c,
    Err(e) => {
      let _ = writeln!(io::stderr(), "report-engine error: {}", e);
      return ExitCode::FAILURE;
    }
  };
  if let Err(e) = init_tracing(&cfg) {
    let _ = writeln!(io::stderr(), "report-engine error: {}", e);
    return ExitCode::FAILURE;
  }

  let result = match cli.command {
    Commands::Analyze { lines: false } => run_analyze(&cfg),
    Commands::Analyze { lines: true } => run_analyze_lines(&cfg),
    Commands::Listing { role, owner_id } => run_listing(role, &owner_id),
  };

  match result {
    Ok(accepted) => ExitCode::from(stream::exit_status(accepted)),
    Err(e) => {
      let _ = writeln!(io::stderr(), "report-engine error: {}", e);
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(cfg: &Config) -> Result<(), EngineError> {
  let registry = tracing_subscriber::registry().with(cfg.env_filter()?);
  if cfg.log_json {
    registry
      .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
      .init();
  } else {
    registry
      .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
      .init();
  }
  Ok(())
}

/// Single request. Returns `Ok(false)` when the request was rejected.
fn run_analyze(cfg: &Config) -> io::Result<bool> {
  let as_of = cfg.as_of_or_today();
  info!(%as_of, "analyze: single request");

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let accepted = stream::analyze_one(&raw, as_of, &mut out)?;
  out.flush()?;
  Ok(accepted)
}

fn run_analyze_lines(cfg: &Config) -> io::Result<bool> {
  let as_of = cfg.as_of_or_today();
  info!(%as_of, "analyze: json lines");

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let stats = stream::analyze_lines(stdin.lock(), as_of, &mut out)?;
  out.flush()?;
  info!(ok = stats.ok, rejected = stats.rejected, "analyze: done");
  Ok(true)
}

fn run_listing(role: Role, owner_id: &str) -> io::Result<bool> {
  info!(role = role.as_str(), "listing: validate");

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let accepted = stream::listing_one(&raw, role, owner_id, &mut out)?;
  out.flush()?;
  Ok(accepted)
}
