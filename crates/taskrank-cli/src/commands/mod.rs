pub mod analyze;
pub mod config;
pub mod strategy;
pub mod task;

use chrono::{Local, NaiveDate};
use taskrank_core::task::DATE_FORMAT;
use taskrank_core::{Config, Session};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Load the session, seeding a brand new one with the configured default strategy.
pub fn load_session(config: &Config) -> Result<Session, Box<dyn std::error::Error>> {
    let path = Session::path()?;
    tracing::debug!(path = %path.display(), "loading session");
    if !path.exists() {
        return Ok(Session {
            strategy: config.analysis.default_strategy,
            ..Session::default()
        });
    }
    Ok(Session::load_from(&path)?)
}

/// `--date` value, or today's local date.
pub fn reference_date(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}").into()),
        None => Ok(Local::now().date_naive()),
    }
}
