//! Subcommand implementations.

pub mod chore;
pub mod config;
pub mod day;
pub mod history;
pub mod person;
pub mod purge;

use chorewheel_core::{Clock, Config, DayView, Household, JsonStore, SystemClock};
use chrono::NaiveDate;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Loaded household plus configuration for one command invocation.
pub struct Session {
    store: JsonStore,
    pub household: Household,
    pub config: Config,
}

impl Session {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let store = JsonStore::open_default()?;
        let household = store.load()?;
        let config = Config::load()?;
        tracing::debug!(path = %store.path().display(), "session opened");
        Ok(Self {
            store,
            household,
            config,
        })
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.save(&self.household)?;
        Ok(())
    }
}

/// Parse `--date`, defaulting to today in the local time zone.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{raw}' (expected YYYY-MM-DD): {e}").into()),
        None => Ok(SystemClock.today()),
    }
}

pub fn print_day(view: &DayView) {
    let status = if view.confirmed { " (confirmed)" } else { "" };
    println!("{}{status}", view.date);
    if view.available.is_empty() {
        println!("Available: nobody");
    } else {
        println!("Available: {}", view.available.join(", "));
    }

    let width = view.rows.iter().map(|r| r.chore.len()).max().unwrap_or(0);
    for row in &view.rows {
        let person = row.person.as_deref().unwrap_or("Unassigned");
        println!("  {:<width$}  {person}", row.chore);
    }
}
