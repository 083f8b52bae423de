//! Day commands: availability, generation, confirmation, manual edits.

use clap::Subcommand;
use chorewheel_core::{
    assign_manually, confirm, day_view, is_expired, normalize, purge, set_availability, Allocator,
    Clock, ConfirmOutcome, PcgSource, SystemClock, ValidationError,
};

use super::{print_day, resolve_date, CommandResult, Session};

#[derive(Subcommand)]
pub enum DayAction {
    /// Show a day's availability and assignments
    Show {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Mark people available
    Available {
        /// Names or ids
        #[arg(required = true)]
        people: Vec<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Mark people unavailable
    Unavailable {
        /// Names or ids
        #[arg(required = true)]
        people: Vec<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Assign the day's chores
    Generate {
        #[arg(long)]
        date: Option<String>,
        /// Random seed for a reproducible draw (overrides config)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Lock the day's assignments
    Confirm {
        #[arg(long)]
        date: Option<String>,
    },
    /// Set a chore's assignee by hand; omit the person to clear it
    Assign {
        /// Chore name or id
        chore: String,
        /// Person name or id
        person: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: DayAction) -> CommandResult {
    let mut session = Session::open()?;

    match action {
        DayAction::Show { date, json } => {
            let date = resolve_date(date.as_deref())?;
            normalize(&mut session.household, date);
            session.save()?;
            if let Some(view) = day_view(&session.household, date) {
                if json {
                    println!("{}", serde_json::to_string_pretty(&view)?);
                } else {
                    print_day(&view);
                }
            }
        }
        DayAction::Available { people, date } => {
            set_people(&mut session, &people, date.as_deref(), true)?;
        }
        DayAction::Unavailable { people, date } => {
            set_people(&mut session, &people, date.as_deref(), false)?;
        }
        DayAction::Generate { date, seed, json } => {
            let date = resolve_date(date.as_deref())?;
            let retention = &session.config.retention;
            let now = SystemClock.today();
            // A day outside the window would be swept right after generation.
            if retention.purge_on_generate && !is_expired(date, retention.days, now) {
                purge(&mut session.household, retention.days, now);
            }

            let mut rng = PcgSource::new(seed.or(session.config.random.seed));
            let allocator = Allocator::with_rules(session.config.rules);
            let report = allocator.generate(&mut session.household, date, &mut rng);
            session.save()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for warning in &report.warnings {
                    println!("warning: {warning}");
                }
                if let Some(view) = day_view(&session.household, date) {
                    print_day(&view);
                }
            }
        }
        DayAction::Confirm { date } => {
            let date = resolve_date(date.as_deref())?;
            match confirm(&mut session.household, date) {
                ConfirmOutcome::Confirmed => {
                    session.save()?;
                    println!("Confirmed {date}");
                }
                ConfirmOutcome::AlreadyConfirmed => println!("{date} was already confirmed"),
                ConfirmOutcome::NoRecord => return Err(ValidationError::NoRecord { date }.into()),
            }
        }
        DayAction::Assign {
            chore,
            person,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let chore = session.household.find_chore(&chore)?.id.clone();
            let person = match person {
                Some(token) => Some(session.household.find_person(&token)?.id.clone()),
                None => None,
            };
            assign_manually(&mut session.household, date, &chore, person.as_ref())?;
            session.save()?;
            if let Some(view) = day_view(&session.household, date) {
                print_day(&view);
            }
        }
    }
    Ok(())
}

fn set_people(
    session: &mut Session,
    tokens: &[String],
    date: Option<&str>,
    available: bool,
) -> CommandResult {
    let date = resolve_date(date)?;
    let ids = tokens
        .iter()
        .map(|t| session.household.find_person(t).map(|p| p.id.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    for id in &ids {
        set_availability(&mut session.household, date, id, available)?;
    }
    session.save()?;
    if let Some(view) = day_view(&session.household, date) {
        print_day(&view);
    }
    Ok(())
}
