use clap::Args;
use chorewheel_core::{purge, Clock, SystemClock};

use super::{CommandResult, Session};

#[derive(Args)]
pub struct PurgeArgs {
    /// Retention window in days (default: config retention.days)
    #[arg(long)]
    days: Option<u32>,
}

pub fn run(args: PurgeArgs) -> CommandResult {
    let mut session = Session::open()?;
    let days = args.days.unwrap_or(session.config.retention.days);
    let removed = purge(&mut session.household, days, SystemClock.today());
    if removed > 0 {
        session.save()?;
    }
    println!("Removed {removed} day record(s) older than {days} days");
    Ok(())
}
