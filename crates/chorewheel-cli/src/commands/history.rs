//! Read-only browsing of past days.

use clap::Args;
use chorewheel_core::{history_view, Clock, SystemClock};

use super::{print_day, resolve_date, CommandResult, Session};

#[derive(Args)]
pub struct HistoryArgs {
    /// Number of recorded days to show
    #[arg(long, default_value_t = 7)]
    count: usize,
    /// Show days strictly before this date (default: tomorrow, i.e. include today)
    #[arg(long)]
    before: Option<String>,
    #[arg(long)]
    json: bool,
}

pub fn run(args: HistoryArgs) -> CommandResult {
    let session = Session::open()?;
    let before = match args.before.as_deref() {
        Some(raw) => resolve_date(Some(raw))?,
        None => SystemClock
            .today()
            .succ_opt()
            .ok_or("date out of range")?,
    };

    let views = history_view(&session.household, before, args.count);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else if views.is_empty() {
        println!("No history");
    } else {
        for view in &views {
            print_day(view);
            println!();
        }
    }
    Ok(())
}
