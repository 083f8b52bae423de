use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chorewheel", version, about = "Fair daily chore rotation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// People management
    Person {
        #[command(subcommand)]
        action: commands::person::PersonAction,
    },
    /// Chore list management
    Chore {
        #[command(subcommand)]
        action: commands::chore::ChoreAction,
    },
    /// Availability, generation and confirmation for a day
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Show past assignments
    History(commands::history::HistoryArgs),
    /// Delete day records older than the retention window
    Purge(commands::purge::PurgeArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Person { action } => commands::person::run(action),
        Commands::Chore { action } => commands::chore::run(action),
        Commands::Day { action } => commands::day::run(action),
        Commands::History(args) => commands::history::run(args),
        Commands::Purge(args) => commands::purge::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
