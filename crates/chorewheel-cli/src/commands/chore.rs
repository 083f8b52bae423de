//! Chore list commands for CLI.
//!
//! The list order is the allocation priority: earlier chores pick first.

use clap::Subcommand;

use super::{CommandResult, Session};

#[derive(Subcommand)]
pub enum ChoreAction {
    /// Add a chore at the end of the list
    Add {
        /// Chore name, unique ignoring case
        name: String,
    },
    /// Rename a chore
    Rename {
        /// Current name or id
        chore: String,
        /// New name
        name: String,
    },
    /// Remove a chore and drop it from every stored day
    Remove {
        /// Name or id
        chore: String,
    },
    /// Move a chore to a 1-based position in the priority order
    Move {
        /// Name or id
        chore: String,
        /// New position, 1 is first
        position: usize,
    },
    /// List chores in priority order
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ChoreAction) -> CommandResult {
    let mut session = Session::open()?;

    match action {
        ChoreAction::Add { name } => {
            let id = session.household.add_chore(&name)?;
            session.save()?;
            println!("Chore added: {id}");
        }
        ChoreAction::Rename { chore, name } => {
            let id = session.household.find_chore(&chore)?.id.clone();
            session.household.rename_chore(&id, &name)?;
            session.save()?;
            println!("ok");
        }
        ChoreAction::Remove { chore } => {
            let id = session.household.find_chore(&chore)?.id.clone();
            let removed = session.household.remove_chore(&id)?;
            session.save()?;
            println!("Chore removed: {}", removed.name);
        }
        ChoreAction::Move { chore, position } => {
            if position == 0 {
                return Err("position starts at 1".into());
            }
            let id = session.household.find_chore(&chore)?.id.clone();
            session.household.move_chore(&id, position - 1)?;
            session.save()?;
            println!("ok");
        }
        ChoreAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.household.chores)?);
            } else {
                for (i, chore) in session.household.chores.iter().enumerate() {
                    println!("{}. {}  {}", i + 1, chore.name, chore.id);
                }
            }
        }
    }
    Ok(())
}
