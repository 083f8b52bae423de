//! People management commands for CLI.

use clap::Subcommand;

use super::{CommandResult, Session};

#[derive(Subcommand)]
pub enum PersonAction {
    /// Add a person
    Add {
        /// Display name, unique ignoring case
        name: String,
    },
    /// Rename a person
    Rename {
        /// Current name or id
        person: String,
        /// New name
        name: String,
    },
    /// Remove a person from the roster and every stored day
    Remove {
        /// Name or id
        person: String,
    },
    /// List people
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PersonAction) -> CommandResult {
    let mut session = Session::open()?;

    match action {
        PersonAction::Add { name } => {
            let id = session.household.add_person(&name)?;
            session.save()?;
            println!("Person added: {id}");
        }
        PersonAction::Rename { person, name } => {
            let id = session.household.find_person(&person)?.id.clone();
            session.household.rename_person(&id, &name)?;
            session.save()?;
            println!("ok");
        }
        PersonAction::Remove { person } => {
            let id = session.household.find_person(&person)?.id.clone();
            let removed = session.household.remove_person(&id)?;
            session.save()?;
            println!("Person removed: {}", removed.name);
        }
        PersonAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.household.people)?);
            } else {
                for person in &session.household.people {
                    println!("{}  {}", person.id, person.name);
                }
            }
        }
    }
    Ok(())
}
