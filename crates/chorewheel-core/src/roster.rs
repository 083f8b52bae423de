//! People and chore list management.
//!
//! Names are unique case-insensitively within their own collection.
//! Deleting an entry cascades through every stored day so no record keeps
//! pointing at it.

use crate::error::ValidationError;
use crate::model::{Chore, ChoreId, Household, Person, PersonId};

const PERSON: &str = "person";
const CHORE: &str = "chore";

fn clean_name(kind: &'static str, name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName { kind });
    }
    Ok(name.to_string())
}

fn name_taken<'a>(
    mut names: impl Iterator<Item = (&'a str, &'a str)>,
    name: &str,
    except_id: Option<&str>,
) -> bool {
    let folded = name.to_lowercase();
    names.any(|(id, existing)| Some(id) != except_id && existing.to_lowercase() == folded)
}

impl Household {
    /// Add a person and return the new id.
    pub fn add_person(&mut self, name: &str) -> Result<PersonId, ValidationError> {
        let name = clean_name(PERSON, name)?;
        if name_taken(self.person_names(), &name, None) {
            return Err(ValidationError::DuplicateName { kind: PERSON, name });
        }
        let id = PersonId::generate();
        tracing::info!(person = %id, %name, "person added");
        self.people.push(Person { id: id.clone(), name });
        Ok(id)
    }

    pub fn rename_person(&mut self, id: &PersonId, name: &str) -> Result<(), ValidationError> {
        let name = clean_name(PERSON, name)?;
        if name_taken(self.person_names(), &name, Some(id.as_str())) {
            return Err(ValidationError::DuplicateName { kind: PERSON, name });
        }
        let person = self
            .people
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| not_found(PERSON, id.as_str()))?;
        person.name = name;
        Ok(())
    }

    /// Remove a person from the roster, every day's availability and every
    /// assignment they hold.
    pub fn remove_person(&mut self, id: &PersonId) -> Result<Person, ValidationError> {
        let index = self
            .people
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| not_found(PERSON, id.as_str()))?;
        let removed = self.people.remove(index);

        for record in self.assignments_by_date.values_mut() {
            record.available_person_ids.remove(id);
            record.assignments.retain(|_, person| person != id);
        }
        tracing::info!(person = %id, name = %removed.name, "person removed");
        Ok(removed)
    }

    /// Append a chore to the end of the priority order.
    pub fn add_chore(&mut self, name: &str) -> Result<ChoreId, ValidationError> {
        let name = clean_name(CHORE, name)?;
        if name_taken(self.chore_names(), &name, None) {
            return Err(ValidationError::DuplicateName { kind: CHORE, name });
        }
        let id = ChoreId::generate();
        tracing::info!(chore = %id, %name, "chore added");
        self.chores.push(Chore { id: id.clone(), name });
        Ok(id)
    }

    pub fn rename_chore(&mut self, id: &ChoreId, name: &str) -> Result<(), ValidationError> {
        let name = clean_name(CHORE, name)?;
        if name_taken(self.chore_names(), &name, Some(id.as_str())) {
            return Err(ValidationError::DuplicateName { kind: CHORE, name });
        }
        let chore = self
            .chores
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| not_found(CHORE, id.as_str()))?;
        chore.name = name;
        Ok(())
    }

    /// Remove a chore and its key from every day's assignment map.
    pub fn remove_chore(&mut self, id: &ChoreId) -> Result<Chore, ValidationError> {
        let index = self
            .chores
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| not_found(CHORE, id.as_str()))?;
        let removed = self.chores.remove(index);

        for record in self.assignments_by_date.values_mut() {
            record.assignments.remove(id);
        }
        tracing::info!(chore = %id, name = %removed.name, "chore removed");
        Ok(removed)
    }

    /// Move a chore to `position` in the priority order, clamped to the end.
    pub fn move_chore(&mut self, id: &ChoreId, position: usize) -> Result<(), ValidationError> {
        let index = self
            .chores
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| not_found(CHORE, id.as_str()))?;
        let chore = self.chores.remove(index);
        let position = position.min(self.chores.len());
        self.chores.insert(position, chore);
        Ok(())
    }

    /// Resolve a person by exact id or case-insensitive name.
    pub fn find_person(&self, token: &str) -> Result<&Person, ValidationError> {
        let folded = token.trim().to_lowercase();
        self.people
            .iter()
            .find(|p| p.id.as_str() == token)
            .or_else(|| self.people.iter().find(|p| p.name.to_lowercase() == folded))
            .ok_or_else(|| not_found(PERSON, token))
    }

    /// Resolve a chore by exact id or case-insensitive name.
    pub fn find_chore(&self, token: &str) -> Result<&Chore, ValidationError> {
        let folded = token.trim().to_lowercase();
        self.chores
            .iter()
            .find(|c| c.id.as_str() == token)
            .or_else(|| self.chores.iter().find(|c| c.name.to_lowercase() == folded))
            .ok_or_else(|| not_found(CHORE, token))
    }

    fn person_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.people.iter().map(|p| (p.id.as_str(), p.name.as_str()))
    }

    fn chore_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chores.iter().map(|c| (c.id.as_str(), c.name.as_str()))
    }
}

fn not_found(kind: &'static str, token: &str) -> ValidationError {
    ValidationError::NotFound {
        kind,
        token: token.to_string(),
    }
}
