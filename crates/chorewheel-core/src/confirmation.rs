//! Locking a day in, and hand edits before that.

use chrono::NaiveDate;
use serde::Serialize;

use crate::availability::normalize;
use crate::day_store::DayStore;
use crate::error::ValidationError;
use crate::model::{ChoreId, DayRecord, PersonId};

/// Result of [`confirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmOutcome {
    Confirmed,
    AlreadyConfirmed,
    NoRecord,
}

/// Mark the day's assignments final. There is no way back.
pub fn confirm<S: DayStore + ?Sized>(store: &mut S, date: NaiveDate) -> ConfirmOutcome {
    let Some(record) = store.get(date) else {
        return ConfirmOutcome::NoRecord;
    };
    if record.confirmed {
        return ConfirmOutcome::AlreadyConfirmed;
    }

    let mut record = record.clone();
    record.confirmed = true;
    tracing::info!(%date, assignments = record.assignments.len(), "day confirmed");
    store.set(date, record);
    ConfirmOutcome::Confirmed
}

/// Set or clear one chore's assignee on an unconfirmed day.
///
/// Used to finish a partial allocation by hand.
pub fn assign_manually<S: DayStore + ?Sized>(
    store: &mut S,
    date: NaiveDate,
    chore: &ChoreId,
    person: Option<&PersonId>,
) -> Result<DayRecord, ValidationError> {
    let chore_name = store
        .chores()
        .iter()
        .find(|c| &c.id == chore)
        .map(|c| c.name.clone())
        .ok_or_else(|| ValidationError::NotFound {
            kind: "chore",
            token: chore.to_string(),
        })?;
    if let Some(person) = person {
        if !store.people().iter().any(|p| &p.id == person) {
            return Err(ValidationError::NotFound {
                kind: "person",
                token: person.to_string(),
            });
        }
    }

    let mut record = normalize(store, date);
    if record.confirmed {
        return Err(ValidationError::DayConfirmed { date });
    }

    match person {
        Some(person) => {
            let other = record
                .assignments
                .iter()
                .find(|(c, p)| *c != chore && *p == person)
                .map(|(c, _)| c.clone());
            if let Some(other) = other {
                let person_name = store
                    .people()
                    .iter()
                    .find(|p| &p.id == person)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| person.to_string());
                let other_name = store
                    .chores()
                    .iter()
                    .find(|c| c.id == other)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| other.to_string());
                return Err(ValidationError::AlreadyAssigned {
                    person: person_name,
                    chore: other_name,
                    date,
                });
            }
            tracing::info!(%date, chore = %chore_name, %person, "manual assignment");
            record.assignments.insert(chore.clone(), person.clone());
        }
        None => {
            tracing::info!(%date, chore = %chore_name, "assignment cleared");
            record.assignments.remove(chore);
        }
    }

    store.set(date, record.clone());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Household;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    #[test]
    fn confirm_reports_each_state() {
        let mut household = Household::new();
        assert_eq!(confirm(&mut household, day(1)), ConfirmOutcome::NoRecord);

        household.set(day(1), DayRecord::default());
        assert_eq!(confirm(&mut household, day(1)), ConfirmOutcome::Confirmed);
        assert!(household.get(day(1)).unwrap().confirmed);
        assert_eq!(confirm(&mut household, day(1)), ConfirmOutcome::AlreadyConfirmed);
    }

    #[test]
    fn confirm_leaves_assignments_alone() {
        let mut household = Household::new();
        let mut record = DayRecord::default();
        record.assignments.insert("c".into(), "p".into());
        household.set(day(1), record.clone());

        confirm(&mut household, day(1));
        assert_eq!(household.get(day(1)).unwrap().assignments, record.assignments);
    }

    #[test]
    fn manual_assignment_sets_and_clears() {
        let mut household = Household::new();
        let ana = household.add_person("Ana").unwrap();
        let dishes = household.add_chore("Dishes").unwrap();

        let record = assign_manually(&mut household, day(2), &dishes, Some(&ana)).unwrap();
        assert_eq!(record.assignments.get(&dishes), Some(&ana));

        let record = assign_manually(&mut household, day(2), &dishes, None).unwrap();
        assert!(record.assignments.is_empty());
    }

    #[test]
    fn manual_assignment_keeps_one_chore_per_person() {
        let mut household = Household::new();
        let ana = household.add_person("Ana").unwrap();
        let dishes = household.add_chore("Dishes").unwrap();
        let trash = household.add_chore("Trash").unwrap();

        assign_manually(&mut household, day(2), &dishes, Some(&ana)).unwrap();
        // Reassigning the same chore to the same person is fine.
        assign_manually(&mut household, day(2), &dishes, Some(&ana)).unwrap();

        let err = assign_manually(&mut household, day(2), &trash, Some(&ana)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AlreadyAssigned {
                person: "Ana".into(),
                chore: "Dishes".into(),
                date: day(2),
            }
        );
    }

    #[test]
    fn manual_assignment_refused_on_confirmed_day() {
        let mut household = Household::new();
        let ana = household.add_person("Ana").unwrap();
        let dishes = household.add_chore("Dishes").unwrap();
        household.set(day(3), DayRecord::default());
        confirm(&mut household, day(3));

        let err = assign_manually(&mut household, day(3), &dishes, Some(&ana)).unwrap_err();
        assert_eq!(err, ValidationError::DayConfirmed { date: day(3) });
    }

    #[test]
    fn manual_assignment_rejects_unknown_ids() {
        let mut household = Household::new();
        let ana = household.add_person("Ana").unwrap();
        let dishes = household.add_chore("Dishes").unwrap();

        assert!(assign_manually(&mut household, day(1), &ChoreId::from("x"), Some(&ana)).is_err());
        assert!(
            assign_manually(&mut household, day(1), &dishes, Some(&PersonId::from("x"))).is_err()
        );
        assert!(household.get(day(1)).is_none());
    }
}
