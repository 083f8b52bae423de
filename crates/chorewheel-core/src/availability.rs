//! Availability normalization.
//!
//! A day that has never been touched starts out with whoever was available
//! on the nearest earlier day that had anyone available. Ids of people who
//! no longer exist are always filtered out, so deleted people are never
//! carried forward.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::day_store::DayStore;
use crate::error::ValidationError;
use crate::model::{DayRecord, PersonId};

/// Ensure a well-formed record exists for `date` and return it.
///
/// Idempotent: a second call with no intervening mutation returns an
/// identical record and leaves the store unchanged.
pub fn normalize<S: DayStore + ?Sized>(store: &mut S, date: NaiveDate) -> DayRecord {
    let known: BTreeSet<PersonId> = store.people().iter().map(|p| p.id.clone()).collect();

    let mut record = match store.get(date) {
        Some(existing) => {
            let mut record = existing.clone();
            if record.available_person_ids.is_empty() {
                record.available_person_ids = inherited_availability(&*store, date);
            }
            record
        }
        None => {
            let record = DayRecord::with_available(inherited_availability(&*store, date));
            tracing::debug!(
                %date,
                inherited = record.available_person_ids.len(),
                "created day record"
            );
            record
        }
    };

    record.available_person_ids.retain(|id| known.contains(id));
    store.set(date, record.clone());
    record
}

/// Availability of the nearest day before `date` with anyone available,
/// or an empty set.
fn inherited_availability<S: DayStore + ?Sized>(store: &S, date: NaiveDate) -> BTreeSet<PersonId> {
    let mut cursor = date;
    while let Some((earlier, record)) = store.latest_before(cursor) {
        if !record.available_person_ids.is_empty() {
            return record.available_person_ids.clone();
        }
        cursor = earlier;
    }
    BTreeSet::new()
}

/// Mark `person` available or unavailable on `date`.
///
/// Allowed on confirmed days since it never touches assignments.
pub fn set_availability<S: DayStore + ?Sized>(
    store: &mut S,
    date: NaiveDate,
    person: &PersonId,
    available: bool,
) -> Result<DayRecord, ValidationError> {
    if !store.people().iter().any(|p| &p.id == person) {
        return Err(ValidationError::NotFound {
            kind: "person",
            token: person.to_string(),
        });
    }

    let mut record = normalize(store, date);
    if available {
        record.available_person_ids.insert(person.clone());
    } else {
        record.available_person_ids.remove(person);
    }
    store.set(date, record.clone());
    Ok(record)
}
