//! Name-resolved projections of day records for display.

use chrono::NaiveDate;
use serde::Serialize;

use crate::day_store::DayStore;
use crate::history::recent_dates;
use crate::model::{ChoreId, PersonId};

/// Shown for ids that no longer resolve.
pub const UNKNOWN: &str = "Unknown";

/// One chore line of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRow {
    pub chore: String,
    /// `None` when the chore is unassigned.
    pub person: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub confirmed: bool,
    pub available: Vec<String>,
    pub rows: Vec<AssignmentRow>,
}

fn person_name<S: DayStore + ?Sized>(store: &S, id: &PersonId) -> String {
    store
        .people()
        .iter()
        .find(|p| &p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Resolve the record for `date`, chores in priority order. Assignment keys
/// for chores that no longer exist are listed last as [`UNKNOWN`].
pub fn day_view<S: DayStore + ?Sized>(store: &S, date: NaiveDate) -> Option<DayView> {
    let record = store.get(date)?;

    let mut available: Vec<String> = record
        .available_person_ids
        .iter()
        .map(|id| person_name(store, id))
        .collect();
    available.sort_by_key(|name| name.to_lowercase());

    let mut rows: Vec<AssignmentRow> = store
        .chores()
        .iter()
        .map(|chore| AssignmentRow {
            chore: chore.name.clone(),
            person: record.assignments.get(&chore.id).map(|p| person_name(store, p)),
        })
        .collect();

    let is_current = |id: &ChoreId| store.chores().iter().any(|c| &c.id == id);
    rows.extend(
        record
            .assignments
            .iter()
            .filter(|(chore, _)| !is_current(chore))
            .map(|(_, person)| AssignmentRow {
                chore: UNKNOWN.to_string(),
                person: Some(person_name(store, person)),
            }),
    );

    Some(DayView {
        date,
        confirmed: record.confirmed,
        available,
        rows,
    })
}

/// Views of the `count` most recent recorded days before `before`, newest
/// first.
pub fn history_view<S: DayStore + ?Sized>(store: &S, before: NaiveDate, count: usize) -> Vec<DayView> {
    recent_dates(store, before, count)
        .into_iter()
        .filter_map(|date| day_view(store, date))
        .collect()
}
