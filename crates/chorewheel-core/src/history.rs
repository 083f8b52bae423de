//! History window query over recorded days.

use chrono::NaiveDate;

use crate::day_store::DayStore;
use crate::model::DayRecord;

/// The `count` most recent recorded dates strictly before `before`,
/// newest first. Dates without a record are simply not part of the
/// sequence.
pub fn recent_dates<S: DayStore + ?Sized>(store: &S, before: NaiveDate, count: usize) -> Vec<NaiveDate> {
    store
        .all_dates()
        .into_iter()
        .rev()
        .filter(|d| *d < before)
        .take(count)
        .collect()
}

/// Same window as [`recent_dates`], paired with the records.
pub fn recent_records<S: DayStore + ?Sized>(
    store: &S,
    before: NaiveDate,
    count: usize,
) -> Vec<(NaiveDate, &DayRecord)> {
    recent_dates(store, before, count)
        .into_iter()
        .filter_map(|d| store.get(d).map(|r| (d, r)))
        .collect()
}
