//! Store abstraction consumed by the allocation core.
//!
//! Every core operation receives the store explicitly. [`Household`] is the
//! in-memory implementation; persistence lives in [`crate::storage`].

use chrono::NaiveDate;

use crate::model::{Chore, DayRecord, Household, Person};

/// Date-keyed access to day records plus the current roster.
pub trait DayStore {
    fn get(&self, date: NaiveDate) -> Option<&DayRecord>;

    fn set(&mut self, date: NaiveDate, record: DayRecord);

    fn remove(&mut self, date: NaiveDate) -> Option<DayRecord>;

    /// All dates that have a record, ascending.
    fn all_dates(&self) -> Vec<NaiveDate>;

    fn people(&self) -> &[Person];

    /// Chores in priority order.
    fn chores(&self) -> &[Chore];

    /// Most recent record strictly before `date`.
    fn latest_before(&self, date: NaiveDate) -> Option<(NaiveDate, &DayRecord)> {
        self.all_dates()
            .into_iter()
            .rev()
            .find(|d| *d < date)
            .and_then(|d| self.get(d).map(|r| (d, r)))
    }
}

impl DayStore for Household {
    fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.assignments_by_date.get(&date)
    }

    fn set(&mut self, date: NaiveDate, record: DayRecord) {
        self.assignments_by_date.insert(date, record);
    }

    fn remove(&mut self, date: NaiveDate) -> Option<DayRecord> {
        self.assignments_by_date.remove(&date)
    }

    fn all_dates(&self) -> Vec<NaiveDate> {
        self.assignments_by_date.keys().copied().collect()
    }

    fn people(&self) -> &[Person] {
        &self.people
    }

    fn chores(&self) -> &[Chore] {
        &self.chores
    }

    fn latest_before(&self, date: NaiveDate) -> Option<(NaiveDate, &DayRecord)> {
        self.assignments_by_date
            .range(..date)
            .next_back()
            .map(|(d, r)| (*d, r))
    }
}
