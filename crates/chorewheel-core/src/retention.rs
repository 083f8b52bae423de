//! Retention sweep over old day records.

use chrono::{Days, NaiveDate};

use crate::day_store::DayStore;

/// Default number of days of history kept.
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Oldest date a sweep at `now` keeps, or `None` when the window reaches
/// past the start of the calendar.
pub fn cutoff(retention_days: u32, now: NaiveDate) -> Option<NaiveDate> {
    now.checked_sub_days(Days::new(u64::from(retention_days)))
}

/// Whether a sweep at `now` would remove a record dated `date`.
pub fn is_expired(date: NaiveDate, retention_days: u32, now: NaiveDate) -> bool {
    cutoff(retention_days, now).is_some_and(|cutoff| date < cutoff)
}

/// Remove every record dated strictly before `now - retention_days`.
/// A record exactly on the boundary is kept. Returns how many went.
pub fn purge<S: DayStore + ?Sized>(store: &mut S, retention_days: u32, now: NaiveDate) -> usize {
    let Some(cutoff) = cutoff(retention_days, now) else {
        return 0;
    };

    let expired: Vec<NaiveDate> = store
        .all_dates()
        .into_iter()
        .take_while(|d| *d < cutoff)
        .collect();
    for date in &expired {
        store.remove(*date);
    }

    if !expired.is_empty() {
        tracing::info!(%cutoff, removed = expired.len(), "purged old day records");
    }
    expired.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayRecord, Household};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn boundary_day_is_kept() {
        let mut household = Household::new();
        let now = date(2024, 3, 31);
        household.set(date(2024, 2, 29), DayRecord::default());
        household.set(date(2024, 3, 1), DayRecord::default());
        household.set(date(2024, 3, 30), DayRecord::default());

        assert_eq!(purge(&mut household, 30, now), 1);
        assert_eq!(household.all_dates(), vec![date(2024, 3, 1), date(2024, 3, 30)]);
    }

    #[test]
    fn nothing_to_purge() {
        let mut household = Household::new();
        household.set(date(2024, 3, 20), DayRecord::default());
        assert_eq!(purge(&mut household, DEFAULT_RETENTION_DAYS, date(2024, 3, 31)), 0);
        assert_eq!(household.all_dates().len(), 1);
    }

    #[test]
    fn zero_days_keeps_only_today_and_later() {
        let mut household = Household::new();
        let now = date(2024, 3, 31);
        household.set(date(2024, 3, 30), DayRecord::default());
        household.set(now, DayRecord::default());
        household.set(date(2024, 4, 2), DayRecord::default());

        assert_eq!(purge(&mut household, 0, now), 1);
        assert_eq!(household.all_dates(), vec![now, date(2024, 4, 2)]);
    }

    #[test]
    fn expiry_matches_purge_boundary() {
        let now = date(2024, 3, 31);
        assert_eq!(cutoff(30, now), Some(date(2024, 3, 1)));
        assert!(is_expired(date(2024, 2, 29), 30, now));
        assert!(!is_expired(date(2024, 3, 1), 30, now));
        assert!(!is_expired(now, 0, now));
        assert!(!is_expired(NaiveDate::MIN, u32::MAX, now));
    }
}
