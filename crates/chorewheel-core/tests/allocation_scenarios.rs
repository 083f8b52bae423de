//! End-to-end allocation scenarios through the public API.
//!
//! Covers a week of daily generation with confirmation, cascade deletes
//! mid-history, and the retention sweep.

use std::collections::BTreeSet;

use chorewheel_core::{
    confirm, day_view, generate, normalize, purge, set_availability, AllocationBlock,
    AllocationOutcome, ConfirmOutcome, DayStore, Household, PcgSource, PersonId, ScriptedSource,
};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[test]
fn two_chores_three_people_empty_history() {
    let mut household = Household::new();
    let people: Vec<PersonId> = ["A", "B", "C"]
        .iter()
        .map(|n| household.add_person(n).unwrap())
        .collect();
    household.add_chore("Dishes").unwrap();
    household.add_chore("Trash").unwrap();
    for p in &people {
        set_availability(&mut household, day(1), p, true).unwrap();
    }

    let report = generate(&mut household, day(1), &mut PcgSource::from_entropy());
    assert_eq!(report.outcome, AllocationOutcome::Fair);
    assert!(report.warnings.is_empty());
    assert_eq!(report.assignments.len(), 2);

    let assignees: BTreeSet<_> = report.assignments.values().collect();
    assert_eq!(assignees.len(), 2);
    assert!(assignees.iter().all(|p| people.contains(p)));
}

#[test]
fn week_of_generation_respects_rules_while_fair() {
    let mut household = Household::new();
    let people: Vec<PersonId> = ["Ana", "Ben", "Cy", "Dee", "Eli"]
        .iter()
        .map(|n| household.add_person(n).unwrap())
        .collect();
    household.add_chore("Dishes").unwrap();
    household.add_chore("Trash").unwrap();
    for p in &people {
        set_availability(&mut household, day(1), p, true).unwrap();
    }

    let mut rng = PcgSource::from_seed(11);
    for d in 1..=10 {
        let report = generate(&mut household, day(d), &mut rng);
        assert!(report.is_committed());
        assert_eq!(report.assignments.len(), 2);
        assert_eq!(confirm(&mut household, day(d)), ConfirmOutcome::Confirmed);

        if report.outcome != AllocationOutcome::Fair {
            continue;
        }
        // Nobody assigned on both previous days works today.
        if d >= 3 {
            let prev: Vec<_> = [day(d - 1), day(d - 2)]
                .iter()
                .map(|date| household.get(*date).unwrap().clone())
                .collect();
            for person in report.assignments.values() {
                assert!(!prev.iter().all(|r| r.has_assignment_for(person)));
            }
        }
        // Nobody repeats a chore within five days.
        for (chore, person) in &report.assignments {
            for back in 1..=5u32.min(d - 1) {
                let earlier = household.get(day(d - back)).unwrap();
                assert_ne!(earlier.assignments.get(chore), Some(person));
            }
        }
    }

    // Availability carried forward to every generated day.
    assert_eq!(household.get(day(10)).unwrap().available_person_ids.len(), 5);
}

#[test]
fn confirmed_day_cannot_be_regenerated() {
    let mut household = Household::new();
    let a = household.add_person("A").unwrap();
    household.add_person("B").unwrap();
    household.add_chore("Dishes").unwrap();
    set_availability(&mut household, day(1), &a, true).unwrap();

    let first = generate(&mut household, day(1), &mut ScriptedSource::first());
    confirm(&mut household, day(1));
    let second = generate(&mut household, day(1), &mut ScriptedSource::new(vec![1]));

    assert_eq!(
        second.outcome,
        AllocationOutcome::Blocked {
            block: AllocationBlock::AlreadyConfirmed
        }
    );
    assert_eq!(second.assignments, first.assignments);
    assert_eq!(household.get(day(1)).unwrap().assignments, first.assignments);
}

#[test]
fn deleting_people_and_chores_cascades_across_history() {
    let mut household = Household::new();
    let people: Vec<PersonId> = ["A", "B", "C"]
        .iter()
        .map(|n| household.add_person(n).unwrap())
        .collect();
    let dishes = household.add_chore("Dishes").unwrap();
    household.add_chore("Trash").unwrap();
    for p in &people {
        set_availability(&mut household, day(1), p, true).unwrap();
    }
    let mut rng = PcgSource::from_seed(5);
    for d in 1..=4 {
        generate(&mut household, day(d), &mut rng);
    }

    household.remove_person(&people[0]).unwrap();
    household.remove_chore(&dishes).unwrap();

    for date in household.all_dates() {
        let record = household.get(date).unwrap();
        assert!(!record.available_person_ids.contains(&people[0]));
        assert!(!record.has_assignment_for(&people[0]));
        assert!(!record.assignments.contains_key(&dishes));
    }

    // The next day inherits availability without the deleted person.
    let record = normalize(&mut household, day(5));
    assert_eq!(record.available_person_ids.len(), 2);
}

#[test]
fn retention_keeps_boundary_and_views_survive() {
    let mut household = Household::new();
    let a = household.add_person("A").unwrap();
    household.add_chore("Dishes").unwrap();
    let old = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
    let boundary = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let now = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();

    set_availability(&mut household, old, &a, true).unwrap();
    generate(&mut household, boundary, &mut ScriptedSource::first());
    generate(&mut household, now, &mut ScriptedSource::first());

    assert_eq!(purge(&mut household, 30, now), 1);
    assert!(household.get(old).is_none());
    assert!(household.get(boundary).is_some());

    let view = day_view(&household, now).unwrap();
    assert_eq!(view.rows[0].person.as_deref(), Some("A"));
}
