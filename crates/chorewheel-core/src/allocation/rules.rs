//! Fairness rules and the history snapshot they are evaluated against.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day_store::DayStore;
use crate::history::recent_records;
use crate::model::{ChoreId, PersonId};

/// Number of most recent recorded days a person may be assigned on before
/// being held back for a day.
pub const CONSECUTIVE_ASSIGNMENT_LIMIT: usize = 2;

/// Number of most recent recorded days during which the same chore will
/// not go back to the same person.
pub const SAME_CHORE_COOLDOWN_DAYS: usize = 5;

/// Tunable limits for the allocation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRules {
    #[serde(default = "default_consecutive_limit")]
    pub consecutive_assignment_limit: usize,
    #[serde(default = "default_cooldown_days")]
    pub same_chore_cooldown_days: usize,
    /// Generate even when fewer people than chores are available; the
    /// leftover chores are reported unassigned.
    #[serde(default)]
    pub allow_understaffed: bool,
}

fn default_consecutive_limit() -> usize {
    CONSECUTIVE_ASSIGNMENT_LIMIT
}
fn default_cooldown_days() -> usize {
    SAME_CHORE_COOLDOWN_DAYS
}

impl Default for AllocationRules {
    fn default() -> Self {
        Self {
            consecutive_assignment_limit: CONSECUTIVE_ASSIGNMENT_LIMIT,
            same_chore_cooldown_days: SAME_CHORE_COOLDOWN_DAYS,
            allow_understaffed: false,
        }
    }
}

/// One hard constraint applied while building a chore's candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FairnessRule {
    /// Nobody gets two chores on the same day.
    OneChorePerDay,
    /// Nobody assigned on every day of the streak window gets a chore today.
    ConsecutiveDayLimit,
    /// Nobody gets a chore they had within the cooldown window.
    SameChoreCooldown,
}

impl FairnessRule {
    pub(crate) fn excludes(
        self,
        person: &PersonId,
        chore: &ChoreId,
        picked_today: &BTreeSet<PersonId>,
        history: &HistorySnapshot,
    ) -> bool {
        match self {
            FairnessRule::OneChorePerDay => picked_today.contains(person),
            FairnessRule::ConsecutiveDayLimit => history.on_streak(person),
            FairnessRule::SameChoreCooldown => history.cooling_down(chore, person),
        }
    }
}

/// Assignment history relevant to one generation, with dangling ids removed.
#[derive(Debug, Clone, Default)]
pub(crate) struct HistorySnapshot {
    /// People assigned anything, one set per day of the streak window.
    streak_days: Vec<BTreeSet<PersonId>>,
    streak_limit: usize,
    /// People who had each chore within the cooldown window.
    recent_holders: BTreeMap<ChoreId, BTreeSet<PersonId>>,
}

impl HistorySnapshot {
    pub(crate) fn capture<S: DayStore + ?Sized>(
        store: &S,
        today: NaiveDate,
        rules: &AllocationRules,
    ) -> Self {
        let people: BTreeSet<&PersonId> = store.people().iter().map(|p| &p.id).collect();
        let chores: BTreeSet<&ChoreId> = store.chores().iter().map(|c| &c.id).collect();
        let live = |chore: &ChoreId, person: &PersonId| {
            chores.contains(chore) && people.contains(person)
        };

        let streak_days: Vec<BTreeSet<PersonId>> =
            recent_records(store, today, rules.consecutive_assignment_limit)
                .into_iter()
                .map(|(_, record)| {
                    record
                        .assignments
                        .iter()
                        .filter(|(c, p)| live(c, p))
                        .map(|(_, p)| p.clone())
                        .collect()
                })
                .collect();

        let mut recent_holders: BTreeMap<ChoreId, BTreeSet<PersonId>> = BTreeMap::new();
        for (_, record) in recent_records(store, today, rules.same_chore_cooldown_days) {
            for (chore, person) in record.assignments.iter().filter(|(c, p)| live(c, p)) {
                recent_holders
                    .entry(chore.clone())
                    .or_default()
                    .insert(person.clone());
            }
        }

        Self {
            streak_days,
            streak_limit: rules.consecutive_assignment_limit,
            recent_holders,
        }
    }

    /// Assigned on every one of the streak window's days. A window shorter
    /// than the limit (not enough recorded history) never trips the rule.
    pub(crate) fn on_streak(&self, person: &PersonId) -> bool {
        self.streak_limit > 0
            && self.streak_days.len() == self.streak_limit
            && self.streak_days.iter().all(|day| day.contains(person))
    }

    pub(crate) fn cooling_down(&self, chore: &ChoreId, person: &PersonId) -> bool {
        self.recent_holders
            .get(chore)
            .is_some_and(|holders| holders.contains(person))
    }
}
