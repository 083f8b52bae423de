//! Daily chore allocation.
//!
//! Generation runs up to two passes over the chores in priority order:
//! - a strict pass enforcing every [`FairnessRule`]
//! - a relaxed pass keeping only [`FairnessRule::OneChorePerDay`]
//!
//! Each pass picks uniformly at random among the remaining candidates of a
//! chore. A pass either covers every chore or stops at the first chore with
//! no candidate. Only a complete pass is committed, except when the relaxed
//! pass also gets stuck: its partial map is then committed so the rest can
//! be filled in by hand.

mod rules;

pub use rules::{
    AllocationRules, FairnessRule, CONSECUTIVE_ASSIGNMENT_LIMIT, SAME_CHORE_COOLDOWN_DAYS,
};

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::availability::normalize;
use crate::day_store::DayStore;
use crate::model::{Chore, ChoreId, PersonId};
use crate::random::UniformSource;
use rules::HistorySnapshot;

/// Rules enforced by the strict pass.
pub const STRICT_RULES: &[FairnessRule] = &[
    FairnessRule::OneChorePerDay,
    FairnessRule::ConsecutiveDayLimit,
    FairnessRule::SameChoreCooldown,
];

/// Rules kept by the relaxed pass.
pub const RELAXED_RULES: &[FairnessRule] = &[FairnessRule::OneChorePerDay];

/// Conditions that stop generation before any pick is made.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllocationBlock {
    #[error("This day is already confirmed; assignments were left unchanged")]
    AlreadyConfirmed,

    #[error("Nobody is marked available for this day")]
    NoAvailablePeople,

    #[error("Only {available} available for {chores} chores; each person can take one chore a day")]
    NotEnoughPeople { available: usize, chores: usize },
}

/// How a generation ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllocationOutcome {
    /// Every chore assigned under every fairness rule.
    Fair,
    /// Every chore assigned after dropping the history-based rules.
    Relaxed,
    /// Some chores could not be assigned even after relaxing.
    Partial { unassigned: Vec<ChoreId> },
    /// Nothing was attempted.
    Blocked { block: AllocationBlock },
}

/// Result handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    pub date: NaiveDate,
    pub outcome: AllocationOutcome,
    /// The day's assignments after this call.
    pub assignments: BTreeMap<ChoreId, PersonId>,
    /// User-visible messages, in order.
    pub warnings: Vec<String>,
}

impl AllocationReport {
    /// Whether this call replaced the day's assignments.
    pub fn is_committed(&self) -> bool {
        !matches!(self.outcome, AllocationOutcome::Blocked { .. })
    }
}

enum PassResult {
    Complete(BTreeMap<ChoreId, PersonId>),
    Stuck {
        partial: BTreeMap<ChoreId, PersonId>,
        unassigned: Vec<ChoreId>,
    },
}

/// Chore allocation engine.
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    rules: AllocationRules,
}

impl Allocator {
    /// Create an allocator with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom limits.
    pub fn with_rules(rules: AllocationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &AllocationRules {
        &self.rules
    }

    /// Assign today's chores.
    ///
    /// Normalizes the day first, then either blocks (nothing changes), or
    /// commits a fair map, a relaxed map, or a partial map.
    pub fn generate<S, R>(&self, store: &mut S, today: NaiveDate, rng: &mut R) -> AllocationReport
    where
        S: DayStore + ?Sized,
        R: UniformSource + ?Sized,
    {
        let mut record = normalize(store, today);
        let chores: Vec<Chore> = store.chores().to_vec();
        let available: Vec<PersonId> = record.available_person_ids.iter().cloned().collect();

        if let Some(block) = self.check_blocks(record.confirmed, available.len(), chores.len()) {
            tracing::info!(date = %today, %block, "generation blocked");
            return AllocationReport {
                date: today,
                outcome: AllocationOutcome::Blocked {
                    block: block.clone(),
                },
                assignments: record.assignments,
                warnings: vec![block.to_string()],
            };
        }

        let history = HistorySnapshot::capture(&*store, today, &self.rules);

        let (outcome, assignments, warnings) =
            match allocation_pass(&chores, &available, STRICT_RULES, &history, rng) {
                PassResult::Complete(map) => {
                    tracing::info!(date = %today, chores = map.len(), "fair assignment committed");
                    (AllocationOutcome::Fair, map, Vec::new())
                }
                PassResult::Stuck { unassigned, .. } => {
                    tracing::debug!(
                        date = %today,
                        stuck_on = %unassigned[0],
                        "strict pass infeasible, relaxing"
                    );
                    match allocation_pass(&chores, &available, RELAXED_RULES, &history, rng) {
                        PassResult::Complete(map) => {
                            tracing::warn!(date = %today, "fairness rules relaxed");
                            let warning = "Fairness rules were relaxed: no assignment satisfied \
                                           every recent-history rule, so only the one-chore-per-person \
                                           rule was kept."
                                .to_string();
                            (AllocationOutcome::Relaxed, map, vec![warning])
                        }
                        PassResult::Stuck {
                            partial,
                            unassigned,
                        } => {
                            let names = chore_names(&chores, &unassigned);
                            tracing::warn!(date = %today, unassigned = %names, "partial assignment");
                            let warning =
                                format!("Could not assign: {names}. Assign them manually.");
                            (AllocationOutcome::Partial { unassigned }, partial, vec![warning])
                        }
                    }
                }
            };

        record.assignments = assignments.clone();
        store.set(today, record);

        AllocationReport {
            date: today,
            outcome,
            assignments,
            warnings,
        }
    }

    fn check_blocks(&self, confirmed: bool, available: usize, chores: usize) -> Option<AllocationBlock> {
        if confirmed {
            Some(AllocationBlock::AlreadyConfirmed)
        } else if available == 0 {
            Some(AllocationBlock::NoAvailablePeople)
        } else if available < chores && !self.rules.allow_understaffed {
            Some(AllocationBlock::NotEnoughPeople { available, chores })
        } else {
            None
        }
    }
}

/// Generate with the default limits.
pub fn generate<S, R>(store: &mut S, today: NaiveDate, rng: &mut R) -> AllocationReport
where
    S: DayStore + ?Sized,
    R: UniformSource + ?Sized,
{
    Allocator::new().generate(store, today, rng)
}

/// One pass over `chores` in order. Stops at the first chore whose
/// candidate pool is empty; that chore and every later one are reported
/// as unassigned.
fn allocation_pass<R: UniformSource + ?Sized>(
    chores: &[Chore],
    available: &[PersonId],
    rules: &[FairnessRule],
    history: &HistorySnapshot,
    rng: &mut R,
) -> PassResult {
    let mut picks = BTreeMap::new();
    let mut picked_today = BTreeSet::new();

    for (index, chore) in chores.iter().enumerate() {
        let candidates: Vec<&PersonId> = available
            .iter()
            .filter(|person| {
                !rules
                    .iter()
                    .any(|rule| rule.excludes(person, &chore.id, &picked_today, history))
            })
            .collect();

        if candidates.is_empty() {
            return PassResult::Stuck {
                partial: picks,
                unassigned: chores[index..].iter().map(|c| c.id.clone()).collect(),
            };
        }

        let person = candidates[rng.uniform(candidates.len())].clone();
        tracing::debug!(chore = %chore.name, %person, pool = candidates.len(), "picked");
        picked_today.insert(person.clone());
        picks.insert(chore.id.clone(), person);
    }

    PassResult::Complete(picks)
}

fn chore_names(chores: &[Chore], ids: &[ChoreId]) -> String {
    ids.iter()
        .map(|id| {
            chores
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
