//! Household data model.
//!
//! The whole persisted state is one [`Household`] document:
//! - ordered chore list (order is the allocation priority)
//! - people
//! - one [`DayRecord`] per touched calendar date
//!
//! Field names follow the camelCase JSON layout of the on-disk document.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Highest document schema version this build reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

/// Opaque identifier of a person.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

/// Opaque identifier of a chore.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoreId(pub String);

impl PersonId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ChoreId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ChoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ChoreId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A member of the household who can take chores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

/// A recurring task handed out at most once per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub name: String,
}

/// Per-date snapshot: who is available, who does what, and whether the
/// day has been locked in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(default, deserialize_with = "lenient_id_set")]
    pub available_person_ids: BTreeSet<PersonId>,
    #[serde(default, deserialize_with = "lenient_assignments")]
    pub assignments: BTreeMap<ChoreId, PersonId>,
    #[serde(default)]
    pub confirmed: bool,
}

impl DayRecord {
    /// Fresh, unconfirmed record with the given availability.
    pub fn with_available(available: BTreeSet<PersonId>) -> Self {
        Self {
            available_person_ids: available,
            assignments: BTreeMap::new(),
            confirmed: false,
        }
    }

    /// Whether `person` holds any chore on this day.
    pub fn has_assignment_for(&self, person: &PersonId) -> bool {
        self.assignments.values().any(|p| p == person)
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
        }
    }
}

/// The complete persisted household document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub chores: Vec<Chore>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub assignments_by_date: BTreeMap<NaiveDate, DayRecord>,
}

impl Household {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    pub fn chore(&self, id: &ChoreId) -> Option<&Chore> {
        self.chores.iter().find(|c| &c.id == id)
    }
}

// Older or hand-edited documents sometimes carry `null`, objects or mixed
// arrays here; anything that is not a string id is dropped.
fn lenient_id_set<'de, D>(deserializer: D) -> Result<BTreeSet<PersonId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(PersonId(s)),
                _ => None,
            })
            .collect(),
        _ => BTreeSet::new(),
    })
}

fn lenient_assignments<'de, D>(deserializer: D) -> Result<BTreeMap<ChoreId, PersonId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(chore, person)| match person {
                Value::String(p) if !p.is_empty() => Some((ChoreId(chore), PersonId(p))),
                _ => None,
            })
            .collect(),
        _ => BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_record_uses_camel_case_layout() {
        let mut record =
            DayRecord::with_available([PersonId::from("a"), PersonId::from("b")].into_iter().collect());
        record.assignments.insert("dishes".into(), "a".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["availablePersonIds"], serde_json::json!(["a", "b"]));
        assert_eq!(json["assignments"]["dishes"], "a");
        assert_eq!(json["confirmed"], false);
    }

    #[test]
    fn malformed_availability_is_coerced() {
        let record: DayRecord =
            serde_json::from_str(r#"{"availablePersonIds": null, "assignments": {}}"#).unwrap();
        assert!(record.available_person_ids.is_empty());

        let record: DayRecord = serde_json::from_str(
            r#"{"availablePersonIds": ["a", 3, "a", {"x": 1}, ""], "confirmed": true}"#,
        )
        .unwrap();
        assert_eq!(record.available_person_ids.len(), 1);
        assert!(record.available_person_ids.contains(&PersonId::from("a")));
        assert!(record.confirmed);
    }

    #[test]
    fn malformed_assignments_are_coerced() {
        let record: DayRecord =
            serde_json::from_str(r#"{"assignments": {"c1": "p1", "c2": 7}}"#).unwrap();
        assert_eq!(record.assignments.len(), 1);

        let record: DayRecord = serde_json::from_str(r#"{"assignments": []}"#).unwrap();
        assert!(record.assignments.is_empty());
    }

    #[test]
    fn household_parses_date_keys() {
        let doc = r#"{
            "meta": {},
            "chores": [{"id": "c1", "name": "Dishes"}],
            "people": [{"id": "p1", "name": "Ana"}],
            "assignmentsByDate": {
                "2024-03-01": {"availablePersonIds": ["p1"], "assignments": {"c1": "p1"}, "confirmed": true}
            }
        }"#;
        let household: Household = serde_json::from_str(doc).unwrap();
        assert_eq!(household.meta.schema_version, SCHEMA_VERSION);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(household.assignments_by_date[&date].confirmed);
        assert_eq!(household.person(&"p1".into()).unwrap().name, "Ana");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(PersonId::generate(), PersonId::generate());
        assert_ne!(ChoreId::generate(), ChoreId::generate());
    }
}
