//! # Chorewheel Core Library
//!
//! This library hands out a household's recurring chores to the people
//! available on a given day, keeping assignments fair against recent
//! history and degrading gracefully when strict fairness is impossible.
//! The CLI binary is a thin front end over the same operations.
//!
//! ## Architecture
//!
//! - **Store**: one [`Household`] document behind the [`DayStore`] trait,
//!   persisted as JSON by [`JsonStore`]
//! - **Availability**: lazily creates day records, inheriting availability
//!   from the nearest earlier day
//! - **Allocation**: two-pass constrained random assignment with relaxation
//! - **Retention**: sweeps records older than the retention window
//!
//! ## Key Components
//!
//! - [`Allocator`]: the allocation engine
//! - [`normalize`]: availability normalizer
//! - [`recent_dates`]: history window query
//! - [`Config`]: application configuration management

pub mod allocation;
pub mod availability;
pub mod clock;
pub mod confirmation;
pub mod day_store;
pub mod error;
pub mod history;
pub mod model;
pub mod random;
pub mod retention;
mod roster;
pub mod storage;
pub mod view;

pub use allocation::{
    generate, AllocationBlock, AllocationOutcome, AllocationReport, AllocationRules, Allocator,
    FairnessRule,
};
pub use availability::{normalize, set_availability};
pub use clock::{Clock, FixedClock, SystemClock};
pub use confirmation::{assign_manually, confirm, ConfirmOutcome};
pub use day_store::DayStore;
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use history::recent_dates;
pub use model::{Chore, ChoreId, DayRecord, Household, Person, PersonId};
pub use random::{PcgSource, ScriptedSource, UniformSource};
pub use retention::{is_expired, purge};
pub use storage::{Config, JsonStore};
pub use view::{day_view, history_view, AssignmentRow, DayView};
