//! Core descriptors of the decision engine.
//!
//! This module contains the pure building blocks of the machine:
//! - The cycling `Clock` read by conditions
//! - `TimeRangeCondition` and `Trigger` predicates
//! - `Action` values returned for the driver to execute
//! - `State` and `Transition` descriptors keyed by `StateId`
//!
//! Apart from `Action::execute`, nothing here performs side effects.

mod action;
mod clock;
mod condition;
mod state;
mod transition;

pub use action::{run_actions, Action};
pub use clock::{Clock, DEFAULT_MODULUS};
pub use condition::{TimeRange, TimeRangeCondition, Trigger};
pub use state::{State, StateId};
pub use transition::Transition;
