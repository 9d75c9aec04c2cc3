//! Builder API for ergonomic state construction.
//!
//! This module provides fluent builders for creating states and
//! transitions while checking their structural rules up front.

pub mod error;
pub mod state;
pub mod transition;

pub use error::BuildError;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Action, StateId, TimeRange, TimeRangeCondition, Transition, Trigger};

/// Create a transition that fires on every tick.
///
/// # Example
///
/// ```
/// use agent_fsm::builder::unconditional;
/// use agent_fsm::core::{Clock, StateId};
///
/// let transition = unconditional(StateId::Quiet, vec![]);
/// assert!(transition.is_triggered(&Clock::default()));
/// ```
pub fn unconditional(target: StateId, actions: Vec<Action>) -> Transition {
    Transition::new(Trigger::Always, target, actions)
}

/// Create a transition that fires when the clock reads any of `times`.
///
/// # Example
///
/// ```
/// use agent_fsm::builder::at_times;
/// use agent_fsm::core::{Clock, StateId};
///
/// let transition = at_times(StateId::Chatter, [4, 9], vec![]);
/// assert!(!transition.is_triggered(&Clock::default()));
/// ```
pub fn at_times<I>(target: StateId, times: I, actions: Vec<Action>) -> Transition
where
    I: IntoIterator<Item = u32>,
{
    let ranges = times.into_iter().map(TimeRange::at).collect();
    Transition::new(
        Trigger::when(TimeRangeCondition::new(ranges)),
        target,
        actions,
    )
}
