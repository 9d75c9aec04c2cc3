//! Transitions between states.

use super::action::Action;
use super::clock::Clock;
use super::condition::Trigger;
use super::state::StateId;
use serde::{Deserialize, Serialize};

/// Pairs a trigger with a target state and the actions run during the
/// hand-off.
///
/// # Example
///
/// ```rust
/// use agent_fsm::core::{Action, Clock, StateId, Transition, Trigger};
///
/// let transition = Transition::new(
///     Trigger::Always,
///     StateId::Quiet,
///     vec![Action::dummy("Transition from")],
/// );
///
/// assert!(transition.is_triggered(&Clock::default()));
/// assert_eq!(transition.target_state(), StateId::Quiet);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    trigger: Trigger,
    target: StateId,
    actions: Vec<Action>,
}

impl Transition {
    pub fn new(trigger: Trigger, target: StateId, actions: Vec<Action>) -> Self {
        Self {
            trigger,
            target,
            actions,
        }
    }

    /// Check whether the transition fires at the current clock time.
    ///
    /// Depends only on the clock, so repeated calls within a tick agree.
    pub fn is_triggered(&self, clock: &Clock) -> bool {
        self.trigger.test(clock)
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Actions run between the exit and entry actions when this fires.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn target_state(&self) -> StateId {
        self.target
    }
}
