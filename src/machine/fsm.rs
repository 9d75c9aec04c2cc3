//! Tick-driven finite state machine.

use crate::core::{Action, Clock, State, StateId};
use crate::machine::error::FsmError;
use crate::machine::factory::StateFactory;
use tracing::{info, trace};

/// Outcome of a single evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// No transition fired; the current state's default actions.
    Stayed { state: StateId, actions: Vec<Action> },

    /// A transition fired. Actions are exit, then transition, then entry.
    Transitioned {
        from: StateId,
        to: StateId,
        actions: Vec<Action>,
    },
}

impl StepResult {
    /// State that is current after this step.
    pub fn current(&self) -> StateId {
        match self {
            Self::Stayed { state, .. } => *state,
            Self::Transitioned { to, .. } => *to,
        }
    }

    pub fn actions(&self) -> &[Action] {
        match self {
            Self::Stayed { actions, .. } | Self::Transitioned { actions, .. } => actions,
        }
    }

    pub fn into_actions(self) -> Vec<Action> {
        match self {
            Self::Stayed { actions, .. } | Self::Transitioned { actions, .. } => actions,
        }
    }
}

/// Holds the current state and evaluates it once per tick.
///
/// The machine never runs actions itself. Each tick returns the ordered
/// list the caller must execute before advancing the clock.
///
/// # Example
///
/// ```rust
/// use agent_fsm::core::{run_actions, Clock, StateId};
/// use agent_fsm::machine::FiniteStateMachine;
///
/// let mut fsm = FiniteStateMachine::new().unwrap();
/// let mut clock = Clock::default();
///
/// for _ in 0..clock.modulus() {
///     let actions = fsm.tick(&clock).unwrap();
///     run_actions(&actions);
///     clock.advance();
/// }
///
/// assert_eq!(fsm.current_state().id(), StateId::Chatter);
/// ```
pub struct FiniteStateMachine {
    factory: StateFactory,
    current: State,
}

impl FiniteStateMachine {
    /// Start in Chatter using the built-in states.
    pub fn new() -> Result<Self, FsmError> {
        Self::with_factory(StateFactory::standard(), StateId::Chatter)
    }

    /// Start in `initial` using a custom factory.
    pub fn with_factory(factory: StateFactory, initial: StateId) -> Result<Self, FsmError> {
        let current = factory.build(initial)?;
        info!(state = %initial, "state machine initialized");
        Ok(Self { factory, current })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &State {
        &self.current
    }

    /// Evaluate one tick and return the actions to execute.
    pub fn tick(&mut self, clock: &Clock) -> Result<Vec<Action>, FsmError> {
        self.step(clock).map(StepResult::into_actions)
    }

    /// Evaluate one tick.
    ///
    /// The first triggered transition in the current state's list wins. If
    /// none fires, the default actions are returned and nothing changes.
    /// Otherwise the target is built fresh, replaces the current state, and
    /// the returned actions are exit ++ transition ++ entry. If the target
    /// cannot be built the current state is left untouched.
    pub fn step(&mut self, clock: &Clock) -> Result<StepResult, FsmError> {
        let from = self.current.id();

        let Some(transition) = self
            .current
            .transitions()
            .iter()
            .find(|t| t.is_triggered(clock))
        else {
            trace!(state = %from, tick = clock.now(), "no transition triggered");
            return Ok(StepResult::Stayed {
                state: from,
                actions: self.current.actions().to_vec(),
            });
        };

        let mut actions = self.current.exit_actions().to_vec();
        actions.extend_from_slice(transition.actions());

        let target = self.factory.build(transition.target_state())?;
        actions.extend_from_slice(target.entry_actions());

        let to = target.id();
        self.current = target;

        info!(from = %from, to = %to, tick = clock.now(), "transition fired");
        Ok(StepResult::Transitioned { from, to, actions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{at_times, unconditional, StateBuilder};
    use crate::catalog;

    fn clock_at(time: u32) -> Clock {
        let mut clock = Clock::default();
        for _ in 0..time {
            clock.advance();
        }
        clock
    }

    #[test]
    fn starts_in_chatter() {
        let fsm = FiniteStateMachine::new().unwrap();
        assert_eq!(fsm.current_state().id(), StateId::Chatter);
    }

    #[test]
    fn quiet_tick_returns_default_actions_unchanged() {
        let mut fsm = FiniteStateMachine::new().unwrap();
        let before = fsm.current_state().clone();
        let address = fsm.current_state() as *const State;
        let defaults = fsm.current_state().actions().as_ptr();

        let actions = fsm.tick(&clock_at(0)).unwrap();

        assert_eq!(actions, before.actions());
        assert_eq!(fsm.current_state(), &before);
        assert_eq!(fsm.current_state() as *const State, address);
        assert_eq!(fsm.current_state().actions().as_ptr(), defaults);
    }

    #[test]
    fn transition_replaces_state_storage() {
        let mut fsm = FiniteStateMachine::new().unwrap();
        let defaults = fsm.current_state().actions().as_ptr();

        fsm.tick(&clock_at(2)).unwrap();

        assert_eq!(fsm.current_state().id(), StateId::Quiet);
        assert_ne!(fsm.current_state().actions().as_ptr(), defaults);
    }

    #[test]
    fn transition_orders_exit_transition_entry() {
        let mut fsm = FiniteStateMachine::new().unwrap();

        let result = fsm.step(&clock_at(2)).unwrap();

        assert_eq!(
            result,
            StepResult::Transitioned {
                from: StateId::Chatter,
                to: StateId::Quiet,
                actions: vec![
                    Action::chatter("Exit"),
                    Action::chatter("Transition from"),
                    Action::quiet("Entry"),
                ],
            }
        );
        assert_eq!(fsm.current_state().id(), StateId::Quiet);
    }

    #[test]
    fn first_matching_transition_wins() {
        let factory = StateFactory::standard().register(StateId::Chatter, || {
            StateBuilder::new(StateId::Chatter)
                .add_transition(at_times(StateId::Quiet, [3], vec![Action::chatter("first")]))
                .add_transition(at_times(StateId::Dummy, [3], vec![Action::chatter("second")]))
                .build()
        });
        let mut fsm = FiniteStateMachine::with_factory(factory, StateId::Chatter).unwrap();

        let result = fsm.step(&clock_at(3)).unwrap();

        assert_eq!(result.current(), StateId::Quiet);
        assert!(result.actions().contains(&Action::chatter("first")));
        assert!(!result.actions().contains(&Action::chatter("second")));
    }

    #[test]
    fn unconditional_transition_fires_after_conditionals_miss() {
        let factory = StateFactory::standard().register(StateId::Quiet, || {
            StateBuilder::new(StateId::Quiet)
                .add_transition(at_times(StateId::Chatter, [5], vec![]))
                .add_transition(unconditional(StateId::Dummy, vec![]))
                .build()
        });
        let mut fsm = FiniteStateMachine::with_factory(factory, StateId::Quiet).unwrap();

        assert_eq!(fsm.step(&clock_at(0)).unwrap().current(), StateId::Dummy);
    }

    #[test]
    fn target_is_a_fresh_instance() {
        let mut fsm = FiniteStateMachine::new().unwrap();

        fsm.tick(&clock_at(2)).unwrap();
        fsm.tick(&clock_at(4)).unwrap();

        assert_eq!(fsm.current_state(), &catalog::chatter_state().unwrap());
    }

    #[test]
    fn missing_target_is_fatal_and_keeps_current_state() {
        let factory = StateFactory::new().register(StateId::Chatter, catalog::chatter_state);
        let mut fsm = FiniteStateMachine::with_factory(factory, StateId::Chatter).unwrap();

        let err = fsm.tick(&clock_at(2)).unwrap_err();

        assert!(matches!(err, FsmError::InvalidIdentifier { ref name } if name == "Quiet"));
        assert_eq!(fsm.current_state().id(), StateId::Chatter);
    }

    #[test]
    fn unregistered_initial_state_is_rejected() {
        let result = FiniteStateMachine::with_factory(StateFactory::new(), StateId::Chatter);
        assert!(matches!(result, Err(FsmError::InvalidIdentifier { .. })));
    }
}
