//! Property-based tests for the clock, conditions and evaluation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use agent_fsm::builder::{at_times, StateBuilder};
use agent_fsm::core::{Clock, State, StateId, TimeRange, TimeRangeCondition};
use agent_fsm::machine::{FiniteStateMachine, StateFactory, StepResult};
use proptest::prelude::*;

fn clock_at(modulus: u32, time: u32) -> Clock {
    let mut clock = Clock::new(modulus).unwrap();
    for _ in 0..time {
        clock.advance();
    }
    clock
}

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> StateId {
        match variant {
            0 => StateId::Chatter,
            1 => StateId::Quiet,
            _ => StateId::Dummy,
        }
    }
}

prop_compose! {
    fn arbitrary_range()(min in 0..12u32, len in 0..4u32) -> TimeRange {
        TimeRange::new(min, (min + len).min(11))
    }
}

proptest! {
    #[test]
    fn clock_stays_below_modulus(modulus in 1..50u32, steps in 0..200u32) {
        let clock = clock_at(modulus, steps);
        prop_assert!(clock.now() < modulus);
        prop_assert_eq!(clock.now(), steps % modulus);
    }

    #[test]
    fn point_condition_matches_only_its_time(target in 0..12u32, now in 0..12u32) {
        let condition = TimeRangeCondition::new(vec![TimeRange::at(target)]);
        prop_assert_eq!(condition.test(&clock_at(12, now)), now == target);
    }

    #[test]
    fn condition_matches_iff_some_range_contains_now(
        ranges in prop::collection::vec(arbitrary_range(), 0..4),
        now in 0..12u32,
    ) {
        let expected = ranges.iter().any(|r| r.min <= now && now <= r.max);
        let condition = TimeRangeCondition::new(ranges);
        prop_assert_eq!(condition.test(&clock_at(12, now)), expected);
    }

    #[test]
    fn is_triggered_is_idempotent(state in arbitrary_state(), now in 0..12u32) {
        let current = StateFactory::standard().build(state).unwrap();
        let clock = clock_at(12, now);

        for transition in current.transitions() {
            let result1 = transition.is_triggered(&clock);
            let result2 = transition.is_triggered(&clock);
            prop_assert_eq!(result1, result2);
        }
    }

    #[test]
    fn step_returns_defaults_or_exit_transition_entry(
        initial in arbitrary_state(),
        now in 0..12u32,
    ) {
        let factory = StateFactory::standard();
        let before = factory.build(initial).unwrap();
        let mut fsm = FiniteStateMachine::with_factory(StateFactory::standard(), initial).unwrap();
        let address = fsm.current_state() as *const State;
        let defaults = fsm.current_state().actions().as_ptr();

        match fsm.step(&clock_at(12, now)).unwrap() {
            StepResult::Stayed { state, actions } => {
                prop_assert_eq!(state, initial);
                prop_assert_eq!(actions.as_slice(), before.actions());
                prop_assert_eq!(fsm.current_state(), &before);
                prop_assert_eq!(fsm.current_state() as *const State, address);
                prop_assert_eq!(fsm.current_state().actions().as_ptr(), defaults);
            }
            StepResult::Transitioned { from, to, actions } => {
                let fired = before
                    .transitions()
                    .iter()
                    .find(|t| t.is_triggered(&clock_at(12, now)))
                    .unwrap();
                let target = factory.build(to).unwrap();

                let mut expected = before.exit_actions().to_vec();
                expected.extend_from_slice(fired.actions());
                expected.extend_from_slice(target.entry_actions());

                prop_assert_eq!(from, initial);
                prop_assert_eq!(to, fired.target_state());
                prop_assert_eq!(actions, expected);
                prop_assert_eq!(fsm.current_state(), &target);
            }
        }
    }

    #[test]
    fn first_triggered_transition_wins(times in prop::collection::vec(0..12u32, 1..4), now in 0..12u32) {
        let first = times.clone();
        let factory = StateFactory::standard().register(StateId::Quiet, move || {
            StateBuilder::new(StateId::Quiet)
                .add_transition(at_times(StateId::Chatter, first.clone(), vec![]))
                .add_transition(at_times(StateId::Dummy, 0..12, vec![]))
                .build()
        });
        let mut fsm = FiniteStateMachine::with_factory(factory, StateId::Quiet).unwrap();

        let expected = if times.contains(&now) { StateId::Chatter } else { StateId::Dummy };
        prop_assert_eq!(fsm.step(&clock_at(12, now)).unwrap().current(), expected);
    }
}
