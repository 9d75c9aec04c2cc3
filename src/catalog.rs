//! Built-in agent states.
//!
//! The agent chats by default, falls quiet at time 2, and wakes at 4 or 9.
//! At time 6 it passes through a transient dummy state that hands off to
//! quiet on the very next tick.

use crate::builder::{at_times, unconditional, BuildError, StateBuilder};
use crate::core::{Action, State, StateId};

pub fn chatter_state() -> Result<State, BuildError> {
    StateBuilder::new(StateId::Chatter)
        .action(Action::Greeting)
        .action(Action::chatter("State"))
        .on_entry(Action::chatter("Entry"))
        .on_exit(Action::chatter("Exit"))
        .add_transition(at_times(
            StateId::Quiet,
            [2],
            vec![Action::chatter("Transition from")],
        ))
        .add_transition(at_times(
            StateId::Dummy,
            [6],
            vec![Action::chatter("Transition from")],
        ))
        .build()
}

pub fn quiet_state() -> Result<State, BuildError> {
    StateBuilder::new(StateId::Quiet)
        .action(Action::quiet("State"))
        .on_entry(Action::quiet("Entry"))
        .on_exit(Action::quiet("Exit"))
        .add_transition(at_times(
            StateId::Chatter,
            [4, 9],
            vec![Action::quiet("Transition from")],
        ))
        .build()
}

pub fn dummy_state() -> Result<State, BuildError> {
    StateBuilder::new(StateId::Dummy)
        .action(Action::dummy("State"))
        .on_entry(Action::dummy("Entry"))
        .on_exit(Action::dummy("Exit"))
        .add_transition(unconditional(
            StateId::Quiet,
            vec![Action::dummy("Transition from")],
        ))
        .build()
}
