//! Builder for constructing states.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Action, State, StateId, Transition};

/// Builder for constructing states with a fluent API.
pub struct StateBuilder {
    id: StateId,
    actions: Vec<Action>,
    entry_actions: Vec<Action>,
    exit_actions: Vec<Action>,
    transitions: Vec<Transition>,
}

impl StateBuilder {
    /// Create a new builder for the given identifier.
    pub fn new(id: StateId) -> Self {
        Self {
            id,
            actions: Vec::new(),
            entry_actions: Vec::new(),
            exit_actions: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Append a default action.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append an entry action.
    pub fn on_entry(mut self, action: Action) -> Self {
        self.entry_actions.push(action);
        self
    }

    /// Append an exit action.
    pub fn on_exit(mut self, action: Action) -> Self {
        self.exit_actions.push(action);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Build the state.
    ///
    /// Transitions keep the order they were added in. An unconditional
    /// transition must come last, since anything after it could never fire.
    pub fn build(self) -> Result<State, BuildError> {
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let last = self.transitions.len() - 1;
        if let Some(position) = self
            .transitions
            .iter()
            .position(|t| t.trigger().is_unconditional())
            .filter(|&p| p != last)
        {
            return Err(BuildError::UnconditionalNotLast { position });
        }

        Ok(State::from_parts(
            self.id,
            self.actions,
            self.entry_actions,
            self.exit_actions,
            self.transitions,
        ))
    }
}
