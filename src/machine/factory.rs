//! Construction of fresh state instances by identifier.

use crate::builder::BuildError;
use crate::catalog;
use crate::core::{State, StateId};
use crate::machine::error::FsmError;
use std::collections::BTreeMap;
use tracing::debug;

/// Type alias for state constructors.
/// Each call must produce a brand-new state.
pub type StateConstructor = Box<dyn Fn() -> Result<State, BuildError> + Send + Sync>;

/// Maps identifiers to constructors of fresh states.
///
/// The machine asks the factory for a new instance every time a state
/// becomes current, so no state carries memory between visits.
///
/// # Example
///
/// ```rust
/// use agent_fsm::core::StateId;
/// use agent_fsm::machine::{FsmError, StateFactory};
///
/// let factory = StateFactory::standard();
/// let quiet = factory.build(StateId::Quiet).unwrap();
/// assert_eq!(quiet.id(), StateId::Quiet);
///
/// let empty = StateFactory::new();
/// assert!(matches!(
///     empty.build(StateId::Quiet),
///     Err(FsmError::InvalidIdentifier { .. })
/// ));
/// ```
#[derive(Default)]
pub struct StateFactory {
    constructors: BTreeMap<StateId, StateConstructor>,
}

impl StateFactory {
    /// Create a factory with no registered states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory holding the built-in Chatter, Quiet and Dummy states.
    pub fn standard() -> Self {
        Self::new()
            .register(StateId::Chatter, catalog::chatter_state)
            .register(StateId::Quiet, catalog::quiet_state)
            .register(StateId::Dummy, catalog::dummy_state)
    }

    /// Register a constructor, replacing any previous one for `id`.
    pub fn register<F>(mut self, id: StateId, constructor: F) -> Self
    where
        F: Fn() -> Result<State, BuildError> + Send + Sync + 'static,
    {
        self.constructors.insert(id, Box::new(constructor));
        self
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.constructors.contains_key(&id)
    }

    /// Registered identifiers in identifier order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.constructors.keys().copied()
    }

    /// Build a fresh instance of the state named by `id`.
    ///
    /// Fails with [`FsmError::InvalidIdentifier`] when nothing is registered
    /// for `id`; no constructor runs in that case.
    pub fn build(&self, id: StateId) -> Result<State, FsmError> {
        let constructor =
            self.constructors
                .get(&id)
                .ok_or_else(|| FsmError::InvalidIdentifier {
                    name: id.name().to_string(),
                })?;

        let state = constructor()?;
        debug!(state = %id, "state initialized");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{unconditional, StateBuilder};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn standard_factory_builds_every_identifier() {
        let factory = StateFactory::standard();

        for id in StateId::ALL {
            assert!(factory.contains(id));
            assert_eq!(factory.build(id).unwrap().id(), id);
        }
    }

    #[test]
    fn unregistered_identifier_is_invalid() {
        let factory = StateFactory::new().register(StateId::Chatter, catalog::chatter_state);

        let err = factory.build(StateId::Dummy).unwrap_err();
        assert_eq!(
            err,
            FsmError::InvalidIdentifier {
                name: "Dummy".to_string()
            }
        );
    }

    #[test]
    fn unregistered_identifier_constructs_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = StateFactory::new().register(StateId::Quiet, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            catalog::quiet_state()
        });

        assert!(factory.build(StateId::Chatter).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        factory.build(StateId::Quiet).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn every_build_runs_the_constructor_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = StateFactory::new().register(StateId::Dummy, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            catalog::dummy_state()
        });

        factory.build(StateId::Dummy).unwrap();
        factory.build(StateId::Dummy).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn constructor_errors_propagate() {
        let factory = StateFactory::new().register(StateId::Quiet, || {
            StateBuilder::new(StateId::Quiet).build()
        });

        assert_eq!(
            factory.build(StateId::Quiet).unwrap_err(),
            FsmError::Build(BuildError::NoTransitions)
        );
    }

    #[test]
    fn register_replaces_previous_constructor() {
        let factory = StateFactory::standard().register(StateId::Quiet, || {
            StateBuilder::new(StateId::Quiet)
                .add_transition(unconditional(StateId::Chatter, vec![]))
                .build()
        });

        let quiet = factory.build(StateId::Quiet).unwrap();
        assert!(quiet.actions().is_empty());
        assert_eq!(factory.ids().count(), 3);
    }
}
