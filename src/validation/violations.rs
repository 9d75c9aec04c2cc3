//! Violations found while validating a state catalog.

use crate::core::StateId;
use thiserror::Error;

/// A structural problem with a registered state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogViolation {
    #[error("Catalog has no registered states")]
    EmptyCatalog,

    #[error("State {state} could not be built: {reason}")]
    ConstructionFailed { state: StateId, reason: String },

    #[error("Constructor registered for {registered} built {built}")]
    IdentifierMismatch { registered: StateId, built: StateId },

    #[error("State {state} has no transitions")]
    NoTransitions { state: StateId },

    #[error("State {state} has an unconditional transition at position {position} that is not last")]
    UnconditionalNotLast { state: StateId, position: usize },

    #[error("State {state} has inverted time range [{min}, {max}]")]
    InvertedRange { state: StateId, min: u32, max: u32 },

    #[error("State {state} has time range [{min}, {max}] outside clock cycle 0..{modulus}")]
    RangeOutsideClock {
        state: StateId,
        min: u32,
        max: u32,
        modulus: u32,
    },

    #[error("State {state} targets unregistered state {target}")]
    UnknownTarget { state: StateId, target: StateId },

    #[error("State {state} failed custom check: {message}")]
    CustomCheckFailed { state: StateId, message: String },
}
