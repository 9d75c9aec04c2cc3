//! Build errors for state and transition builders.

use thiserror::Error;

/// Errors that can occur when building states and transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Transition target state not specified. Call .to(state)")]
    MissingTarget,

    #[error("Transition trigger not specified. Call .when(..) or .always()")]
    MissingTrigger,

    #[error("Transition cannot be both unconditional and time-gated")]
    ConflictingTrigger,

    #[error("Time range [{min}, {max}] is inverted")]
    InvertedTimeRange { min: u32, max: u32 },

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Unconditional transition at position {position} is followed by other transitions")]
    UnconditionalNotLast { position: usize },
}
