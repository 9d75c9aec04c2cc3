//! Errors raised while running the machine.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while constructing states or ticking the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// The factory has no constructor for this identifier, or a name
    /// matched no known identifier. Fatal; never retried.
    #[error("Invalid state identifier '{name}'")]
    InvalidIdentifier { name: String },

    #[error("Clock modulus must be positive, got {0}")]
    InvalidModulus(u32),

    #[error("State construction failed: {0}")]
    Build(#[from] BuildError),
}
