//! The evaluation core: state construction and per-tick evaluation.
//!
//! # Key Concepts
//!
//! - **Factory**: builds a fresh state for an identifier on every entry
//! - **Machine**: owns the current state, evaluates it once per tick, and
//!   returns the ordered actions for the caller to run
//!
//! One tick runs to completion before returning. The driver executes the
//! returned actions and then advances the clock.

mod error;
mod factory;
mod fsm;

pub use error::FsmError;
pub use factory::{StateConstructor, StateFactory};
pub use fsm::{FiniteStateMachine, StepResult};
