//! Agent FSM: a tick-driven decision engine for autonomous agents
//!
//! Once per external tick the machine decides whether the agent should
//! change behavior and which actions to run. States own their default,
//! entry and exit actions plus an ordered list of transitions; the first
//! transition whose trigger holds hands off to a freshly built target state.
//!
//! # Core Concepts
//!
//! - **Clock**: cycling counter the driver advances after each tick
//! - **Trigger**: pure predicate over the clock gating a transition
//! - **State**: default, entry and exit actions plus outgoing transitions
//! - **Machine**: evaluates the current state and returns actions in
//!   exit, transition, entry order
//!
//! # Example
//!
//! ```rust
//! use agent_fsm::core::{Clock, StateId};
//! use agent_fsm::machine::FiniteStateMachine;
//!
//! let mut fsm = FiniteStateMachine::new().unwrap();
//! let mut clock = Clock::default();
//!
//! let mut visited = Vec::new();
//! for _ in 0..clock.modulus() {
//!     for action in fsm.tick(&clock).unwrap() {
//!         action.execute();
//!     }
//!     visited.push(fsm.current_state().id());
//!     clock.advance();
//! }
//!
//! assert_eq!(visited[2], StateId::Quiet);
//! assert_eq!(visited[6], StateId::Dummy);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Action, Clock, State, StateId, Transition, Trigger};
pub use machine::{FiniteStateMachine, FsmError, StateFactory, StepResult};
