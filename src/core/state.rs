//! State identifiers and state descriptors.

use super::action::Action;
use super::transition::Transition;
use crate::machine::FsmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names a state for construction by the
/// [`StateFactory`](crate::machine::StateFactory).
///
/// Identifiers carry no behavior themselves.
///
/// # Example
///
/// ```rust
/// use agent_fsm::core::StateId;
///
/// let id: StateId = "quiet".parse().unwrap();
/// assert_eq!(id, StateId::Quiet);
/// assert_eq!(id.name(), "Quiet");
/// assert!("sleepy".parse::<StateId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum StateId {
    Chatter,
    Quiet,
    Dummy,
}

impl StateId {
    /// Every known identifier, in declaration order.
    pub const ALL: [StateId; 3] = [Self::Chatter, Self::Quiet, Self::Dummy];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Chatter => "Chatter",
            Self::Quiet => "Quiet",
            Self::Dummy => "Dummy",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StateId {
    type Err = FsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FsmError::InvalidIdentifier {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for StateId {
    type Error = FsmError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// A fully constructed state: what it does while current, on entry, on
/// exit, and where it can go.
///
/// A fresh `State` is built every time its identifier becomes current, so
/// it never remembers earlier visits. All accessors are read-only views of
/// sequences that were fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    id: StateId,
    actions: Vec<Action>,
    entry_actions: Vec<Action>,
    exit_actions: Vec<Action>,
    transitions: Vec<Transition>,
}

impl State {
    pub(crate) fn from_parts(
        id: StateId,
        actions: Vec<Action>,
        entry_actions: Vec<Action>,
        exit_actions: Vec<Action>,
        transitions: Vec<Transition>,
    ) -> Self {
        Self {
            id,
            actions,
            entry_actions,
            exit_actions,
            transitions,
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    /// Actions run on a tick where no transition fires.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Actions run on the tick this state becomes current.
    pub fn entry_actions(&self) -> &[Action] {
        &self.entry_actions
    }

    /// Actions run on the tick this state stops being current.
    pub fn exit_actions(&self) -> &[Action] {
        &self.exit_actions
    }

    /// Outgoing transitions in evaluation order. First match wins.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}
