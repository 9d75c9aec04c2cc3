//! Side-effecting work returned by the machine for the driver to run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of effectful work with no return value.
///
/// Actions are plain values: the machine only collects and orders them.
/// Running them is the caller's job, via [`Action::execute`] or
/// [`run_actions`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Says hello.
    Greeting,
    /// Chatty announcement tagged with a phase label.
    Chatter(String),
    /// Quiet announcement tagged with a phase label.
    Quiet(String),
    /// Announcement from the transient dummy state.
    Dummy(String),
}

impl Action {
    pub fn chatter(label: impl Into<String>) -> Self {
        Self::Chatter(label.into())
    }

    pub fn quiet(label: impl Into<String>) -> Self {
        Self::Quiet(label.into())
    }

    pub fn dummy(label: impl Into<String>) -> Self {
        Self::Dummy(label.into())
    }

    /// The diagnostic line this action emits.
    ///
    /// ```rust
    /// use agent_fsm::core::Action;
    ///
    /// assert_eq!(Action::Greeting.line(), "[Action] Hello");
    /// assert_eq!(Action::chatter("Entry").line(), "[Action] Entry Chatter!!!");
    /// ```
    pub fn line(&self) -> String {
        self.to_string()
    }

    /// Run the action, printing its line to stdout.
    pub fn execute(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greeting => write!(f, "[Action] Hello"),
            Self::Chatter(label) => write!(f, "[Action] {label} Chatter!!!"),
            Self::Quiet(label) => write!(f, "[Action] {label} Quiet..."),
            Self::Dummy(label) => write!(f, "[Action] {label} Dummy"),
        }
    }
}

/// Execute every action in order.
pub fn run_actions(actions: &[Action]) {
    for action in actions {
        action.execute();
    }
}
