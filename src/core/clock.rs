//! Cycling tick counter read by conditions.

use crate::machine::FsmError;

/// Default number of ticks in one clock cycle.
pub const DEFAULT_MODULUS: u32 = 12;

/// Monotonically advancing counter that wraps at a fixed modulus.
///
/// The clock is owned by the driver and passed by reference into
/// [`FiniteStateMachine::tick`](crate::machine::FiniteStateMachine::tick).
/// Only the driver advances it, once per tick, after the returned actions
/// have run.
///
/// # Example
///
/// ```rust
/// use agent_fsm::core::Clock;
///
/// let mut clock = Clock::new(3).unwrap();
/// assert_eq!(clock.now(), 0);
/// clock.advance();
/// clock.advance();
/// assert_eq!(clock.now(), 2);
/// clock.advance();
/// assert_eq!(clock.now(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    now: u32,
    modulus: u32,
}

impl Clock {
    /// Create a clock at time 0 that wraps at `modulus`.
    ///
    /// A modulus of 0 has no valid time values and is rejected.
    pub fn new(modulus: u32) -> Result<Self, FsmError> {
        if modulus == 0 {
            return Err(FsmError::InvalidModulus(modulus));
        }
        Ok(Self { now: 0, modulus })
    }

    /// Current time, always in `[0, modulus)`.
    pub fn now(&self) -> u32 {
        self.now
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Move forward one tick, wrapping to 0 on reaching the modulus.
    pub fn advance(&mut self) {
        self.now += 1;
        if self.now >= self.modulus {
            self.now = 0;
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            now: 0,
            modulus: DEFAULT_MODULUS,
        }
    }
}
