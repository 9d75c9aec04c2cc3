//! Clock-driven predicates that gate transitions.
//!
//! Conditions are pure: they read the clock and nothing else, so they may be
//! evaluated any number of times within a tick and always agree.

use super::clock::Clock;
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` of clock values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: u32,
    pub max: u32,
}

impl TimeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Interval holding exactly one clock value.
    pub fn at(time: u32) -> Self {
        Self::new(time, time)
    }

    /// Check whether `now` lies within the interval, bounds inclusive.
    pub fn contains(&self, now: u32) -> bool {
        now >= self.min && now <= self.max
    }
}

/// Satisfied when the clock falls inside any of its ranges.
///
/// # Example
///
/// ```rust
/// use agent_fsm::core::{Clock, TimeRange, TimeRangeCondition};
///
/// let condition = TimeRangeCondition::new(vec![TimeRange::at(4), TimeRange::at(9)]);
/// let mut clock = Clock::default();
///
/// assert!(!condition.test(&clock));
/// for _ in 0..4 {
///     clock.advance();
/// }
/// assert!(condition.test(&clock));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeCondition {
    ranges: Vec<TimeRange>,
}

impl TimeRangeCondition {
    pub fn new(ranges: Vec<TimeRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    /// Test the condition against the current clock value.
    ///
    /// Ranges are checked in order and the first match short-circuits.
    /// An empty range list never matches.
    pub fn test(&self, clock: &Clock) -> bool {
        let now = clock.now();
        self.ranges.iter().any(|range| range.contains(now))
    }
}

/// What makes a transition eligible to fire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// Fires when any of the conditions holds.
    AnyOf(Vec<TimeRangeCondition>),
    /// Fires on every tick.
    Always,
}

impl Trigger {
    /// Trigger on a single range condition.
    pub fn when(condition: TimeRangeCondition) -> Self {
        Self::AnyOf(vec![condition])
    }

    pub fn is_unconditional(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Evaluate against the clock. Pure.
    pub fn test(&self, clock: &Clock) -> bool {
        match self {
            Self::AnyOf(conditions) => conditions.iter().any(|c| c.test(clock)),
            Self::Always => true,
        }
    }
}
