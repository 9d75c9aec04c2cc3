//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, StateId, TimeRange, TimeRangeCondition, Transition, Trigger};

/// Builder for constructing transitions with a fluent API.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    target: Option<StateId>,
    conditions: Vec<TimeRangeCondition>,
    always: bool,
    actions: Vec<Action>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target state (required).
    pub fn to(mut self, target: StateId) -> Self {
        self.target = Some(target);
        self
    }

    /// Add a condition. Conditions are OR-combined.
    pub fn when(mut self, condition: TimeRangeCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Fire when the clock reads any of the given times.
    pub fn when_at<I>(self, times: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let ranges = times.into_iter().map(TimeRange::at).collect();
        self.when(TimeRangeCondition::new(ranges))
    }

    /// Fire while the clock is within `[min, max]`.
    pub fn when_between(self, min: u32, max: u32) -> Self {
        self.when(TimeRangeCondition::new(vec![TimeRange::new(min, max)]))
    }

    /// Fire on every tick.
    pub fn always(mut self) -> Self {
        self.always = true;
        self
    }

    /// Append an action run during the hand-off.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        let trigger = match (self.always, self.conditions.is_empty()) {
            (true, true) => Trigger::Always,
            (true, false) => return Err(BuildError::ConflictingTrigger),
            (false, true) => return Err(BuildError::MissingTrigger),
            (false, false) => {
                if let Some(range) = self
                    .conditions
                    .iter()
                    .flat_map(|c| c.ranges())
                    .find(|r| r.min > r.max)
                {
                    return Err(BuildError::InvertedTimeRange {
                        min: range.min,
                        max: range.max,
                    });
                }
                Trigger::AnyOf(self.conditions)
            }
        };

        Ok(Transition::new(trigger, target, self.actions))
    }
}
