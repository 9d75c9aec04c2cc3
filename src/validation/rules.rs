//! Catalog validation rules using Validation.

use crate::core::{State, StateId, Trigger};
use crate::machine::StateFactory;
use crate::validation::violations::CatalogViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom per-state checks
pub type StateCheck =
    Box<dyn Fn(&State) -> Validation<(), NonEmptyVec<CatalogViolation>> + Send + Sync>;

/// Rules applied to every state a factory can build.
/// Uses Validation to accumulate ALL violations.
pub struct ValidationRules {
    pub(crate) modulus: u32,
    pub(crate) required_checks: Vec<StateCheck>,
}

impl ValidationRules {
    /// Validate every registered state, accumulating ALL violations.
    ///
    /// Each state is built once through the factory. Structural checks run
    /// first, then any custom checks.
    pub fn validate(&self, factory: &StateFactory) -> Validation<(), NonEmptyVec<CatalogViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CatalogViolation>>> = Vec::new();

        let ids: Vec<StateId> = factory.ids().collect();
        if ids.is_empty() {
            checks.push(Validation::fail(CatalogViolation::EmptyCatalog));
        }

        for id in ids {
            let state = match factory.build(id) {
                Ok(state) => state,
                Err(err) => {
                    checks.push(Validation::fail(CatalogViolation::ConstructionFailed {
                        state: id,
                        reason: err.to_string(),
                    }));
                    continue;
                }
            };

            checks.push(check(state.id() == id, || {
                CatalogViolation::IdentifierMismatch {
                    registered: id,
                    built: state.id(),
                }
            }));
            checks.push(check(!state.transitions().is_empty(), || {
                CatalogViolation::NoTransitions { state: id }
            }));
            self.check_transitions(id, &state, factory, &mut checks);

            for check_fn in &self.required_checks {
                checks.push(check_fn(&state));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    fn check_transitions(
        &self,
        id: StateId,
        state: &State,
        factory: &StateFactory,
        checks: &mut Vec<Validation<(), NonEmptyVec<CatalogViolation>>>,
    ) {
        let last = state.transitions().len().saturating_sub(1);

        for (position, transition) in state.transitions().iter().enumerate() {
            let target = transition.target_state();
            checks.push(check(factory.contains(target), || {
                CatalogViolation::UnknownTarget { state: id, target }
            }));

            match transition.trigger() {
                Trigger::Always => checks.push(check(position == last, || {
                    CatalogViolation::UnconditionalNotLast {
                        state: id,
                        position,
                    }
                })),
                Trigger::AnyOf(conditions) => {
                    for range in conditions.iter().flat_map(|c| c.ranges()) {
                        let violation = if range.min > range.max {
                            Some(CatalogViolation::InvertedRange {
                                state: id,
                                min: range.min,
                                max: range.max,
                            })
                        } else if range.max >= self.modulus {
                            Some(CatalogViolation::RangeOutsideClock {
                                state: id,
                                min: range.min,
                                max: range.max,
                                modulus: self.modulus,
                            })
                        } else {
                            None
                        };
                        checks.push(match violation {
                            Some(v) => Validation::fail(v),
                            None => Validation::success(()),
                        });
                    }
                }
            }
        }
    }
}

fn check<F>(ok: bool, violation: F) -> Validation<(), NonEmptyVec<CatalogViolation>>
where
    F: FnOnce() -> CatalogViolation,
{
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}
