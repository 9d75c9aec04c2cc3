//! Builder API for creating validation rules.

use crate::core::{State, DEFAULT_MODULUS};
use crate::validation::rules::{StateCheck, ValidationRules};
use crate::validation::violations::CatalogViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating validation rules
pub struct RulesBuilder {
    modulus: u32,
    required_checks: Vec<StateCheck>,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            required_checks: Vec::new(),
        }
    }

    /// Set the clock modulus time ranges must fit in
    pub fn modulus(mut self, modulus: u32) -> Self {
        self.modulus = modulus;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&State) -> Validation<(), NonEmptyVec<CatalogViolation>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&State) -> bool + Send + Sync + 'static,
    {
        let check = move |state: &State| {
            if predicate(state) {
                Validation::success(())
            } else {
                Validation::fail(CatalogViolation::CustomCheckFailed {
                    state: state.id(),
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the validation rules
    pub fn build(self) -> ValidationRules {
        ValidationRules {
            modulus: self.modulus,
            required_checks: self.required_checks,
        }
    }
}

impl Default for RulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
