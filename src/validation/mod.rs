//! Validation of state catalogs before a machine runs them.
//!
//! Every registered state is built once and checked against the rules
//! below. Stillwater's `Validation` accumulates every violation instead of
//! stopping at the first, so one pass reports the whole catalog.
//!
//! # Example
//!
//! ```rust
//! use agent_fsm::machine::StateFactory;
//! use agent_fsm::validation::validate_catalog;
//!
//! assert!(validate_catalog(&StateFactory::standard(), 12).is_success());
//! assert!(validate_catalog(&StateFactory::standard(), 4).is_failure());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::RulesBuilder;
pub use rules::{StateCheck, ValidationRules};
pub use violations::CatalogViolation;

use crate::machine::StateFactory;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate `factory` against the structural rules for a clock of `modulus`.
pub fn validate_catalog(
    factory: &StateFactory,
    modulus: u32,
) -> Validation<(), NonEmptyVec<CatalogViolation>> {
    RulesBuilder::new().modulus(modulus).build().validate(factory)
}
