//! Search pill conformance suite.
//!
//! Provides a [`TestableSearch`] trait and the `pill_conformance_tests!`
//! macro for checking that a term grammar and people directory, plugged
//! into the pill reconciler, keep the search bar's observable guarantees:
//! pill order, trailing partial terms, grouped demoted text, user pill
//! expansion and a faithful reverse mapping.

pub mod checks;
pub mod fixtures;
pub mod suite;
pub mod traits;

pub use traits::*;
