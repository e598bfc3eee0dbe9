//! P5: Round trip.
//!
//! Reading the pills back yields the pillable terms: same operators and
//! negation, same operands (user lists in the same order).

use narrowbar_pills::get_current_search_pill_terms;

use super::{ensure, reconcile};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p05_round_trip<T: TestableSearch>(search: &T) -> CheckResult {
    let pillable = fixtures::pillable_terms();

    // Demoted terms mixed in must not disturb the pillable subset.
    let mut terms = vec![fixtures::search_term("quarterly report")];
    terms.extend(pillable.iter().cloned());
    terms.insert(3, fixtures::invalid_terms().remove(2));
    terms.push(fixtures::partial_term());

    let (widget, _) = reconcile(search, &terms)?;
    let read_back = get_current_search_pill_terms(&widget);
    ensure(read_back == pillable, || {
        format!("P5: read back {read_back:?}, expected {pillable:?}")
    })
}
