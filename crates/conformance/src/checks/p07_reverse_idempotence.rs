//! P7: Reading the pills twice gives the same terms.

use narrowbar_pills::get_current_search_pill_terms;

use super::{ensure, reconcile};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p07_reverse_idempotence<T: TestableSearch>(search: &T) -> CheckResult {
    let (widget, _) = reconcile(search, &fixtures::pillable_terms())?;
    let first = get_current_search_pill_terms(&widget);
    let second = get_current_search_pill_terms(&widget);
    ensure(first == second, || {
        format!("P7: first read {first:?}, second read {second:?}")
    })
}
