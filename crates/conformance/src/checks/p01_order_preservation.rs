//! P1: Pill order.
//!
//! N distinct pillable terms produce exactly N pills in input order, with
//! no trailing text and no shake.

use narrowbar_pills::PillContainer;

use super::{ensure, reconcile};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p01_order_preservation<T: TestableSearch>(search: &T) -> CheckResult {
    let terms = fixtures::pillable_terms();
    let (widget, search_bar) = reconcile(search, &terms)?;

    let operators: Vec<&str> = widget.items().iter().map(|p| p.operator()).collect();
    let expected: Vec<&str> = terms.iter().map(|t| t.operator.as_str()).collect();
    ensure(operators == expected, || {
        format!("P1: pill operators {operators:?}, expected {expected:?}")
    })?;
    ensure(search_bar.text.is_empty(), || {
        format!("P1: unexpected search bar text '{}'", search_bar.text)
    })?;
    ensure(!search_bar.is_shaking(), || {
        "P1: search bar shook with only valid terms".to_string()
    })
}
