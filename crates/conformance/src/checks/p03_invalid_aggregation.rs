//! P3: Invalid terms.
//!
//! Invalid terms are kept as text in their input order, and the search
//! bar shakes exactly once per pass however many there are.

use narrowbar_pills::PillContainer;

use super::{ensure, reconcile, unparse_each};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p03_invalid_aggregation<T: TestableSearch>(search: &T) -> CheckResult {
    let invalid = fixtures::invalid_terms();
    let valid = fixtures::pillable_terms();

    // Interleave: invalid, valid, invalid, valid, ...
    let mut terms = Vec::new();
    for (index, term) in invalid.iter().enumerate() {
        terms.push(term.clone());
        terms.push(valid[index].clone());
    }

    let (widget, search_bar) = reconcile(search, &terms)?;
    let expected = unparse_each(search, &invalid).join(" ");
    ensure(search_bar.text == expected, || {
        format!("P3: text '{}', expected '{expected}'", search_bar.text)
    })?;
    ensure(search_bar.shake_count == 1, || {
        format!("P3: shook {} times, expected once", search_bar.shake_count)
    })?;
    ensure(widget.items().len() == invalid.len(), || {
        format!(
            "P3: {} pills, expected {}",
            widget.items().len(),
            invalid.len()
        )
    })
}
