//! P2: Partial term.
//!
//! A trailing operator with no operand is never pilled and is always the
//! last thing in the search bar text, whatever precedes it.

use narrowbar_pills::PillContainer;

use super::{ensure, reconcile, unparse_each};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p02_partial_term<T: TestableSearch>(search: &T) -> CheckResult {
    let partial = fixtures::partial_term();
    let partial_text = unparse_each(search, std::slice::from_ref(&partial)).remove(0);

    // Alone.
    let (widget, search_bar) = reconcile(search, std::slice::from_ref(&partial))?;
    ensure(widget.items().is_empty(), || {
        "P2: lone partial term was pilled".to_string()
    })?;
    ensure(search_bar.text == partial_text, || {
        format!("P2: text '{}', expected '{partial_text}'", search_bar.text)
    })?;
    ensure(!search_bar.is_shaking(), || {
        "P2: partial term shook the search bar".to_string()
    })?;

    // After pills, search words and invalid terms.
    let mut terms = fixtures::pillable_terms();
    let pill_count = terms.len();
    terms.insert(1, fixtures::search_term("hello"));
    terms.insert(0, fixtures::invalid_terms().remove(0));
    terms.push(partial);
    let (widget, search_bar) = reconcile(search, &terms)?;
    ensure(widget.items().len() == pill_count, || {
        format!("P2: {} pills, expected {pill_count}", widget.items().len())
    })?;
    ensure(search_bar.text.ends_with(&partial_text), || {
        format!(
            "P2: text '{}' does not end with the partial term '{partial_text}'",
            search_bar.text
        )
    })
}
