//! P6: Full-text search terms stay text.

use narrowbar_pills::PillContainer;

use super::{ensure, reconcile};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p06_search_demotion<T: TestableSearch>(search: &T) -> CheckResult {
    let term = fixtures::search_term("hello world");
    let (widget, search_bar) = reconcile(search, &[term])?;

    ensure(widget.items().is_empty(), || {
        "P6: search term was pilled".to_string()
    })?;
    ensure(search_bar.text == "hello world", || {
        format!("P6: text '{}', expected 'hello world'", search_bar.text)
    })?;
    ensure(!search_bar.is_shaking(), || {
        "P6: search term shook the search bar".to_string()
    })
}
