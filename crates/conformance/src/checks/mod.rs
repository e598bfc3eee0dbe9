//! One module per conformance property. Each check builds a fresh widget
//! and search bar, so checks are independent of each other.

pub mod p01_order_preservation;
pub mod p02_partial_term;
pub mod p03_invalid_aggregation;
pub mod p04_user_expansion;
pub mod p05_round_trip;
pub mod p06_search_demotion;
pub mod p07_reverse_idempotence;
pub mod p08_user_metadata;
pub mod p09_demotion_order;
pub mod p10_single_token;

use narrowbar_core::NarrowTerm;
use narrowbar_pills::{
    create_pills, set_search_bar_contents, PillWidgetOptions, SearchBarState, SearchPillWidget,
};

use crate::traits::TestableSearch;

/// Run one forward pass over `terms` into a fresh search bar.
pub(crate) fn reconcile<T: TestableSearch>(
    search: &T,
    terms: &[NarrowTerm],
) -> Result<(SearchPillWidget, SearchBarState), String> {
    let mut widget = create_pills(PillWidgetOptions::default());
    let mut search_bar = SearchBarState::new();
    set_search_bar_contents(
        terms,
        &mut widget,
        &mut search_bar,
        search.syntax(),
        search.people(),
    )
    .map_err(|e| format!("set_search_bar_contents failed: {e}"))?;
    Ok((widget, search_bar))
}

/// The textual form of each term, as the grammar writes it.
pub(crate) fn unparse_each<T: TestableSearch>(search: &T, terms: &[NarrowTerm]) -> Vec<String> {
    terms
        .iter()
        .map(|term| search.syntax().unparse(std::slice::from_ref(term)))
        .collect()
}

pub(crate) fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(message())
    }
}
