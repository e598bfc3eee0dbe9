//! Confirmed text to pill: the widget's text-to-item hook.

use narrowbar_core::{NarrowTerm, TermSyntax};
use tracing::debug;

use crate::error::PillRejection;
use crate::pill::{SearchPill, SearchTermPill};

/// Turn one confirmed search token into a pill.
///
/// The token must hold exactly one term. No partial, full-text or user
/// handling happens here: a valid term always becomes a plain pill whose
/// text is the token as typed.
pub fn create_item_from_search_string(
    search_string: &str,
    syntax: &dyn TermSyntax,
) -> Result<SearchPill, PillRejection> {
    let search_terms = syntax.parse(search_string);
    let count = search_terms.len();
    let Ok([search_term]) = <[NarrowTerm; 1]>::try_from(search_terms) else {
        debug!(search_string, count, "search pill text is not one term");
        return Err(PillRejection::NotSingleTerm { count });
    };

    if !syntax.is_valid_search_term(&search_term) {
        debug!(search_string, "rejected invalid search pill");
        return Err(PillRejection::InvalidTerm {
            search_string: search_string.to_string(),
        });
    }

    Ok(SearchPill::Search(SearchTermPill::from_term(
        &search_term,
        search_string,
    )))
}

/// The text a pill contributes when the widget's contents are read as text.
pub fn get_search_string_from_item(item: &SearchPill) -> &str {
    item.display_value()
}
