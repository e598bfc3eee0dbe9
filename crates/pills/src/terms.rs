//! Reverse direction: read the pills back out as narrow terms.

use narrowbar_core::NarrowTerm;

use crate::container::PillContainer;
use crate::pill::SearchPill;

/// The terms the current pills stand for, one per pill, in pill order.
///
/// Operands are recomputed from each pill rather than read from its
/// stored text, so edits made through the widget are reflected.
pub fn get_current_search_pill_terms(pill_widget: &dyn PillContainer) -> Vec<NarrowTerm> {
    pill_widget
        .items()
        .iter()
        .map(SearchPill::to_term)
        .collect()
}
