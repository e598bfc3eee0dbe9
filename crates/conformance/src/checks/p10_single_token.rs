//! P10: Confirmed single tokens.
//!
//! A valid one-term token becomes a plain pill carrying the token as its
//! text; invalid or multi-term tokens are rejected with a reason.

use narrowbar_core::NarrowTerm;
use narrowbar_pills::{create_item_from_search_string, PillRejection, SearchPill};

use super::{ensure, unparse_each};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p10_single_token<T: TestableSearch>(search: &T) -> CheckResult {
    let syntax = search.syntax();

    let term = NarrowTerm::new("is", "starred");
    let token = unparse_each(search, std::slice::from_ref(&term)).remove(0);
    match create_item_from_search_string(&token, syntax) {
        Ok(SearchPill::Search(pill)) => {
            ensure(pill.display_value == token, || {
                format!(
                    "P10: display value '{}', expected '{token}'",
                    pill.display_value
                )
            })?;
            ensure(
                pill.operator == term.operator && pill.operand == term.operand && !pill.negated,
                || format!("P10: pill {pill:?} does not match {term:?}"),
            )?;
        }
        other => return Err(format!("P10: '{token}' gave {other:?}")),
    }

    let invalid = unparse_each(search, &fixtures::invalid_terms()[..1]).remove(0);
    match create_item_from_search_string(&invalid, syntax) {
        Err(PillRejection::InvalidTerm { search_string }) if search_string == invalid => {}
        other => return Err(format!("P10: '{invalid}' gave {other:?}")),
    }

    let two = unparse_each(search, &fixtures::pillable_terms()[..2]).join(" ");
    match create_item_from_search_string(&two, syntax) {
        Err(PillRejection::NotSingleTerm { count: 2 }) => Ok(()),
        other => Err(format!("P10: '{two}' gave {other:?}")),
    }
}
