//! P9: Demoted text order.
//!
//! Text after the pills is: search words, then invalid terms, then the
//! partial term, regardless of where each appeared in the input.

use super::{ensure, reconcile, unparse_each};
use crate::fixtures;
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p09_demotion_order<T: TestableSearch>(search: &T) -> CheckResult {
    let invalid = fixtures::invalid_terms();
    let words = fixtures::search_term("budget");
    let partial = fixtures::partial_term();
    let terms = vec![
        invalid[0].clone(),
        fixtures::pillable_terms().remove(0),
        words.clone(),
        invalid[2].clone(),
        partial.clone(),
    ];

    let (_, search_bar) = reconcile(search, &terms)?;
    let expected_terms = [words, invalid[0].clone(), invalid[2].clone(), partial];
    let expected = unparse_each(search, &expected_terms).join(" ");
    ensure(search_bar.text == expected, || {
        format!("P9: text '{}', expected '{expected}'", search_bar.text)
    })?;
    ensure(search_bar.shake_count == 1, || {
        format!("P9: shook {} times, expected once", search_bar.shake_count)
    })
}
