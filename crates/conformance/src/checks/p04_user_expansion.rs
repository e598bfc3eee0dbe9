//! P4: User pill expansion.
//!
//! `dm:a,b` with both users known becomes one user pill holding both
//! users in operand order, with canonical search text.

use narrowbar_core::NarrowTerm;
use narrowbar_pills::{PillContainer, SearchPill};

use super::{ensure, reconcile};
use crate::fixtures::{ALICE, BOB};
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p04_user_expansion<T: TestableSearch>(search: &T) -> CheckResult {
    let term = NarrowTerm::new("dm", format!("{ALICE},{BOB}"));
    let (widget, search_bar) = reconcile(search, &[term])?;

    let [SearchPill::User(pill)] = widget.items() else {
        return Err(format!(
            "P4: expected exactly one user pill, got {:?}",
            widget.items()
        ));
    };
    let emails: Vec<&str> = pill.users.iter().map(|u| u.email.as_str()).collect();
    ensure(emails == [ALICE, BOB], || {
        format!("P4: users {emails:?}, expected [{ALICE}, {BOB}]")
    })?;
    let expected = format!("dm:{ALICE},{BOB}");
    ensure(pill.display_value == expected, || {
        format!(
            "P4: display value '{}', expected '{expected}'",
            pill.display_value
        )
    })?;
    ensure(!pill.negated && pill.operator == "dm", || {
        format!("P4: operator/negation changed: {pill:?}")
    })?;
    ensure(search_bar.text.is_empty(), || {
        format!("P4: unexpected text '{}'", search_bar.text)
    })
}
