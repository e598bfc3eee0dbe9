//! P8: User pill metadata.
//!
//! Guests carry the guest marker; deactivated users are marked
//! deactivated unless they are inaccessible to the viewer.

use narrowbar_core::NarrowTerm;
use narrowbar_pills::{PillContainer, SearchPill};

use super::{ensure, reconcile};
use crate::fixtures::{ALICE, CAROL, DAVE, EVE};
use crate::traits::{CheckResult, TestableSearch};

pub fn check_p08_user_metadata<T: TestableSearch>(search: &T) -> CheckResult {
    let term = NarrowTerm::new("dm-including", format!("{ALICE},{CAROL},{DAVE},{EVE}")).negate();
    let (widget, _) = reconcile(search, &[term])?;

    let [SearchPill::User(pill)] = widget.items() else {
        return Err(format!(
            "P8: expected exactly one user pill, got {:?}",
            widget.items()
        ));
    };
    let guests: Vec<bool> = pill
        .users
        .iter()
        .map(|u| u.should_add_guest_user_indicator)
        .collect();
    ensure(guests == [false, true, false, false], || {
        format!("P8: guest markers {guests:?}")
    })?;
    let deactivated: Vec<bool> = pill.users.iter().map(|u| u.deactivated).collect();
    ensure(deactivated == [false, false, true, false], || {
        format!("P8: deactivated markers {deactivated:?}")
    })?;
    let expected = format!("-dm-including:{ALICE},{CAROL},{DAVE},{EVE}");
    ensure(pill.display_value == expected, || {
        format!(
            "P8: display value '{}', expected '{expected}'",
            pill.display_value
        )
    })
}
