//! The pill container seam.
//!
//! Reconciliation only needs a handful of container operations; the
//! widget's own insertion and removal mechanics stay behind this trait.

use crate::pill::SearchPill;

/// An ordered, mutable collection of pills plus a text-entry buffer.
pub trait PillContainer {
    /// Append a pill that has already been validated.
    fn append_validated(&mut self, pill: SearchPill);

    /// Remove every pill. With `reset_text`, also empty the text buffer.
    fn clear(&mut self, reset_text: bool);

    /// Empty the text-entry buffer, keeping the pills.
    fn clear_text(&mut self);

    /// Pills in insertion order.
    fn items(&self) -> &[SearchPill];

    /// Allow or forbid turning pasted text straight into pills.
    fn set_create_pill_on_paste(&mut self, enabled: bool);
}
