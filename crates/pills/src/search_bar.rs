//! The host surface a reconciliation pass reports to.

/// The search input hosting the pills.
pub trait SearchBar {
    /// Replace the free text that follows the pills.
    fn set_text(&mut self, text: String);

    /// Signal that some of the input could not be understood.
    fn shake(&mut self);
}

/// A headless search bar that records what it was told.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBarState {
    pub text: String,
    pub shake_count: usize,
}

impl SearchBarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_count > 0
    }
}

impl SearchBar for SearchBarState {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn shake(&mut self) {
        self.shake_count += 1;
    }
}
