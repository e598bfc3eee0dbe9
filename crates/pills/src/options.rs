//! Pill widget configuration.

use serde::{Deserialize, Serialize};

/// Behaviour switches for a pill widget.
///
/// `Default` is the search bar's configuration. Hosts can deserialize this
/// from their settings file; missing keys keep the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillWidgetOptions {
    /// Treat commas in confirmed text as pill separators.
    pub split_text_on_comma: bool,
    /// Turn the text buffer into a pill when Enter is pressed. The search
    /// bar submits the whole query on Enter instead.
    pub convert_to_pill_on_enter: bool,
}
