//! The search bar's pill widget.
//!
//! A concrete [`PillContainer`] holding pills and a text-entry buffer. Its
//! text and rendering hooks are plain functions chosen at construction;
//! [`create_pills`] wires in the search bar's.

use std::fmt;

use narrowbar_core::TermSyntax;

use crate::container::PillContainer;
use crate::error::PillRejection;
use crate::options::PillWidgetOptions;
use crate::parse::{create_item_from_search_string, get_search_string_from_item};
use crate::pill::SearchPill;
use crate::view::{generate_pill_view, PillView};

/// Reads the text a pill stands for.
pub type TextFromItem = fn(&SearchPill) -> &str;

/// Chooses the template input for a pill.
pub type PillViewGenerator = fn(&SearchPill) -> PillView;

/// Pills plus the text being typed after them.
#[derive(Clone)]
pub struct SearchPillWidget {
    pills: Vec<SearchPill>,
    input_text: String,
    options: PillWidgetOptions,
    create_pill_on_paste: bool,
    get_text_from_item: TextFromItem,
    generate_pill_view: PillViewGenerator,
}

/// Create the pill widget for the search bar.
///
/// Pasted text is never turned into pills directly; it is reconciled when
/// the user submits the search.
pub fn create_pills(options: PillWidgetOptions) -> SearchPillWidget {
    let mut pills = SearchPillWidget::new(options, get_search_string_from_item, generate_pill_view);
    pills.set_create_pill_on_paste(false);
    pills
}

impl SearchPillWidget {
    pub fn new(
        options: PillWidgetOptions,
        get_text_from_item: TextFromItem,
        generate_pill_view: PillViewGenerator,
    ) -> Self {
        SearchPillWidget {
            pills: Vec::new(),
            input_text: String::new(),
            options,
            create_pill_on_paste: true,
            get_text_from_item,
            generate_pill_view,
        }
    }

    pub fn options(&self) -> PillWidgetOptions {
        self.options
    }

    pub fn creates_pill_on_paste(&self) -> bool {
        self.create_pill_on_paste
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn len(&self) -> usize {
        self.pills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }

    /// Turn confirmed text into pills and clear the text buffer.
    ///
    /// With `split_text_on_comma`, each non-empty comma-separated piece
    /// becomes its own pill. If any piece is rejected nothing is added.
    pub fn append_value(
        &mut self,
        text: &str,
        syntax: &dyn TermSyntax,
    ) -> Result<(), PillRejection> {
        let pieces: Vec<&str> = if self.options.split_text_on_comma {
            text.split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .collect()
        } else {
            vec![text.trim()]
        };

        let items = pieces
            .into_iter()
            .map(|piece| create_item_from_search_string(piece, syntax))
            .collect::<Result<Vec<_>, _>>()?;
        self.pills.extend(items);
        self.clear_text();
        Ok(())
    }

    /// Remove the pill at `index`.
    pub fn remove(&mut self, index: usize) -> Option<SearchPill> {
        if index < self.pills.len() {
            Some(self.pills.remove(index))
        } else {
            None
        }
    }

    /// Remove one user from the user pill at `pill_index`.
    ///
    /// A user pill left with no users is removed. Returns whether a user
    /// was removed; when none was, the widget is unchanged.
    pub fn remove_user(&mut self, pill_index: usize, user_id: u64) -> bool {
        let Some(SearchPill::User(pill)) = self.pills.get_mut(pill_index) else {
            return false;
        };
        let before = pill.users.len();
        pill.users.retain(|user| user.user_id != user_id);
        if pill.users.len() == before {
            return false;
        }
        if pill.users.is_empty() {
            self.pills.remove(pill_index);
        }
        true
    }

    /// The text each pill stands for, in order.
    pub fn search_strings(&self) -> Vec<&str> {
        self.pills
            .iter()
            .map(|pill| (self.get_text_from_item)(pill))
            .collect()
    }

    /// Template input for each pill, in order.
    pub fn pill_views(&self) -> Vec<PillView> {
        self.pills.iter().map(self.generate_pill_view).collect()
    }
}

impl fmt::Debug for SearchPillWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchPillWidget")
            .field("pills", &self.pills)
            .field("input_text", &self.input_text)
            .field("options", &self.options)
            .field("create_pill_on_paste", &self.create_pill_on_paste)
            .finish_non_exhaustive()
    }
}

impl PillContainer for SearchPillWidget {
    fn append_validated(&mut self, pill: SearchPill) {
        self.pills.push(pill);
    }

    fn clear(&mut self, reset_text: bool) {
        self.pills.clear();
        if reset_text {
            self.input_text.clear();
        }
    }

    fn clear_text(&mut self) {
        self.input_text.clear();
    }

    fn items(&self) -> &[SearchPill] {
        &self.pills
    }

    fn set_create_pill_on_paste(&mut self, enabled: bool) {
        self.create_pill_on_paste = enabled;
    }
}
