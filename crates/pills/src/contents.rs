//! Forward direction: lay a term sequence out as pills and trailing text.
//!
//! Pillable terms become pills in their input relative order. The rest
//! are demoted to the text after the pills, grouped as: full-text search
//! words, then invalid terms, then the partial term being typed. Each group
//! keeps its input order.

use narrowbar_core::{classify, NarrowTerm, PeopleDirectory, TermClass, TermSyntax, User};
use tracing::debug;

use crate::container::PillContainer;
use crate::error::SearchPillError;
use crate::expand::{append_user_pill, resolve_users};
use crate::pill::{SearchPill, SearchTermPill};
use crate::search_bar::SearchBar;

/// Terms that stay as text, bucketed by why they were not pilled.
#[derive(Debug, Default)]
struct DemotedText {
    search_operator_strings: Vec<String>,
    invalid_inputs: Vec<String>,
    partial_pill: Option<String>,
}

impl DemotedText {
    fn has_invalid(&self) -> bool {
        !self.invalid_inputs.is_empty()
    }

    fn into_search_bar_text(self) -> String {
        let mut search_bar_text_strings = self.search_operator_strings;
        search_bar_text_strings.extend(self.invalid_inputs);
        search_bar_text_strings.extend(self.partial_pill);
        search_bar_text_strings.join(" ")
    }
}

/// A pill decided on during classification. Nothing is appended until
/// every user operand in the pass has resolved.
enum PlannedPill<'t, 'p> {
    Term(SearchTermPill),
    Users {
        term: &'t NarrowTerm,
        users: Vec<&'p User>,
    },
}

/// Replace the widget's pills and the search bar's text with `search_terms`.
///
/// Any invalid term shakes the search bar once, after the pass. The only
/// error is a user operand that passed validation but names a user the
/// directory does not know. It is detected before anything is cleared, so
/// on error the widget and the search bar keep their previous contents.
pub fn set_search_bar_contents(
    search_terms: &[NarrowTerm],
    pill_widget: &mut dyn PillContainer,
    search_bar: &mut dyn SearchBar,
    syntax: &dyn TermSyntax,
    people: &dyn PeopleDirectory,
) -> Result<(), SearchPillError> {
    let mut planned = Vec::new();
    let mut demoted = DemotedText::default();
    let last_index = search_terms.len().checked_sub(1);

    for (index, term) in search_terms.iter().enumerate() {
        let input = syntax.unparse(std::slice::from_ref(term));

        match classify(term, &input, Some(index) == last_index, syntax) {
            // Something like a trailing `dm:` is still being typed. It
            // stays at the end of the text so typeahead can offer operands.
            TermClass::Partial => demoted.partial_pill = Some(input),
            TermClass::Invalid => demoted.invalid_inputs.push(input),
            TermClass::UserList => {
                let users = resolve_users(&term.operator, &term.operand, people)?;
                planned.push(PlannedPill::Users { term, users });
            }
            TermClass::FreeText => demoted.search_operator_strings.push(input),
            TermClass::Simple => {
                planned.push(PlannedPill::Term(SearchTermPill::from_term(term, input)));
            }
        }
    }

    let pill_count = planned.len();
    pill_widget.clear(true);
    for pill in planned {
        match pill {
            PlannedPill::Term(pill) => pill_widget.append_validated(SearchPill::Search(pill)),
            PlannedPill::Users { term, users } => {
                append_user_pill(&users, pill_widget, people, &term.operator, term.negated);
            }
        }
    }
    pill_widget.clear_text();

    let shake = demoted.has_invalid();
    debug!(
        terms = search_terms.len(),
        pills = pill_count,
        search = demoted.search_operator_strings.len(),
        invalid = demoted.invalid_inputs.len(),
        partial = demoted.partial_pill.is_some(),
        "set search bar contents"
    );
    search_bar.set_text(demoted.into_search_bar_text());
    if shake {
        search_bar.shake();
    }
    Ok(())
}
