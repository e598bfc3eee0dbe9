//! Term classification: how a single term is presented in the search bar.
//!
//! Rules are checked in a fixed order, first match wins:
//!
//! 1. [`TermClass::Partial`] -- the final term, operator typed, operand not
//! 2. [`TermClass::Invalid`] -- rejected by the grammar's validity check
//! 3. [`TermClass::UserList`] -- a user operator with a non-empty operand
//! 4. [`TermClass::FreeText`] -- the full-text `search` operator
//! 5. [`TermClass::Simple`] -- everything else

use std::fmt;

use crate::syntax::TermSyntax;
use crate::term::{NarrowTerm, OPERATOR_SEPARATOR, USER_PILL_OPERATORS};

/// How a term is presented after reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermClass {
    /// Still being typed; kept as the trailing text of the search bar.
    Partial,
    /// Malformed; kept as text and flagged to the user.
    Invalid,
    /// Becomes one pill carrying every referenced user.
    UserList,
    /// Full-text search words; kept as editable text.
    FreeText,
    /// Becomes one plain pill.
    Simple,
}

impl fmt::Display for TermClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermClass::Partial => write!(f, "partial"),
            TermClass::Invalid => write!(f, "invalid"),
            TermClass::UserList => write!(f, "user_list"),
            TermClass::FreeText => write!(f, "free_text"),
            TermClass::Simple => write!(f, "simple"),
        }
    }
}

/// Whether `operator` takes a comma-separated list of user emails.
pub fn is_user_pill_operator(operator: &str) -> bool {
    USER_PILL_OPERATORS.contains(&operator)
}

/// Classify one term.
///
/// `unparsed` is the term's canonical textual form as produced by
/// [`TermSyntax::unparse`], and `is_last` says whether the term is the
/// final one of the sequence being reconciled.
pub fn classify(
    term: &NarrowTerm,
    unparsed: &str,
    is_last: bool,
    syntax: &dyn TermSyntax,
) -> TermClass {
    let class = if is_last && term.operand.is_empty() && unparsed.ends_with(OPERATOR_SEPARATOR) {
        TermClass::Partial
    } else if !syntax.is_valid_search_term(term) {
        TermClass::Invalid
    } else if is_user_pill_operator(&term.operator) && !term.operand.is_empty() {
        TermClass::UserList
    } else if term.is_search() {
        TermClass::FreeText
    } else {
        TermClass::Simple
    };
    tracing::trace!(term = %unparsed, %class, "classified search term");
    class
}
