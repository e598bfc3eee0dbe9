//! The term grammar seam.
//!
//! Tokenizing raw search text into terms belongs to the host's filter
//! grammar. The pill reconciler only needs the three operations below.

use crate::term::NarrowTerm;

/// Parses, unparses and validates narrow terms.
pub trait TermSyntax {
    /// Split raw search text into an ordered sequence of terms.
    fn parse(&self, text: &str) -> Vec<NarrowTerm>;

    /// Render terms back to their canonical search text.
    ///
    /// For a single term this is the term's textual form as it appears in
    /// the search bar, e.g. `-topic:lunch` or, for full-text search terms,
    /// the bare words.
    fn unparse(&self, terms: &[NarrowTerm]) -> String;

    /// Whether the operator/operand combination is well formed and, for
    /// user operators, names only known users.
    fn is_valid_search_term(&self, term: &NarrowTerm) -> bool;
}
