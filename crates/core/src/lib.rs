//! narrowbar-core: the term side of the search bar.
//!
//! Provides the structured narrow term model, the collaborator traits the
//! pill reconciler depends on, and the classifier that decides how each
//! term is presented in the search bar.
//!
//! # Public API
//!
//! - [`NarrowTerm`] -- one operator/operand/negation triple
//! - [`TermSyntax`] -- parse, unparse and validate terms (external grammar)
//! - [`PeopleDirectory`] -- user lookup, activity, presence and guest status
//! - [`InMemoryDirectory`] -- map-backed directory for embedding and testing
//! - [`classify()`] / [`TermClass`] -- per-term pill policy

pub mod classify;
pub mod people;
pub mod syntax;
pub mod term;

// ── Convenience re-exports ───────────────────────────────────────────

pub use classify::{classify, is_user_pill_operator, TermClass};
pub use people::{
    format_small_avatar_url, InMemoryDirectory, PeopleDirectory, StatusEmojiInfo, User,
};
pub use syntax::TermSyntax;
pub use term::{NarrowTerm, OPERATOR_SEPARATOR, SEARCH_OPERATOR, USER_PILL_OPERATORS};
