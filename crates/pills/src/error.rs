/// Why a confirmed text token did not become a pill.
///
/// Rejection is an expected outcome: the caller plays the input's shake
/// animation and leaves the text in place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PillRejection {
    /// The token parsed to zero or several terms instead of one.
    #[error("expected exactly one search term, found {count}")]
    NotSingleTerm { count: usize },

    /// The term failed the grammar's validity check.
    #[error("invalid search term: {search_string}")]
    InvalidTerm { search_string: String },
}

/// Errors that abort a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchPillError {
    /// A user operand passed validation but an email in it is not in the
    /// people directory. The grammar and the directory disagree.
    #[error("operand of '{operator}' names unknown user '{email}' after passing validation")]
    UnresolvedUser { operator: String, email: String },
}
