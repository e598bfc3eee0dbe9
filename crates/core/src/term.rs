//! The structured narrow term and the fixed operator vocabulary the
//! search bar treats specially.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between operator and operand in a term's textual form.
pub const OPERATOR_SEPARATOR: char = ':';

/// The generic full-text operator. Terms with this operator stay as text.
pub const SEARCH_OPERATOR: &str = "search";

/// Operators whose operand is a comma-separated list of user emails.
pub const USER_PILL_OPERATORS: [&str; 3] = ["dm", "dm-including", "sender"];

/// One operator/operand/negation triple from a structured search filter.
///
/// An empty operand is legal: it denotes a term whose operator has been
/// typed but whose value has not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NarrowTerm {
    pub operator: String,
    pub operand: String,
    #[serde(default)]
    pub negated: bool,
}

impl NarrowTerm {
    pub fn new(operator: impl Into<String>, operand: impl Into<String>) -> Self {
        NarrowTerm {
            operator: operator.into(),
            operand: operand.into(),
            negated: false,
        }
    }

    /// Same term with negation set.
    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn is_search(&self) -> bool {
        self.operator == SEARCH_OPERATOR
    }
}

impl fmt::Display for NarrowTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negated { "-" } else { "" };
        write!(
            f,
            "{}{}{}{}",
            sign, self.operator, OPERATOR_SEPARATOR, self.operand
        )
    }
}
