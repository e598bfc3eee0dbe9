//! The pill tagged union.
//!
//! A pill is either a plain search pill (one operator/operand pair) or a
//! user pill (one user operator carrying several users). The `"type"`
//! tag matches what the pill templates switch on.

use std::borrow::Cow;

use narrowbar_core::{NarrowTerm, StatusEmojiInfo};
use serde::{Deserialize, Serialize};

/// One pill in the search bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SearchPill {
    #[serde(rename = "search")]
    Search(SearchTermPill),
    #[serde(rename = "search_user")]
    User(SearchUserPill),
}

/// A pill for one operator/operand pair, rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTermPill {
    /// Canonical search text of the term; parsing it yields the term back.
    pub display_value: String,
    pub operator: String,
    pub operand: String,
    pub negated: bool,
}

impl SearchTermPill {
    /// Pill for `term` whose canonical text is `display_value`.
    pub fn from_term(term: &NarrowTerm, display_value: impl Into<String>) -> Self {
        SearchTermPill {
            display_value: display_value.into(),
            operator: term.operator.clone(),
            operand: term.operand.clone(),
            negated: term.negated,
        }
    }
}

/// A pill for a user operator whose operand lists several users.
///
/// `display_value` is not shown for user pills; it is kept because the
/// generic pill mechanics read every pill's text through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUserPill {
    pub operator: String,
    pub display_value: String,
    pub negated: bool,
    pub users: Vec<UserPillItem>,
}

impl SearchUserPill {
    /// The users' emails joined by commas, in pill order.
    pub fn operand(&self) -> String {
        self.users
            .iter()
            .map(|user| user.email.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Display metadata for one user inside a user pill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPillItem {
    /// The user's full name.
    pub display_value: String,
    pub user_id: u64,
    pub email: String,
    pub img_src: String,
    pub status_emoji_info: Option<StatusEmojiInfo>,
    pub should_add_guest_user_indicator: bool,
    pub deactivated: bool,
}

impl SearchPill {
    pub fn operator(&self) -> &str {
        match self {
            SearchPill::Search(pill) => &pill.operator,
            SearchPill::User(pill) => &pill.operator,
        }
    }

    pub fn negated(&self) -> bool {
        match self {
            SearchPill::Search(pill) => pill.negated,
            SearchPill::User(pill) => pill.negated,
        }
    }

    pub fn display_value(&self) -> &str {
        match self {
            SearchPill::Search(pill) => &pill.display_value,
            SearchPill::User(pill) => &pill.display_value,
        }
    }

    /// The pill's operand, recomputed from the current user list for user
    /// pills so that users removed after creation are not reported.
    pub fn operand(&self) -> Cow<'_, str> {
        match self {
            SearchPill::Search(pill) => Cow::Borrowed(&pill.operand),
            SearchPill::User(pill) => Cow::Owned(pill.operand()),
        }
    }

    /// The narrow term this pill stands for.
    pub fn to_term(&self) -> NarrowTerm {
        NarrowTerm {
            operator: self.operator().to_string(),
            operand: self.operand().into_owned(),
            negated: self.negated(),
        }
    }
}
