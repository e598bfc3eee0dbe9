//! People directory: the user lookups the search pills need.
//!
//! The [`PeopleDirectory`] trait abstracts the host's user store so user
//! pills can be built without a live session. [`InMemoryDirectory`] is a
//! map-backed implementation for embedding and tests.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Query parameter appended to avatar URLs to request the small rendition.
const SMALL_AVATAR_PARAM: &str = "s=50";

/// A directory record for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// The current user cannot see this user's details. Such users are
    /// shown as unknown rather than deactivated.
    #[serde(default)]
    pub is_inaccessible_user: bool,
}

impl User {
    pub fn new(user_id: u64, email: impl Into<String>, full_name: impl Into<String>) -> Self {
        User {
            user_id,
            email: email.into(),
            full_name: full_name.into(),
            avatar_url: None,
            is_inaccessible_user: false,
        }
    }
}

/// Status emoji a user has set, shown next to their name in a pill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEmojiInfo {
    pub emoji_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// User lookups consumed while building user pills.
pub trait PeopleDirectory {
    /// Look a user up by email.
    fn get_by_email(&self, email: &str) -> Option<&User>;

    /// Whether the user's account is active.
    fn is_person_active(&self, user_id: u64) -> bool;

    /// Small avatar URL for the user.
    fn small_avatar_url_for_person(&self, user: &User) -> String;

    /// The user's status emoji, if any.
    fn status_emoji(&self, user_id: u64) -> Option<StatusEmojiInfo>;

    /// Whether pills for this user should carry a guest marker.
    fn should_add_guest_user_indicator(&self, user_id: u64) -> bool;
}

/// Format an avatar URL for the small rendition.
pub fn format_small_avatar_url(raw_url: &str) -> String {
    let joiner = if raw_url.contains('?') { '&' } else { '?' };
    format!("{raw_url}{joiner}{SMALL_AVATAR_PARAM}")
}

/// Map-backed people directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    by_email: HashMap<String, User>,
    inactive: HashSet<u64>,
    guests: HashSet<u64>,
    statuses: HashMap<u64, StatusEmojiInfo>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory containing the given users, all active.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut directory = Self::new();
        for user in users {
            directory.add_user(user);
        }
        directory
    }

    /// Register a user. Emails are matched case-insensitively.
    pub fn add_user(&mut self, user: User) {
        self.by_email.insert(user.email.to_lowercase(), user);
    }

    pub fn deactivate(&mut self, user_id: u64) {
        self.inactive.insert(user_id);
    }

    pub fn mark_guest(&mut self, user_id: u64) {
        self.guests.insert(user_id);
    }

    pub fn set_status_emoji(&mut self, user_id: u64, status: StatusEmojiInfo) {
        self.statuses.insert(user_id, status);
    }

    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

impl PeopleDirectory for InMemoryDirectory {
    fn get_by_email(&self, email: &str) -> Option<&User> {
        self.by_email.get(&email.to_lowercase())
    }

    fn is_person_active(&self, user_id: u64) -> bool {
        !self.inactive.contains(&user_id)
    }

    fn small_avatar_url_for_person(&self, user: &User) -> String {
        match &user.avatar_url {
            Some(url) => format_small_avatar_url(url),
            None => format_small_avatar_url(&format!("/avatar/{}", user.user_id)),
        }
    }

    fn status_emoji(&self, user_id: u64) -> Option<StatusEmojiInfo> {
        self.statuses.get(&user_id).cloned()
    }

    fn should_add_guest_user_indicator(&self, user_id: u64) -> bool {
        self.guests.contains(&user_id)
    }
}
