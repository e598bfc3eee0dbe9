//! User pills: one pill for a user operator and every user in its operand.

use narrowbar_core::{PeopleDirectory, User};
use tracing::error;

use crate::container::PillContainer;
use crate::pill::{SearchPill, SearchUserPill, UserPillItem};

/// Resolve each comma-separated email in `operand` to a directory user.
///
/// Only called for operands that already passed the grammar's validity
/// check, which looks every email up. A miss here means the grammar and
/// the directory disagree, so it is reported as an error, not skipped.
pub fn resolve_users<'p>(
    operator: &str,
    operand: &str,
    people: &'p dyn PeopleDirectory,
) -> Result<Vec<&'p User>, crate::SearchPillError> {
    operand
        .split(',')
        .map(|email| {
            people.get_by_email(email).ok_or_else(|| {
                error!(operator, email, "validated user operand did not resolve");
                crate::SearchPillError::UnresolvedUser {
                    operator: operator.to_string(),
                    email: email.to_string(),
                }
            })
        })
        .collect()
}

/// Build the user pill for `users` under `operator`.
///
/// The pill's search text is rebuilt from the directory's emails, so a
/// differently cased operand comes back in canonical form.
pub fn build_user_pill(
    users: &[&User],
    people: &dyn PeopleDirectory,
    operator: &str,
    negated: bool,
) -> SearchUserPill {
    let sign = if negated { "-" } else { "" };
    let emails: Vec<&str> = users.iter().map(|user| user.email.as_str()).collect();
    let search_string = format!("{sign}{operator}:{}", emails.join(","));

    SearchUserPill {
        operator: operator.to_string(),
        display_value: search_string,
        negated,
        users: users
            .iter()
            .map(|user| {
                let is_guest = people.should_add_guest_user_indicator(user.user_id);
                let is_active = people.is_person_active(user.user_id);
                UserPillItem {
                    display_value: user.full_name.clone(),
                    user_id: user.user_id,
                    email: user.email.clone(),
                    img_src: people.small_avatar_url_for_person(user),
                    status_emoji_info: people.status_emoji(user.user_id),
                    should_add_guest_user_indicator: is_guest,
                    deactivated: !is_active && !user.is_inaccessible_user,
                }
            })
            .collect(),
    }
}

/// Build the user pill for `users` and append it to the widget.
pub fn append_user_pill(
    users: &[&User],
    pill_widget: &mut dyn PillContainer,
    people: &dyn PeopleDirectory,
    operator: &str,
    negated: bool,
) {
    let pill_data = build_user_pill(users, people, operator, negated);
    pill_widget.append_validated(SearchPill::User(pill_data));
    pill_widget.clear_text();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pills, PillWidgetOptions, SearchPillError};
    use narrowbar_core::{InMemoryDirectory, StatusEmojiInfo};

    fn directory() -> InMemoryDirectory {
        let mut ghost = User::new(3, "ghost@x.com", "Unknown user");
        ghost.is_inaccessible_user = true;
        let mut directory = InMemoryDirectory::with_users([
            User::new(1, "a@x.com", "Ann"),
            User::new(2, "b@x.com", "Ben"),
            ghost,
            User::new(4, "gone@x.com", "Gone"),
        ]);
        directory.mark_guest(2);
        directory.deactivate(3);
        directory.deactivate(4);
        directory.set_status_emoji(
            1,
            StatusEmojiInfo {
                emoji_name: "car".to_string(),
                emoji_code: Some("1f697".to_string()),
                reaction_type: Some("unicode_emoji".to_string()),
                url: None,
            },
        );
        directory
    }

    #[test]
    fn resolves_in_operand_order() {
        let directory = directory();
        let users = resolve_users("dm", "b@x.com,a@x.com", &directory).unwrap();
        let ids: Vec<u64> = users.iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn unknown_email_is_an_error() {
        let directory = directory();
        let err = resolve_users("sender", "a@x.com,nobody@x.com", &directory).unwrap_err();
        assert_eq!(
            err,
            SearchPillError::UnresolvedUser {
                operator: "sender".to_string(),
                email: "nobody@x.com".to_string(),
            }
        );
    }

    #[test]
    fn pill_text_uses_sign_and_directory_emails() {
        let directory = directory();
        let users = resolve_users("dm", "A@X.com,b@x.com", &directory).unwrap();
        let pill = build_user_pill(&users, &directory, "dm", false);
        assert_eq!(pill.display_value, "dm:a@x.com,b@x.com");
        assert_eq!(pill.operand(), "a@x.com,b@x.com");

        let negated = build_user_pill(&users, &directory, "dm-including", true);
        assert_eq!(negated.display_value, "-dm-including:a@x.com,b@x.com");
        assert!(negated.negated);
    }

    #[test]
    fn user_metadata_is_filled_from_directory() {
        let directory = directory();
        let users = resolve_users("dm", "a@x.com,b@x.com", &directory).unwrap();
        let pill = build_user_pill(&users, &directory, "dm", false);

        let ann = &pill.users[0];
        assert_eq!(ann.display_value, "Ann");
        assert_eq!(ann.img_src, "/avatar/1?s=50");
        assert_eq!(ann.status_emoji_info.as_ref().unwrap().emoji_name, "car");
        assert!(!ann.should_add_guest_user_indicator);

        let ben = &pill.users[1];
        assert!(ben.should_add_guest_user_indicator);
        assert!(ben.status_emoji_info.is_none());
    }

    #[test]
    fn inaccessible_users_are_not_marked_deactivated() {
        let directory = directory();
        let users = resolve_users("dm", "a@x.com,ghost@x.com,gone@x.com", &directory).unwrap();
        let pill = build_user_pill(&users, &directory, "dm", false);
        let deactivated: Vec<bool> = pill.users.iter().map(|u| u.deactivated).collect();
        assert_eq!(deactivated, vec![false, false, true]);
    }

    #[test]
    fn append_adds_one_pill_and_clears_text() {
        let directory = directory();
        let mut widget = create_pills(PillWidgetOptions::default());
        widget.set_input_text("sender:a");
        let users = resolve_users("sender", "a@x.com", &directory).unwrap();
        append_user_pill(&users, &mut widget, &directory, "sender", false);

        assert_eq!(widget.len(), 1);
        assert_eq!(widget.input_text(), "");
        assert!(matches!(&widget.items()[0], SearchPill::User(p) if p.users.len() == 1));
    }
}
