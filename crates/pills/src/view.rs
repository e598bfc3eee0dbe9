//! What to draw for each pill.
//!
//! The widget is handed [`generate_pill_view`] as its rendering hook, so
//! the choice of pill template is a pure function of the pill variant.

use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::pill::{SearchPill, SearchUserPill};

/// Template input for one pill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum PillView {
    /// Plain text pill with a display-ready label.
    Term { display_value: String },
    /// User pill with avatars, names and status for each user.
    User(SearchUserPill),
}

/// Choose the template input for a pill.
pub fn generate_pill_view(item: &SearchPill) -> PillView {
    match item {
        SearchPill::User(pill) => PillView::User(pill.clone()),
        SearchPill::Search(pill) => PillView::Term {
            display_value: display_label(&pill.display_value),
        },
    }
}

/// Turn a pill's canonical search text into its on-screen label.
///
/// Pills are visually separated, so `+` space encoding is not needed;
/// a space is added after the operator's colon and percent escapes are
/// decoded. The stored text is left untouched.
pub fn display_label(display_value: &str) -> String {
    let label = display_value.replace('+', " ").replacen(':', ": ", 1);
    robust_url_decode(&label).trim().to_string()
}

/// Decode percent escapes without failing on bad input.
///
/// Each maximal run of `%XX` escapes is decoded on its own; a run that
/// does not decode to valid UTF-8 is kept as written.
pub fn robust_url_decode(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('%') {
        decoded.push_str(&rest[..start]);
        rest = &rest[start..];
        let run_len = escape_run_len(rest);
        if run_len == 0 {
            decoded.push('%');
            rest = &rest[1..];
            continue;
        }
        let run = &rest[..run_len];
        match percent_decode_str(run).decode_utf8() {
            Ok(text) => decoded.push_str(&text),
            Err(_) => decoded.push_str(run),
        }
        rest = &rest[run_len..];
    }
    decoded.push_str(rest);
    decoded
}

/// Length of the run of `%XX` escapes at the start of `text`.
fn escape_run_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut len = 0;
    while len + 3 <= bytes.len()
        && bytes[len] == b'%'
        && bytes[len + 1].is_ascii_hexdigit()
        && bytes[len + 2].is_ascii_hexdigit()
    {
        len += 3;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pill::SearchTermPill;
    use narrowbar_core::NarrowTerm;

    #[test]
    fn label_spaces_colon_and_plus() {
        assert_eq!(display_label("topic:lunch+time"), "topic: lunch time");
        assert_eq!(display_label("-is:starred"), "-is: starred");
    }

    #[test]
    fn label_only_spaces_first_colon() {
        assert_eq!(display_label("topic:12:30"), "topic: 12:30");
    }

    #[test]
    fn label_decodes_escapes_and_trims() {
        assert_eq!(
            display_label("channel:design%20team "),
            "channel: design team"
        );
        assert_eq!(display_label("topic:caf%C3%A9"), "topic: café");
        // An encoded plus survives as a plus.
        assert_eq!(display_label("topic:c%2B%2B"), "topic: c++");
    }

    #[test]
    fn robust_decode_keeps_malformed_escapes() {
        assert_eq!(robust_url_decode("100%"), "100%");
        assert_eq!(robust_url_decode("50%zz off"), "50%zz off");
        assert_eq!(robust_url_decode("%E2%82x%AC"), "%E2%82x%AC");
        assert_eq!(robust_url_decode("ok%20%E2%82%AC"), "ok €");
        assert_eq!(robust_url_decode("%FF%20"), "%FF%20");
        assert_eq!(robust_url_decode("plain"), "plain");
    }

    #[test]
    fn term_pills_get_labels_user_pills_pass_through() {
        let plain = SearchPill::Search(SearchTermPill::from_term(
            &NarrowTerm::new("topic", "lunch time"),
            "topic:lunch+time",
        ));
        assert_eq!(
            generate_pill_view(&plain),
            PillView::Term {
                display_value: "topic: lunch time".to_string()
            }
        );

        let user = SearchUserPill {
            operator: "dm".to_string(),
            display_value: "dm:a@x.com".to_string(),
            negated: false,
            users: Vec::new(),
        };
        assert_eq!(
            generate_pill_view(&SearchPill::User(user.clone())),
            PillView::User(user)
        );
    }
}
