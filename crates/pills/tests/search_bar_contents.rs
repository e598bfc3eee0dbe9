//! Forward and reverse reconciliation against the fixture grammar.

use narrowbar_conformance::fixtures::{self, FixtureSearch, ALICE, BOB, UNKNOWN_EMAIL};
use narrowbar_conformance::TestableSearch;
use narrowbar_core::{InMemoryDirectory, NarrowTerm, TermSyntax, User};
use narrowbar_pills::{
    create_pills, get_current_search_pill_terms, set_search_bar_contents, PillContainer, PillView,
    PillWidgetOptions, SearchBarState, SearchPill, SearchPillError, SearchPillWidget,
};

// ──────────────────────────────────────────────
// Test fixtures
// ──────────────────────────────────────────────

fn apply(search: &FixtureSearch, terms: &[NarrowTerm]) -> (SearchPillWidget, SearchBarState) {
    let mut widget = create_pills(PillWidgetOptions::default());
    let mut search_bar = SearchBarState::new();
    set_search_bar_contents(
        terms,
        &mut widget,
        &mut search_bar,
        search.syntax(),
        search.people(),
    )
    .unwrap();
    (widget, search_bar)
}

fn parse(search: &FixtureSearch, text: &str) -> Vec<NarrowTerm> {
    search.syntax().parse(text)
}

/// A grammar that accepts every user operand, paired with a directory
/// that only knows Alice.
struct TrustingSearch {
    inner: FixtureSearch,
    people: InMemoryDirectory,
}

impl TermSyntax for TrustingSearch {
    fn parse(&self, text: &str) -> Vec<NarrowTerm> {
        self.inner.parse(text)
    }

    fn unparse(&self, terms: &[NarrowTerm]) -> String {
        self.inner.unparse(terms)
    }

    fn is_valid_search_term(&self, _term: &NarrowTerm) -> bool {
        true
    }
}

// ──────────────────────────────────────────────
// Forward
// ──────────────────────────────────────────────

#[test]
fn parsed_query_lays_out_pills_then_text() {
    let search = FixtureSearch::new();
    let terms = parse(
        &search,
        "channel:design -topic:lunch+plans quarterly report sender:nobody@example.invalid dm:",
    );
    let (widget, search_bar) = apply(&search, &terms);

    assert_eq!(
        widget.search_strings(),
        vec!["channel:design", "-topic:lunch+plans"]
    );
    assert_eq!(
        search_bar.text,
        "quarterly report sender:nobody@example.invalid dm:"
    );
    assert_eq!(search_bar.shake_count, 1);
}

#[test]
fn empty_terms_clear_everything() {
    let search = FixtureSearch::new();
    let mut widget = create_pills(PillWidgetOptions::default());
    let mut search_bar = SearchBarState::new();

    let terms = parse(&search, "is:starred hello");
    set_search_bar_contents(
        &terms,
        &mut widget,
        &mut search_bar,
        search.syntax(),
        search.people(),
    )
    .unwrap();
    assert_eq!(widget.len(), 1);
    assert_eq!(search_bar.text, "hello");

    widget.set_input_text("topic:lun");
    set_search_bar_contents(
        &[],
        &mut widget,
        &mut search_bar,
        search.syntax(),
        search.people(),
    )
    .unwrap();
    assert!(widget.is_empty());
    assert_eq!(widget.input_text(), "");
    assert_eq!(search_bar.text, "");
    assert_eq!(search_bar.shake_count, 0);
}

#[test]
fn only_the_last_empty_operand_is_partial() {
    let search = FixtureSearch::new();
    let terms = vec![
        NarrowTerm::new("topic", ""),
        NarrowTerm::new("is", "starred"),
        NarrowTerm::new("sender", ""),
    ];
    let (widget, search_bar) = apply(&search, &terms);

    // The leading `topic:` is not being typed any more, so it is invalid.
    assert_eq!(widget.len(), 1);
    assert_eq!(search_bar.text, "topic: sender:");
    assert_eq!(search_bar.shake_count, 1);
}

#[test]
fn user_pill_and_simple_pill_views() {
    let search = FixtureSearch::new();
    let terms = parse(&search, &format!("dm:{ALICE},{BOB} topic:caf%C3%A9+time"));
    let (widget, _) = apply(&search, &terms);

    let views = widget.pill_views();
    assert_eq!(views.len(), 2);
    match &views[0] {
        PillView::User(pill) => {
            let names: Vec<&str> = pill.users.iter().map(|u| &*u.display_value).collect();
            assert_eq!(names, vec!["Alice Arden", "Bob Brook"]);
        }
        other => panic!("expected user view, got {other:?}"),
    }
    assert_eq!(
        views[1],
        PillView::Term {
            display_value: "topic: café time".to_string()
        }
    );
}

#[test]
fn unresolvable_user_aborts_the_pass() {
    let search = TrustingSearch {
        inner: FixtureSearch::new(),
        people: InMemoryDirectory::with_users([User::new(1, ALICE, "Alice Arden")]),
    };
    let mut widget = create_pills(PillWidgetOptions::default());
    let mut search_bar = SearchBarState::new();
    let earlier = vec![
        NarrowTerm::new("channel", "design"),
        NarrowTerm::new("search", "lunch"),
    ];
    set_search_bar_contents(
        &earlier,
        &mut widget,
        &mut search_bar,
        &search,
        &search.people,
    )
    .unwrap();
    widget.set_input_text("draft");

    let terms = vec![
        NarrowTerm::new("is", "starred"),
        NarrowTerm::new("dm", format!("{ALICE},{UNKNOWN_EMAIL}")),
    ];
    let err = set_search_bar_contents(
        &terms,
        &mut widget,
        &mut search_bar,
        &search,
        &search.people,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SearchPillError::UnresolvedUser {
            operator: "dm".to_string(),
            email: UNKNOWN_EMAIL.to_string(),
        }
    );
    // Nothing from the failed pass is applied.
    assert_eq!(
        get_current_search_pill_terms(&widget),
        vec![NarrowTerm::new("channel", "design")]
    );
    assert_eq!(widget.input_text(), "draft");
    assert_eq!(search_bar.text, "lunch");
    assert!(!search_bar.is_shaking());
}

// ──────────────────────────────────────────────
// Reverse
// ──────────────────────────────────────────────

#[test]
fn removed_users_drop_out_of_read_back_terms() {
    let search = FixtureSearch::new();
    let terms = parse(&search, &format!("-dm:{ALICE},{BOB} is:starred"));
    let (mut widget, _) = apply(&search, &terms);

    assert!(widget.remove_user(0, 1));
    assert_eq!(
        get_current_search_pill_terms(&widget),
        vec![
            NarrowTerm::new("dm", BOB).negate(),
            NarrowTerm::new("is", "starred"),
        ]
    );
    // The stored search text still names both users.
    assert_eq!(
        widget.items()[0].display_value(),
        format!("-dm:{ALICE},{BOB}")
    );
}

#[test]
fn read_back_terms_reconcile_to_the_same_pills() {
    let search = FixtureSearch::new();
    let (first, _) = apply(&search, &fixtures::pillable_terms());
    let read_back = get_current_search_pill_terms(&first);
    let (second, search_bar) = apply(&search, &read_back);

    assert_eq!(first.items(), second.items());
    assert!(search_bar.text.is_empty());
}

#[test]
fn user_pill_text_is_canonical() {
    let search = FixtureSearch::new();
    let terms = vec![NarrowTerm::new("sender", "ALICE@example.com")];
    let (widget, _) = apply(&search, &terms);

    let SearchPill::User(pill) = &widget.items()[0] else {
        panic!("expected a user pill");
    };
    assert_eq!(pill.display_value, format!("sender:{ALICE}"));
    assert_eq!(
        get_current_search_pill_terms(&widget),
        vec![NarrowTerm::new("sender", ALICE)]
    );
}
