//! Confirmed text entry through the search pill widget.

use narrowbar_conformance::fixtures::FixtureSearch;
use narrowbar_conformance::TestableSearch;
use narrowbar_pills::{
    create_item_from_search_string, create_pills, get_search_string_from_item, PillContainer,
    PillRejection, PillWidgetOptions, SearchPill,
};

#[test]
fn confirmed_text_becomes_a_pill_as_typed() {
    let search = FixtureSearch::new();
    let mut widget = create_pills(PillWidgetOptions::default());
    widget.set_input_text("-topic:lunch+plans");

    widget
        .append_value("-topic:lunch+plans", search.syntax())
        .unwrap();

    assert_eq!(widget.input_text(), "");
    let pill = &widget.items()[0];
    assert_eq!(get_search_string_from_item(pill), "-topic:lunch+plans");
    assert_eq!(pill.operand(), "lunch plans");
    assert!(pill.negated());
}

#[test]
fn rejected_text_leaves_widget_untouched() {
    let search = FixtureSearch::new();
    let mut widget = create_pills(PillWidgetOptions::default());
    widget.set_input_text("is:bogus");

    let err = widget
        .append_value("is:bogus", search.syntax())
        .unwrap_err();
    assert_eq!(
        err,
        PillRejection::InvalidTerm {
            search_string: "is:bogus".to_string()
        }
    );
    assert!(widget.is_empty());
    assert_eq!(widget.input_text(), "is:bogus");
}

#[test]
fn user_operators_stay_plain_on_the_single_token_path() {
    let search = FixtureSearch::new();
    let pill = create_item_from_search_string("sender:alice@example.com", search.syntax()).unwrap();
    assert!(matches!(pill, SearchPill::Search(ref p) if p.operand == "alice@example.com"));
}

#[test]
fn empty_text_is_not_one_term() {
    let search = FixtureSearch::new();
    assert_eq!(
        create_item_from_search_string("   ", search.syntax()),
        Err(PillRejection::NotSingleTerm { count: 0 })
    );
}

#[test]
fn comma_splitting_is_opt_in() {
    let search = FixtureSearch::new();

    let mut search_bar_widget = create_pills(PillWidgetOptions::default());
    let err = search_bar_widget
        .append_value("is:starred, has:link", search.syntax())
        .unwrap_err();
    assert_eq!(err, PillRejection::NotSingleTerm { count: 2 });

    let mut splitting = create_pills(PillWidgetOptions {
        split_text_on_comma: true,
        ..PillWidgetOptions::default()
    });
    splitting
        .append_value("is:starred, has:link,", search.syntax())
        .unwrap();
    assert_eq!(splitting.search_strings(), vec!["is:starred", "has:link"]);

    // One bad piece rejects the whole entry.
    let err = splitting
        .append_value("topic:lunch, is:bogus", search.syntax())
        .unwrap_err();
    assert!(matches!(err, PillRejection::InvalidTerm { .. }));
    assert_eq!(splitting.len(), 2);
}
