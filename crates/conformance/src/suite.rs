//! The `pill_conformance_tests!` macro.
//!
//! Generates one `#[test]` per conformance check for any type that
//! implements `TestableSearch`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use narrowbar_conformance::pill_conformance_tests;
//!
//! struct MySearch { /* grammar + directory */ }
//!
//! // Implement TestableSearch for MySearch ...
//!
//! pill_conformance_tests!(MySearch::new());
//! ```
//!
//! Generated tests are named `conformance_pNN_<property>`; run them with
//! `cargo test conformance_`.

/// Generate conformance tests for a grammar/directory pair.
///
/// `$search_expr` is evaluated afresh in every test.
#[macro_export]
macro_rules! pill_conformance_tests {
    ($search_expr:expr) => {
        #[test]
        fn conformance_p01_order_preservation() {
            let search = $search_expr;
            $crate::checks::p01_order_preservation::check_p01_order_preservation(&search)
                .expect("P1: pill order conformance failed");
        }

        #[test]
        fn conformance_p02_partial_term() {
            let search = $search_expr;
            $crate::checks::p02_partial_term::check_p02_partial_term(&search)
                .expect("P2: partial term conformance failed");
        }

        #[test]
        fn conformance_p03_invalid_aggregation() {
            let search = $search_expr;
            $crate::checks::p03_invalid_aggregation::check_p03_invalid_aggregation(&search)
                .expect("P3: invalid aggregation conformance failed");
        }

        #[test]
        fn conformance_p04_user_expansion() {
            let search = $search_expr;
            $crate::checks::p04_user_expansion::check_p04_user_expansion(&search)
                .expect("P4: user expansion conformance failed");
        }

        #[test]
        fn conformance_p05_round_trip() {
            let search = $search_expr;
            $crate::checks::p05_round_trip::check_p05_round_trip(&search)
                .expect("P5: round trip conformance failed");
        }

        #[test]
        fn conformance_p06_search_demotion() {
            let search = $search_expr;
            $crate::checks::p06_search_demotion::check_p06_search_demotion(&search)
                .expect("P6: search demotion conformance failed");
        }

        #[test]
        fn conformance_p07_reverse_idempotence() {
            let search = $search_expr;
            $crate::checks::p07_reverse_idempotence::check_p07_reverse_idempotence(&search)
                .expect("P7: reverse idempotence conformance failed");
        }

        #[test]
        fn conformance_p08_user_metadata() {
            let search = $search_expr;
            $crate::checks::p08_user_metadata::check_p08_user_metadata(&search)
                .expect("P8: user metadata conformance failed");
        }

        #[test]
        fn conformance_p09_demotion_order() {
            let search = $search_expr;
            $crate::checks::p09_demotion_order::check_p09_demotion_order(&search)
                .expect("P9: demotion order conformance failed");
        }

        #[test]
        fn conformance_p10_single_token() {
            let search = $search_expr;
            $crate::checks::p10_single_token::check_p10_single_token(&search)
                .expect("P10: single token conformance failed");
        }
    };
}
