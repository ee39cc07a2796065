//! Property tests for the result map contract: exactly one entry per
//! distinct selector, keys in ascending sorted order, independent of the
//! input checklist's order.

use proptest::prelude::*;

use htmlgrader::{Checklist, checker};

proptest! {
    #[test]
    fn report_keys_equal_sorted_distinct_input(
        selectors in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..16)
    ) {
        let checks = Checklist::from_selectors(selectors.clone());
        let results = checker::check_document(
            "<html><body><p>x</p></body></html>",
            &checks,
        ).unwrap();

        let mut expected = selectors;
        expected.sort();
        expected.dedup();

        let keys: Vec<String> = results.keys().cloned().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn shuffling_the_checklist_does_not_change_the_report(
        mut selectors in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..16)
    ) {
        let html = "<html><body><p>x</p><a href=\"/y\">y</a></body></html>";

        let forward = checker::check_document(
            html,
            &Checklist::from_selectors(selectors.clone()),
        ).unwrap();
        selectors.reverse();
        let reversed = checker::check_document(
            html,
            &Checklist::from_selectors(selectors),
        ).unwrap();

        prop_assert_eq!(forward, reversed);
    }
}
