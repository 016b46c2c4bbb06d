//! Property-based tests for the bookmark filter engine.
//!
//! These tests verify that filtering is a pure selection: it never invents,
//! mutates, or reorders records, behaves case-insensitively, and combines
//! the category and query predicates with AND semantics.

use markstash::services::filter_bookmarks;
use markstash::types::bookmark::Bookmark;
use proptest::prelude::*;

/// Strategy for generating printable ASCII titles, possibly empty.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,20}"
}

/// Strategy for generating simple absolute URLs.
fn arb_url() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{2,10}", prop_oneof![Just(".com"), Just(".org"), Just(".io")])
        .prop_map(|(host, tld)| format!("https://{}{}", host, tld))
}

/// Strategy for generating a bookmark with an optional description and one
/// of a small fixed set of category ids (or none).
fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (
        "[a-f0-9]{8}",
        arb_title(),
        arb_url(),
        proptest::option::of("[a-zA-Z ]{1,15}"),
        proptest::option::of(prop_oneof![Just("cat-a".to_string()), Just("cat-b".to_string())]),
        any::<bool>(),
    )
        .prop_map(|(id, title, url, description, category, favorite)| Bookmark {
            id,
            title,
            url,
            description,
            category,
            created_at: 0,
            updated_at: 0,
            favorite,
            owner_id: "owner".to_string(),
        })
}

fn arb_bookmarks() -> impl Strategy<Value = Vec<Bookmark>> {
    proptest::collection::vec(arb_bookmark(), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // With no active category and an empty query, filtering is the identity.
    #[test]
    fn no_filters_returns_input_unchanged(bookmarks in arb_bookmarks()) {
        let result = filter_bookmarks(&bookmarks, None, "");
        prop_assert_eq!(result, bookmarks);
    }

    // The output is always a subsequence of the input: every result appears
    // in the input, in the same relative order, and nothing is mutated.
    #[test]
    fn output_is_an_ordered_subsequence_of_input(
        bookmarks in arb_bookmarks(),
        category in proptest::option::of(prop_oneof![Just("cat-a"), Just("cat-b")]),
        query in "[a-zA-Z0-9 ]{0,8}",
    ) {
        let result = filter_bookmarks(&bookmarks, category, &query);

        prop_assert!(result.len() <= bookmarks.len());
        let mut cursor = 0;
        for kept in &result {
            let position = bookmarks[cursor..]
                .iter()
                .position(|b| b == kept);
            prop_assert!(
                position.is_some(),
                "result record {:?} not found in input order",
                kept.id
            );
            cursor += position.unwrap_or_default() + 1;
        }
    }

    // Every record in the output satisfies both predicates; every input
    // record missing from the output fails at least one.
    #[test]
    fn output_is_exactly_the_matching_records(
        bookmarks in arb_bookmarks(),
        category in proptest::option::of(prop_oneof![Just("cat-a"), Just("cat-b")]),
        query in "[a-z]{0,5}",
    ) {
        let result = filter_bookmarks(&bookmarks, category, &query);
        let needle = query.to_lowercase();

        let matches = |b: &Bookmark| -> bool {
            let category_ok = match category {
                Some(active) => b.category.as_deref() == Some(active),
                None => true,
            };
            let query_ok = needle.is_empty()
                || b.title.to_lowercase().contains(&needle)
                || b.url.to_lowercase().contains(&needle)
                || b.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
            category_ok && query_ok
        };

        for kept in &result {
            prop_assert!(matches(kept), "kept record {:?} fails a predicate", kept.id);
        }
        for bookmark in &bookmarks {
            if matches(bookmark) {
                prop_assert!(
                    result.contains(bookmark),
                    "matching record {:?} was dropped",
                    bookmark.id
                );
            }
        }
    }

    // Query matching ignores case: upper- and lower-cased queries select
    // the same records.
    #[test]
    fn query_matching_is_case_insensitive(
        bookmarks in arb_bookmarks(),
        query in "[a-zA-Z]{1,8}",
    ) {
        let lower = filter_bookmarks(&bookmarks, None, &query.to_lowercase());
        let upper = filter_bookmarks(&bookmarks, None, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    // Category and query combine with AND: the combined result equals the
    // intersection of filtering by each alone, in input order.
    #[test]
    fn filters_combine_with_and_semantics(
        bookmarks in arb_bookmarks(),
        category in prop_oneof![Just("cat-a"), Just("cat-b")],
        query in "[a-z]{1,5}",
    ) {
        let combined = filter_bookmarks(&bookmarks, Some(category), &query);
        let by_category = filter_bookmarks(&bookmarks, Some(category), "");
        let by_query = filter_bookmarks(&bookmarks, None, &query);

        let intersection: Vec<Bookmark> = bookmarks
            .iter()
            .filter(|b| by_category.contains(b) && by_query.contains(b))
            .cloned()
            .collect();
        prop_assert_eq!(combined, intersection);
    }
}
