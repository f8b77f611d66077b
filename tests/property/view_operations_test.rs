//! Property-based tests for ViewManager operations.
//!
//! Verifies the structural invariants of the rendered view for arbitrary
//! listings: the id-to-node mapping is 1:1, a rendered listing is the exact
//! reverse of the order received, and removal takes out exactly one node
//! while preserving the positions of the rest.

use linkshelf::managers::view_manager::{ViewManager, ViewManagerTrait};
use linkshelf::types::bookmark::Bookmark;
use proptest::prelude::*;

/// Strategy for a listing of bookmarks with distinct ids.
///
/// Ids are drawn from an index shuffle so they are unique; titles, urls, and
/// tags are free-form printable strings (the client never validates them).
fn arb_listing() -> impl Strategy<Value = Vec<Bookmark>> {
    prop::collection::vec(("[a-zA-Z0-9 ]{0,20}", "[ -~]{0,30}", "[a-z, ]{0,15}"), 0..12).prop_map(
        |fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (title, url, tags))| Bookmark {
                    id: i as i64 + 1,
                    title,
                    url,
                    tags,
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // For any listing, the rendered view has one node per record, each node's
    // key equals its record's id, and the front-to-back order is the exact
    // reverse of the order received.
    #[test]
    fn render_all_reverses_and_maps_one_to_one(listing in arb_listing()) {
        let mut view = ViewManager::new();
        view.render_all(&listing);

        prop_assert_eq!(view.node_count(), listing.len());

        let mut expected: Vec<i64> = listing.iter().map(|b| b.id).collect();
        expected.reverse();
        prop_assert_eq!(view.order(), expected);

        for record in &listing {
            let node = view.get_node(record.id)
                .expect("every record must have a node");
            prop_assert_eq!(node.id, record.id);
            prop_assert_eq!(&node.title, &record.title);
            prop_assert_eq!(&node.url, &record.url);
            prop_assert_eq!(&node.tags, &record.tags);
        }
    }

    // Removing any present id takes out exactly that node; every other node
    // keeps its relative position.
    #[test]
    fn remove_preserves_other_positions(
        listing in arb_listing().prop_filter("non-empty", |l| !l.is_empty()),
        index in 0usize..12,
    ) {
        let mut view = ViewManager::new();
        view.render_all(&listing);

        let victim = listing[index % listing.len()].id;
        let before = view.order();

        prop_assert!(view.remove(victim));

        let expected: Vec<i64> = before.into_iter().filter(|&id| id != victim).collect();
        prop_assert_eq!(view.order(), expected);
        prop_assert!(view.get_node(victim).is_none());

        // Fail closed: a second removal of the same id is a no-op.
        let after = view.order();
        prop_assert!(!view.remove(victim));
        prop_assert_eq!(view.order(), after);
    }

    // Rendering the same listing twice is idempotent: render_all clears the
    // previous view first.
    #[test]
    fn render_all_is_idempotent(listing in arb_listing()) {
        let mut view = ViewManager::new();
        view.render_all(&listing);
        let first = view.order();

        view.render_all(&listing);
        prop_assert_eq!(view.order(), first);
    }
}
