//! Behavioural tests for the search engine.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{build, children, setup, Node};
use horizon_outline::{FilterState, FoundItems, SharedOutline};

/// alpha -> beta -> gamma, none of them with a value.
fn chain() -> Node {
    Node::group(
        "alpha",
        vec![Node::group("beta", vec![Node::leaf("gamma", "")])],
    )
}

/// plant
/// ├── tank = 1
/// │   ├── level = 40
/// │   └── valve = -
/// └── pump
///     └── speed = -
fn plant() -> Node {
    Node::group(
        "plant",
        vec![
            Node::group(
                "tank",
                vec![Node::leaf("level", "40"), Node::leaf("valve", "-")],
            )
            .with_value("1"),
            Node::group("pump", vec![Node::leaf("speed", "-")]),
        ],
    )
}

#[test]
fn test_filter_is_idempotent_within_session() {
    setup();
    let probe = Arc::new(AtomicUsize::new(0));
    let (mut outline, root) = build(chain().probed(&probe));
    let mut found = FoundItems::new();

    let first = outline.search(root, "beta", false, &mut found);
    let reads = probe.load(Ordering::SeqCst);
    assert!(reads > 0);

    assert_eq!(outline.filter(root, "beta", false, &mut found), first);
    for id in outline.subtree(root).unwrap() {
        outline.filter(id, "beta", false, &mut found);
    }
    assert_eq!(probe.load(Ordering::SeqCst), reads);
}

#[test]
fn test_reset_clears_whole_subtree() {
    setup();
    let (mut outline, root) = build(chain());
    let mut found = FoundItems::new();
    outline.search(root, "alpha", false, &mut found);
    assert!(outline.ancestor_match(root));

    outline.reset_filter(root).unwrap();
    for id in outline.subtree(root).unwrap() {
        assert_eq!(outline.filter_state(id), FilterState::Unknown);
        assert!(!outline.ancestor_match(id));
    }
}

#[test]
fn test_match_propagates_to_descendants() {
    setup();
    let (mut outline, a) = build(chain());
    let b = children(&outline, a)[0];
    let c = children(&outline, b)[0];
    let mut found = FoundItems::new();

    assert!(outline.search(a, "alpha", false, &mut found));
    for id in [a, b, c] {
        assert_eq!(outline.filter_state(id), FilterState::Matched);
        assert!(outline.ancestor_match(id));
    }
    assert_eq!(found.as_slice(), &[a]);
}

#[test]
fn test_hide_empty_hides_unfilled_descendant() {
    setup();
    let root = Node::group("alpha", vec![Node::leaf("beta", "-")]).with_value("1");
    let (mut outline, a) = build(root);
    let b = children(&outline, a)[0];
    let mut found = FoundItems::new();

    assert!(outline.search(a, "alpha", true, &mut found));
    assert_eq!(outline.filter_state(b), FilterState::NotMatched);

    assert!(outline.search(a, "alpha", false, &mut found));
    assert_eq!(outline.filter_state(b), FilterState::Matched);
}

#[test]
fn test_hide_empty_applies_to_matched_node() {
    setup();
    let root = Node::group("alpha", vec![Node::leaf("beta", "-")]);
    let (mut outline, a) = build(root);
    let mut found = FoundItems::new();

    assert!(!outline.search(a, "alpha", true, &mut found));
    assert!(found.is_empty());
}

#[test]
fn test_found_items_deduplicated() {
    setup();
    let (mut outline, root) = build(chain());
    let mut found = FoundItems::new();

    outline.search(root, "a", false, &mut found);
    assert_eq!(found.len(), 3);

    // A second pass without clearing must not add anything.
    outline.reset_filter(root).unwrap();
    outline.filter(root, "a", false, &mut found);
    for id in outline.subtree(root).unwrap() {
        outline.filter(id, "a", false, &mut found);
    }
    assert_eq!(found.len(), 3);
}

#[test]
fn test_direct_filter_inherits_from_linked_parent() {
    setup();
    let (mut outline, a) = build(chain());
    let b = children(&outline, a)[0];
    let mut found = FoundItems::new();

    outline.search(a, "alpha", false, &mut found);
    outline.reset_filter(b).unwrap();
    assert!(outline.ancestor_match(a));
    assert!(!outline.ancestor_match(b));

    assert!(outline.filter(b, "alpha", false, &mut found));
    assert!(outline.ancestor_match(b));
}

#[test]
fn test_visible_nodes_skip_hidden_subtrees() {
    setup();
    let (mut outline, root) = build(plant());
    let tank = children(&outline, root)[0];
    let tank_children = children(&outline, tank);
    let mut found = FoundItems::new();

    let rows = outline.visible_nodes(root, "level", true, &mut found);
    assert_eq!(rows, vec![root, tank, tank_children[0]]);
    assert_eq!(found.as_slice(), &[tank_children[0]]);

    let rows = outline.visible_nodes(root, "v", false, &mut found);
    assert_eq!(rows, vec![root, tank, tank_children[0], tank_children[1]]);
    assert_eq!(found.len(), 2);
}

#[test]
fn test_empty_search_shows_filled_only() {
    setup();
    let (mut outline, root) = build(plant());
    let tank = children(&outline, root)[0];
    let level = children(&outline, tank)[0];
    let mut found = FoundItems::new();

    for hide_empty in [true, false] {
        let rows = outline.visible_nodes(root, "", hide_empty, &mut found);
        assert_eq!(rows, vec![root, tank, level]);
        assert!(found.is_empty());
    }
}

#[test]
fn test_shared_search_matches_manual_session() {
    setup();
    let (mut outline, root) = build(plant());
    let mut found = FoundItems::new();
    outline.search(root, "v", false, &mut found);
    let manual = found.as_slice().to_vec();

    let shared = SharedOutline::new(outline);
    assert_eq!(shared.search(root, "v", false), manual);
    assert_eq!(shared.search(root, "v", false), manual);
}

#[test]
fn test_edit_refreshes_filled_after_search() {
    setup();
    let (mut outline, root) = build(Node::group("tank", vec![Node::leaf("level", "-")]));
    let level = children(&outline, root)[0];
    let mut found = FoundItems::new();

    assert!(!outline.search(root, "", true, &mut found));
    assert!(!outline.is_filled(level));
    assert!(!outline.is_filled(root));

    assert!(outline.set_value(level, "42"));
    assert!(outline.is_filled(level));
    assert!(outline.is_filled(root));
    assert_eq!(outline.visible_nodes(root, "", true, &mut found), vec![root, level]);

    assert!(outline.set_value(level, "-"));
    assert!(!outline.is_filled(root));
}

#[test]
fn test_search_on_inner_node_starts_fresh() {
    setup();
    let (mut outline, a) = build(chain());
    let b = children(&outline, a)[0];
    let c = children(&outline, b)[0];
    let mut found = FoundItems::new();

    assert!(outline.search(a, "alpha", false, &mut found));
    assert!(outline.ancestor_match(a));

    assert!(!outline.search(b, "zzz", false, &mut found));
    assert!(found.is_empty());
    assert_eq!(outline.filter_state(b), FilterState::NotMatched);
    assert_eq!(outline.filter_state(c), FilterState::NotMatched);

    assert!(outline.search(b, "gamma", false, &mut found));
    assert_eq!(found.as_slice(), &[c]);
    assert!(!outline.ancestor_match(b));
}
