//! Tests for link resolution: short id assignment, deduplication, and the
//! execution-pin skip rule.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_resolves_chain_into_ordered_links() {
    let connections = vec![
        conn("evt-1", "Fired", "act-1", "State"),
        conn("act-1", "Done", "act-2", "Color"),
    ];

    let resolution = resolve_links(&connections).expect("Failed to resolve links");

    // Short ids are handed out start-then-end, in connection order.
    assert_eq!(resolution.ids.get("evt-1").unwrap().as_char(), 'a');
    assert_eq!(resolution.ids.get("act-1").unwrap().as_char(), 'b');
    assert_eq!(resolution.ids.get("act-2").unwrap().as_char(), 'c');

    let keys: Vec<String> = resolution.links.iter().map(Link::to_string).collect();
    assert_eq!(keys, vec!["b a", "c b"]);
}

#[test]
fn test_bijection_is_invertible() {
    let connections = vec![conn("evt-1", "Fired", "act-1", "State")];
    let resolution = resolve_links(&connections).expect("Failed to resolve links");

    let a = resolution.ids.get("evt-1").unwrap();
    assert_eq!(resolution.ids.uuid_of(a), Some("evt-1"));
    assert_eq!(resolution.ids.len(), 2);
}

#[test]
fn test_control_only_connections_produce_no_links() {
    let connections = vec![
        conn("evt-1", "::Ex Out", "act-1", "::Ex In"),
        conn("act-1", "::Ex Out", "act-2", "::Ex In"),
    ];

    let resolution = resolve_links(&connections).expect("Failed to resolve links");

    assert!(resolution.links.is_empty());
    assert!(resolution.ids.is_empty());
}

#[test]
fn test_mixed_pin_connection_still_forms_link() {
    // One execution pin is fine; only pure control-to-control is skipped.
    let connections = vec![conn("evt-1", "::Ex Out", "act-1", "State")];

    let resolution = resolve_links(&connections).expect("Failed to resolve links");

    assert_eq!(resolution.links.len(), 1);
}

#[test]
fn test_duplicate_pair_keeps_position_takes_last_representative() {
    let connections = vec![
        conn("evt-1", "Fired", "act-1", "State"),
        conn("act-1", "Done", "act-2", "Color"),
        // Same node pair as the first connection, different pins.
        conn("evt-1", "Fired", "act-1", "Duration"),
    ];

    let resolution = resolve_links(&connections).expect("Failed to resolve links");

    // No duplicate entry, position preserved.
    let keys: Vec<String> = resolution.links.iter().map(Link::to_string).collect();
    assert_eq!(keys, vec!["b a", "c b"]);

    // The stored representative reflects the last occurrence's pin names.
    let first = resolution.links[0];
    let representative = &resolution.representatives[&first];
    assert_eq!(representative.end_pin, "Duration");
}

#[test]
fn test_reversed_pair_is_a_distinct_link() {
    // A->B and B->A are different ordered pairs; both survive (and later
    // fail forest construction as a cycle).
    let connections = vec![
        conn("node-a", "Done", "node-b", "State"),
        conn("node-b", "Done", "node-a", "State"),
    ];

    let resolution = resolve_links(&connections).expect("Failed to resolve links");

    assert_eq!(resolution.links.len(), 2);
}

#[test]
fn test_short_id_space_exhaustion() {
    // A star of 26 children under one root brings the 27th distinct node.
    let connections: Vec<Connection> = (0..26)
        .map(|i| conn("hub", "Done", &format!("leaf-{i}"), "State"))
        .collect();

    let result = resolve_links(&connections);
    match result {
        Err(CompileError::TooManyNodes { uuid, limit }) => {
            assert_eq!(uuid, "leaf-25");
            assert_eq!(limit, 26);
        }
        other => panic!("Expected TooManyNodes, got {other:?}"),
    }
}

#[test]
fn test_exactly_26_nodes_is_allowed() {
    let connections: Vec<Connection> = (0..25)
        .map(|i| conn("hub", "Done", &format!("leaf-{i}"), "State"))
        .collect();

    let resolution = resolve_links(&connections).expect("26 nodes should fit");
    assert_eq!(resolution.ids.len(), 26);
    assert_eq!(resolution.links.len(), 25);
}
