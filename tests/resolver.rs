//! Tests for direct and transitive upstream dependency resolution.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_linear_chain_splits_direct_and_transitive() {
    let journey = create_linear_journey();
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("C");
    assert_eq!(form_ids(&deps.direct), vec!["FB"]);
    assert_eq!(form_ids(&deps.transitive), vec!["FA"]);
}

#[test]
fn test_root_node_has_no_dependencies() {
    let journey = create_linear_journey();
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("A");
    assert!(deps.is_empty());
}

#[test]
fn test_unknown_node_resolves_to_nothing() {
    let journey = create_linear_journey();
    let resolver = DependencyResolver::new(&journey);

    assert!(resolver.resolve("nope").is_empty());
}

#[test]
fn test_diamond_direct_in_edge_order_transitive_deduplicated() {
    let journey = create_diamond_journey();
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("D");
    assert_eq!(form_ids(&deps.direct), vec!["FB", "FC"]);
    // FA is reachable through both B and C but must appear once.
    assert_eq!(form_ids(&deps.transitive), vec!["FA"]);
}

#[test]
fn test_cycle_terminates_and_excludes_own_form() {
    let journey = create_cyclic_journey();
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("B");
    assert_eq!(form_ids(&deps.direct), vec!["FA"]);
    assert!(
        deps.transitive.iter().all(|f| f.id != "FB"),
        "the selected node's own form must not be a transitive dependency"
    );
}

#[test]
fn test_duplicate_direct_edges_are_retained() {
    let mut journey = create_linear_journey();
    // A second edge B -> C: direct lists one entry per incoming edge.
    journey.edges.push(edge("B", "C"));
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("C");
    assert_eq!(form_ids(&deps.direct), vec!["FB", "FB"]);
}

#[test]
fn test_transitive_never_contains_duplicate_form_ids() {
    // Two nodes sharing one reusable form, both upstream of the target.
    let journey = JourneyDefinition {
        nodes: vec![
            node("A1", "FA"),
            node("A2", "FA"),
            node("B", "FB"),
            node("C", "FC"),
        ],
        edges: vec![
            edge("A1", "B"),
            edge("A2", "B"),
            edge("B", "C"),
        ],
        forms: vec![
            form("FA", "Form A", &[("email", "string")]),
            form("FB", "Form B", &[("notes", "string")]),
            form("FC", "Form C", &[("name", "string")]),
        ],
        ..Default::default()
    };
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("C");
    assert_eq!(form_ids(&deps.transitive), vec!["FA"]);
}

#[test]
fn test_missing_source_node_is_skipped() {
    let mut journey = create_linear_journey();
    journey.edges.push(edge("ghost", "C"));
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("C");
    assert_eq!(form_ids(&deps.direct), vec!["FB"]);
    assert_eq!(form_ids(&deps.transitive), vec!["FA"]);
}

#[test]
fn test_formless_node_contributes_nothing_but_traversal_continues() {
    // A -> X -> C where X references a form that does not exist.
    let journey = JourneyDefinition {
        nodes: vec![node("A", "FA"), node("X", "missing"), node("C", "FC")],
        edges: vec![edge("A", "X"), edge("X", "C")],
        forms: vec![
            form("FA", "Form A", &[("email", "string")]),
            form("FC", "Form C", &[("name", "string")]),
        ],
        ..Default::default()
    };
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("C");
    assert!(deps.direct.is_empty());
    // The walk passes through the formless node to reach A.
    assert_eq!(form_ids(&deps.transitive), vec!["FA"]);
}

#[test]
fn test_deep_cycle_terminates() {
    // A ring of four nodes; resolution from any of them must terminate.
    let journey = JourneyDefinition {
        nodes: vec![
            node("A", "FA"),
            node("B", "FB"),
            node("C", "FC"),
            node("D", "FD"),
        ],
        edges: vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "D"),
            edge("D", "A"),
        ],
        forms: vec![
            form("FA", "Form A", &[("email", "string")]),
            form("FB", "Form B", &[("notes", "string")]),
            form("FC", "Form C", &[("name", "string")]),
            form("FD", "Form D", &[("summary", "string")]),
        ],
        ..Default::default()
    };
    let resolver = DependencyResolver::new(&journey);

    let deps = resolver.resolve("C");
    assert_eq!(form_ids(&deps.direct), vec!["FB"]);
    // FC (the selected node's own form) is excluded; FB reappears because
    // the ring also reaches B by a longer path.
    assert_eq!(form_ids(&deps.transitive), vec!["FA", "FD", "FB"]);
}
