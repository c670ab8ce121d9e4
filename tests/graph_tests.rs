use pathgraph::graph::{DirectedGraph, Graph, MutableGraph, SlotState};
use pathgraph::{Error, IdentifierSpace};

#[test]
fn test_add_vertex_fills_gaps() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();
    graph.add_vertex(3);

    assert_eq!(graph.vertex_count(), 4);
    for (i, vertex) in graph.vertices().iter().enumerate() {
        assert_eq!(vertex.id(), i, "ids must match positions");
    }
    assert_eq!(graph.get_vertex(3).unwrap().state(), SlotState::Declared);
    assert_eq!(graph.get_vertex(1).unwrap().state(), SlotState::Vacant);
    assert_eq!(graph.get_vertex(1).unwrap().arc_count(), 0);
}

#[test]
fn test_add_vertex_keeps_existing_arcs() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    graph.add_arc(0, 1, 4).unwrap();
    graph.add_vertex(0);
    assert_eq!(graph.arc_weight(0, 1), Some(4));
}

#[test]
fn test_add_new_vertex_reuses_holes() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();
    graph.add_vertex(0);
    graph.add_vertex(2);

    assert_eq!(graph.add_new_vertex().id(), 1);
    assert!(graph.get_vertex(1).unwrap().is_declared());
    assert_eq!(graph.add_new_vertex().id(), 3);
    assert_eq!(graph.vertex_count(), 4);
}

#[test]
fn test_get_vertex_out_of_range() {
    let graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    assert!(graph.get_vertex(1).is_ok());
    assert!(matches!(graph.get_vertex(2), Err(Error::NotFound(2))));
}

#[test]
fn test_repeated_arc_overwrites_weight() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    assert_eq!(graph.add_arc(0, 1, 5).unwrap(), None);
    assert_eq!(graph.add_arc(0, 1, 7).unwrap(), Some(5));
    assert_eq!(graph.arc_weight(0, 1), Some(7));
    assert_eq!(graph.arc_count(), 1);

    assert_eq!(graph.remove_arc(0, 1), Some(7));
    assert!(!graph.has_arc(0, 1));
}

#[test]
fn test_add_arc_from_missing_vertex() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(1);
    assert!(matches!(graph.add_arc(3, 0, 1), Err(Error::NotFound(3))));
}

#[test]
fn test_validate_accepts_well_formed_graph() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(3);
    graph.add_arc(0, 1, 2).unwrap();
    graph.add_arc(1, 2, 0).unwrap();
    graph.add_arc(2, 0, 9).unwrap();
    assert!(graph.validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_target() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    graph.add_arc(0, 5, 1).unwrap();

    let err = graph.validate().unwrap_err();
    assert!(matches!(err, Error::Validation { vertex: 0, target: 5 }));
    let message = err.to_string();
    assert!(message.contains("vertex 5"));
    assert!(message.contains("vertex 0"));
}

#[test]
fn test_validate_rejects_arc_to_vacant_zero() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();
    graph.add_vertex(2);
    graph.add_arc(2, 0, 1).unwrap();

    assert!(matches!(
        graph.validate(),
        Err(Error::Validation { vertex: 2, target: 0 })
    ));

    // declaring vertex 0 makes the same arc legal
    graph.add_vertex(0);
    assert!(graph.validate().is_ok());
}

#[test]
fn test_validate_accepts_arc_to_gap_filled_vertex() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();
    graph.add_vertex(0);
    graph.add_vertex(2);
    graph.add_arc(0, 1, 1).unwrap();
    assert!(graph.validate().is_ok());
}

#[test]
fn test_validate_rejects_negative_weight() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    graph.add_arc(1, 0, -4).unwrap();

    match graph.validate() {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!((from, to), (1, 0));
            assert_eq!(weight, "-4");
        }
        other => panic!("expected negative weight error, got {:?}", other),
    }
}

#[test]
fn test_identifier_space_lookup_or_create() {
    let mut space = IdentifierSpace::new();
    assert!(space.is_empty());

    assert_eq!(space.lookup_or_create("paris"), 0);
    assert_eq!(space.lookup_or_create("rome"), 1);
    assert_eq!(space.lookup_or_create("paris"), 0);
    assert_eq!(space.len(), 2);

    assert_eq!(space.get_id("rome"), Some(1));
    assert_eq!(space.get_id("oslo"), None);
    assert_eq!(space.get_mapped(1).unwrap(), "rome");
    assert!(matches!(space.get_mapped(2), Err(Error::Mapping(2))));
    assert_eq!(space.labels().collect::<Vec<_>>(), vec!["paris", "rome"]);
}

#[test]
fn test_labeled_vertices_switch_to_mapped_mode() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();
    assert!(!graph.is_mapped());

    let a = graph.add_labeled_vertex("a").unwrap().id();
    let b = graph.add_labeled_vertex("b").unwrap().id();
    graph.add_arc(a, b, 3).unwrap();

    assert!(graph.is_mapped());
    assert_eq!(graph.get_mapped(b).unwrap(), "b");
    assert_eq!(graph.resolve_label("a").unwrap(), a);
    assert!(matches!(graph.resolve_label("0"), Err(Error::UnknownLabel(_))));
    assert!(graph.validate().is_ok());
}

#[test]
fn test_labeled_vertex_rejected_in_integer_graph() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(1);
    assert!(matches!(
        graph.add_labeled_vertex("a"),
        Err(Error::MixedMode(label)) if label == "a"
    ));
}

#[test]
fn test_get_mapped_requires_mapped_mode() {
    let graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    assert!(matches!(graph.get_mapped(0), Err(Error::Mapping(0))));
    assert_eq!(graph.label_of(1).unwrap(), "1");
    assert!(matches!(graph.label_of(2), Err(Error::NotFound(2))));
    assert_eq!(graph.resolve_label("1").unwrap(), 1);
    assert!(graph.resolve_label("7").is_err());
}
