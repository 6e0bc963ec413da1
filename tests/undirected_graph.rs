use dualgraph::{GraphError, UndirectedGraph};

fn names(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn collected_from_pairs() {
    let g: UndirectedGraph = [("A", "B"), ("B", "C"), ("C", "A"), ("A", "A"), ("B", "A")]
        .into_iter()
        .collect();
    assert_eq!(g.vertices(), names(&["A", "B", "C"]));
    assert_eq!(g.edge_count(), 3);
    assert!(g.has_cycle());
}

#[test]
fn errors_report_offending_labels() {
    let mut g: UndirectedGraph = UndirectedGraph::from_edges([("x", "y")]);
    let error = g.try_add_edge("y", "x").unwrap_err();
    assert_eq!(error.to_string(), r#"edge "y" -- "x" already exists"#);

    assert!(matches!(g.try_remove_vertex("z"), Err(GraphError::VertexNotFound { .. })));
    assert!(matches!(g.try_remove_edge("x", "z"), Err(GraphError::VertexNotFound { .. })));
}

#[test]
fn searches_stop_at_target_and_skip_other_components() {
    let mut g: UndirectedGraph = UndirectedGraph::from_edges([
        ("m", "k"),
        ("m", "a"),
        ("a", "z"),
        ("k", "z"),
        ("p", "q"),
    ]);
    g.add_vertex("lonely");

    assert_eq!(g.dfs("m", None), names(&["m", "a", "z", "k"]));
    assert_eq!(g.bfs("m", None), names(&["m", "a", "k", "z"]));
    assert_eq!(g.dfs("m", Some("z")), names(&["m", "a", "z"]));
    assert_eq!(g.bfs("m", Some("p")), names(&["m", "a", "k", "z"]));
    assert_eq!(g.count_connected_components(), 3);
}

#[test]
fn removing_the_cycle_edge_breaks_the_cycle() {
    let mut g: UndirectedGraph =
        UndirectedGraph::from_edges([("1", "2"), ("2", "3"), ("3", "4"), ("4", "1")]);
    assert!(g.has_cycle());
    assert!(g.remove_edge("4", "1"));
    assert!(!g.has_cycle());
    assert!(g.is_valid_path(&["1", "2", "3", "4"]));
    assert!(!g.is_valid_path(&["4", "1"]));

    assert!(g.remove_vertex("2"));
    assert_eq!(g.count_connected_components(), 2);
    assert_eq!(g.connected_components(), vec![names(&["1"]), names(&["3", "4"])]);
}
