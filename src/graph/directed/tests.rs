//! Tests for the directed weighted graph.

use super::*;
use crate::config::GrowthPolicy;
use crate::weight::Distance;

fn both_stores() -> [DirectedWeightedGraph<i64>; 2] {
    [
        DirectedWeightedGraph::with_config(GraphConfig::dense()).unwrap(),
        DirectedWeightedGraph::with_config(GraphConfig::sparse()).unwrap(),
    ]
}

fn with_vertices(mut graph: DirectedWeightedGraph<i64>, n: usize) -> DirectedWeightedGraph<i64> {
    for _ in 0..n {
        graph.add_vertex();
    }
    graph
}

#[test]
fn test_add_vertex_returns_count() {
    let mut g: DirectedWeightedGraph = DirectedWeightedGraph::new();
    assert_eq!(g.add_vertex(), 1);
    assert_eq!(g.add_vertex(), 2);
    assert_eq!(g.vertices(), vec![0, 1]);
    assert!(g.edges().is_empty());
}

#[test]
fn test_add_edge_rejections() {
    for g in both_stores() {
        let mut g = with_vertices(g, 3);

        assert_eq!(g.try_add_edge(1, 1, 5), Err(GraphError::self_loop(&1usize)));
        assert_eq!(g.try_add_edge(0, 3, 5), Err(GraphError::vertex_not_found(&3usize)));
        assert_eq!(g.try_add_edge(7, 0, 5), Err(GraphError::vertex_not_found(&7usize)));
        assert!(matches!(
            g.try_add_edge(0, 1, -2),
            Err(GraphError::NegativeWeight { .. })
        ));

        assert!(!g.add_edge(2, 2, 1));
        assert!(g.edges().is_empty(), "{:?} stored a rejected edge", g.storage_strategy());
    }
}

#[test]
fn test_add_edge_overwrites_weight() {
    for g in both_stores() {
        let mut g = with_vertices(g, 2);
        assert!(g.add_edge(0, 1, 3));
        assert!(g.add_edge(0, 1, 9));
        assert_eq!(g.edges(), vec![(0, 1, 9)]);
        assert_eq!(g.edge_count(), 1);
    }
}

#[test]
fn test_zero_weight_clears_edge() {
    for g in both_stores() {
        let mut g = with_vertices(g, 3);
        g.add_edge(0, 1, 5);
        g.add_edge(1, 2, 6);

        assert!(g.add_edge(0, 1, 0));
        assert!(!g.has_edge(0, 1));
        assert_eq!(g.edges(), vec![(1, 2, 6)]);

        // Zeroing an absent edge is accepted and changes nothing.
        assert_eq!(g.try_add_edge(2, 0, 0), Ok(()));
        assert_eq!(g.edge_count(), 1);
        assert!(!g.add_edge(1, 1, 0));
    }

    let seeded: DirectedWeightedGraph = DirectedWeightedGraph::from_edges([(0, 1, 5), (0, 1, 0)]);
    assert_eq!(seeded.vertex_count(), 2);
    assert!(seeded.edges().is_empty());
}

#[test]
fn test_remove_edge() {
    for g in both_stores() {
        let mut g = with_vertices(g, 3);
        g.add_edge(0, 1, 2);
        g.add_edge(1, 2, 4);

        assert!(g.remove_edge(0, 1));
        assert!(!g.remove_edge(0, 1));
        assert!(!g.remove_edge(1, 1));
        assert!(!g.remove_edge(5, 1));
        assert_eq!(g.try_remove_edge(2, 0), Err(GraphError::edge_not_found(&2usize, &0usize)));
        assert_eq!(g.edges(), vec![(1, 2, 4)]);
    }
}

#[test]
fn test_edges_row_major() {
    let g: DirectedWeightedGraph =
        DirectedWeightedGraph::from_edges([(2, 0, 1), (0, 2, 3), (0, 1, 5)]);
    assert_eq!(g.edges(), vec![(0, 1, 5), (0, 2, 3), (2, 0, 1)]);
    assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![(1, 5), (2, 3)]);
}

#[test]
fn test_successors_of_absent_vertex_are_empty() {
    for g in both_stores() {
        let mut g = with_vertices(g, 2);
        g.add_edge(0, 1, 1);
        assert_eq!(g.successors(7).count(), 0);
        assert_eq!(g.successors(2).next(), None);
        assert_eq!(g.successors(1).count(), 0);
    }
    let empty: DirectedWeightedGraph = DirectedWeightedGraph::new();
    assert_eq!(empty.successors(0).count(), 0);
}

#[test]
fn test_try_add_vertex_reports_count() {
    for g in both_stores() {
        let mut g = with_vertices(g, 2);
        assert_eq!(g.try_add_vertex(), Ok(3));
        assert_eq!(g.add_vertex(), 4);
    }
}

#[test]
fn test_from_edges_sizes_to_max_index() {
    let g: DirectedWeightedGraph = DirectedWeightedGraph::from_edges([(0, 4, 1), (3, 3, 1)]);
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edges(), vec![(0, 4, 1)]);

    let empty: DirectedWeightedGraph = DirectedWeightedGraph::from_edges(Vec::new());
    assert!(empty.is_empty());
}

#[test]
fn test_is_valid_path() {
    let g: DirectedWeightedGraph = DirectedWeightedGraph::from_edges([(0, 1, 1), (1, 2, 1)]);
    assert!(g.is_valid_path(&[]));
    assert!(g.is_valid_path(&[2]));
    assert!(g.is_valid_path(&[42]));
    assert!(g.is_valid_path(&[0, 1, 2]));
    assert!(!g.is_valid_path(&[2, 1]));
    assert!(!g.is_valid_path(&[1, 9]));
}

#[test]
fn test_dfs_ascending_order() {
    // 0 -> 3, 0 -> 1, 1 -> 2, 3 -> 2
    let g: DirectedWeightedGraph =
        DirectedWeightedGraph::from_edges([(0, 3, 1), (0, 1, 1), (1, 2, 1), (3, 2, 1)]);
    assert_eq!(g.dfs(0, None), vec![0, 1, 2, 3]);
    assert_eq!(g.bfs(0, None), vec![0, 1, 3, 2]);
}

#[test]
fn test_search_stops_at_target() {
    let g: DirectedWeightedGraph =
        DirectedWeightedGraph::from_edges([(0, 1, 1), (0, 2, 1), (2, 3, 1)]);
    assert_eq!(g.dfs(0, Some(1)), vec![0, 1]);
    assert_eq!(g.bfs(0, Some(2)), vec![0, 1, 2]);
    assert_eq!(g.dfs(0, Some(0)), vec![0]);
    // A target outside the graph never stops the search.
    assert_eq!(g.bfs(0, Some(99)), vec![0, 1, 2, 3]);
}

#[test]
fn test_search_absent_start() {
    let g: DirectedWeightedGraph = DirectedWeightedGraph::from_edges([(0, 1, 1)]);
    assert!(g.dfs(5, None).is_empty());
    assert!(g.bfs(5, None).is_empty());

    let empty: DirectedWeightedGraph = DirectedWeightedGraph::new();
    assert!(empty.dfs(0, None).is_empty());
}

#[test]
fn test_has_cycle() {
    let cyclic: DirectedWeightedGraph =
        DirectedWeightedGraph::from_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    let acyclic: DirectedWeightedGraph = DirectedWeightedGraph::from_edges([(0, 1, 1), (1, 2, 1)]);
    assert!(cyclic.has_cycle());
    assert!(!acyclic.has_cycle());
}

#[test]
fn test_has_cycle_ignores_cross_edges() {
    // Diamond 0 -> {1, 2} -> 3 has a cross edge into a finished vertex.
    let diamond: DirectedWeightedGraph =
        DirectedWeightedGraph::from_edges([(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
    assert!(!diamond.has_cycle());

    // Two-cycle in a component not reachable from vertex 0.
    let mut split: DirectedWeightedGraph =
        DirectedWeightedGraph::from_edges([(0, 1, 1), (3, 4, 1)]);
    assert!(!split.has_cycle());
    split.add_edge(4, 3, 1);
    assert!(split.has_cycle());
}

#[test]
fn test_dijkstra_prefers_indirect_route() {
    for g in both_stores() {
        let mut g = with_vertices(g, 3);
        g.extend([(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
        assert_eq!(
            g.dijkstra(0),
            vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(1)]
        );
    }
}

#[test]
fn test_dijkstra_unreachable_and_bad_source() {
    let g: DirectedWeightedGraph = DirectedWeightedGraph::from_edges([(1, 0, 3), (2, 3, 1)]);
    assert_eq!(
        g.dijkstra(1),
        vec![Distance::Finite(3), Distance::Finite(0), Distance::Infinite, Distance::Infinite]
    );
    assert!(g.dijkstra(10).iter().all(Distance::is_infinite));
}

#[test]
fn test_shortest_path_reconstruction() {
    // Same shape as the 0->2->1->3 relaxation chain.
    let g: DirectedWeightedGraph =
        DirectedWeightedGraph::from_edges([(0, 1, 10), (0, 2, 5), (2, 1, 2), (1, 3, 1)]);

    let paths = g.shortest_paths(0);
    assert_eq!(paths.source(), 0);
    assert_eq!(paths.distance(3), Distance::Finite(8));
    assert_eq!(paths.predecessor(1), Some(2));
    assert_eq!(paths.predecessor(0), None);
    assert_eq!(paths.path_to(3), Some(vec![0, 2, 1, 3]));

    assert_eq!(g.shortest_path(0, 1), Some((7, vec![0, 2, 1])));
    assert_eq!(g.shortest_path(0, 0), Some((0, vec![0])));
    assert_eq!(g.shortest_path(3, 0), None);
}

#[test]
fn test_dijkstra_skips_overflowing_relaxation() {
    let g: DirectedWeightedGraph<u8> =
        DirectedWeightedGraph::from_edges([(0, 1, 200), (1, 2, 100), (0, 2, 50)]);
    assert_eq!(
        g.dijkstra(0),
        vec![Distance::Finite(0), Distance::Finite(200), Distance::Finite(50)]
    );

    let far: DirectedWeightedGraph<u8> =
        DirectedWeightedGraph::from_edges([(0, 1, 200), (1, 2, 100)]);
    assert_eq!(far.dijkstra(0)[2], Distance::Infinite);
}

#[test]
fn test_dense_growth_policies_keep_edges() {
    for growth in [GrowthPolicy::Exact, GrowthPolicy::Doubling, GrowthPolicy::Chunked(3)] {
        let mut g: DirectedWeightedGraph =
            DirectedWeightedGraph::with_config(GraphConfig::dense().with_growth(growth)).unwrap();
        for i in 0..10 {
            g.add_vertex();
            if i > 0 {
                g.add_edge(i - 1, i, i as i64);
            }
        }
        assert!(g.vertex_capacity() >= 10);
        assert_eq!(g.edge_count(), 9);
        assert_eq!(g.weight(4, 5), Some(5));
        assert_eq!(g.dfs(0, None), (0..10).collect::<Vec<_>>());
    }
}

#[test]
fn test_with_config_rejects_invalid() {
    let chunked = GraphConfig::dense().with_growth(GrowthPolicy::Chunked(0));
    let result = DirectedWeightedGraph::<i64>::with_config(chunked);
    assert!(matches!(result, Err(GraphError::InvalidConfig(_))));

    for base in [GraphConfig::dense(), GraphConfig::sparse()] {
        let huge = base.with_initial_capacity(usize::MAX / 2);
        let result = DirectedWeightedGraph::<i64>::with_config(huge);
        assert!(matches!(result, Err(GraphError::InvalidConfig(_))));
    }
}

#[test]
fn test_initial_capacity_is_reserved() {
    let config = GraphConfig::dense().with_initial_capacity(16);
    let mut g: DirectedWeightedGraph = DirectedWeightedGraph::with_config(config).unwrap();
    assert_eq!(g.vertex_capacity(), 16);
    assert!(g.is_empty());
    for _ in 0..16 {
        g.add_vertex();
    }
    assert_eq!(g.vertex_capacity(), 16);
}

#[test]
fn test_display_matrix() {
    let g: DirectedWeightedGraph = DirectedWeightedGraph::from_edges([(0, 1, 4), (1, 2, 12)]);
    let expected = "GRAPH (3 vertices):\n   | 0  1  2\n------------\n \
                    0 | 0  4  0\n 1 | 0  0 12\n 2 | 0  0  0\n";
    assert_eq!(g.to_string(), expected);

    let empty: DirectedWeightedGraph = DirectedWeightedGraph::new();
    assert_eq!(empty.to_string(), "EMPTY GRAPH\n");
}
