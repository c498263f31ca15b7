//! Minimum spanning forests via Kruskal's algorithm.

use crate::graph::{Edge, Graph, Weight};
use crate::union_find::UnionFind;

/// The result of a spanning-forest computation.
///
/// Holds the accepted edges in acceptance order, which is sorted-by-weight
/// order restricted to the accepted edges. For a connected input this is a
/// minimum spanning tree; otherwise one tree per connected component.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SpanningForest {
    vertices: usize,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the accepted edges' weights.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the number of connected components the forest spans.
    ///
    /// A forest over `n` vertices with `k` accepted edges always has `n - k`
    /// components.
    pub fn component_count(&self) -> usize {
        self.vertices - self.edges.len()
    }

    /// Returns `true` if the forest is a single spanning tree, i.e. the input
    /// graph was connected.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() <= 1
    }
}

impl Graph {
    /// Computes a minimum spanning forest of the graph with Kruskal's
    /// algorithm.
    ///
    /// Edges are considered in ascending weight order; an edge is accepted
    /// exactly when its endpoints lie in different components of the forest
    /// built so far, so the accepted set can never contain a cycle and never
    /// exceeds `num_vertices() - 1` edges. The sort is stable and keyed on
    /// weight alone, which makes the tie-break among equal-weight edges
    /// explicit: earlier input edges win.
    ///
    /// Each call owns a fresh [`UnionFind`]; no state is shared across calls.
    pub fn minimum_spanning_forest(&self) -> SpanningForest {
        let mut sorted = self.edges().to_vec();
        sorted.sort_by_key(|edge| edge.weight);

        let mut union_find = UnionFind::with_size(self.num_vertices());
        let mut accepted = Vec::new();
        let mut total_weight = 0;

        for edge in sorted {
            if union_find.union(edge.source, edge.destination).did_something() {
                total_weight += edge.weight;
                accepted.push(edge);
            }
        }

        SpanningForest {
            vertices: self.num_vertices(),
            edges: accepted,
            total_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::benchmark::random_generation::{RandomGraphConfig, generate_random_graph};
    use crate::edges;

    /// Number of connected components of a graph, computed by replaying all
    /// of its edges through a fresh union-find.
    fn component_count_of(graph: &Graph) -> usize {
        let mut union_find = UnionFind::with_size(graph.num_vertices());
        let mut components = graph.num_vertices();

        for edge in graph.edges() {
            if union_find.union(edge.source, edge.destination).did_something() {
                components -= 1;
            }
        }

        components
    }

    /// Minimum spanning forest weight found by trying every edge subset.
    /// Exponential in the edge count, only usable on small graphs.
    fn brute_force_forest_weight(graph: &Graph) -> Weight {
        assert!(graph.num_edges() <= 16);
        let target_components = component_count_of(graph);
        let mut best: Option<Weight> = None;

        for mask in 0u32..(1 << graph.num_edges()) {
            let mut union_find = UnionFind::with_size(graph.num_vertices());
            let mut weight = 0;
            let mut acyclic = true;
            let mut edge_count = 0;

            for (i, edge) in graph.edges().iter().enumerate() {
                if mask & (1 << i) == 0 {
                    continue;
                }

                if union_find.union(edge.source, edge.destination).did_nothing() {
                    acyclic = false;
                    break;
                }

                weight += edge.weight;
                edge_count += 1;
            }

            let spans = graph.num_vertices() - edge_count == target_components;
            if acyclic && spans && best.is_none_or(|b| weight < b) {
                best = Some(weight);
            }
        }

        best.expect("the full acyclic subset always spans")
    }

    #[test]
    fn spanning_tree_of_a_connected_graph() {
        let graph = Graph::from_edges(
            4,
            edges![0 -- 1: 1, 0 -- 2: 3, 1 -- 2: 2, 1 -- 3: 4, 2 -- 3: 5],
        )
        .unwrap();

        let forest = graph.minimum_spanning_forest();
        assert_eq!(
            forest.edges(),
            edges![0 -- 1: 1, 1 -- 2: 2, 1 -- 3: 4].as_slice()
        );
        assert_eq!(forest.total_weight(), 7);
        assert_eq!(forest.component_count(), 1);
        assert!(forest.is_spanning_tree());
    }

    #[test]
    fn forest_of_a_disconnected_graph() {
        let graph = Graph::from_edges(4, edges![0 -- 1: 2]).unwrap();

        let forest = graph.minimum_spanning_forest();
        assert_eq!(forest.edges(), edges![0 -- 1: 2].as_slice());
        assert_eq!(forest.total_weight(), 2);
        assert_eq!(forest.component_count(), 3);
        assert!(!forest.is_spanning_tree());
    }

    #[test]
    fn empty_graph() {
        let forest = Graph::new(0).minimum_spanning_forest();
        assert!(forest.edges().is_empty());
        assert_eq!(forest.total_weight(), 0);
        assert_eq!(forest.component_count(), 0);
    }

    #[test]
    fn edgeless_graph_is_a_forest_of_singletons() {
        let forest = Graph::new(3).minimum_spanning_forest();
        assert!(forest.edges().is_empty());
        assert_eq!(forest.total_weight(), 0);
        assert_eq!(forest.component_count(), 3);
        assert!(!forest.is_spanning_tree());
    }

    #[test]
    fn self_loops_are_never_accepted() {
        let graph = Graph::from_edges(2, edges![0 -- 0: 1, 0 -- 1: 5]).unwrap();

        let forest = graph.minimum_spanning_forest();
        assert_eq!(forest.edges(), edges![0 -- 1: 5].as_slice());
        assert_eq!(forest.total_weight(), 5);
    }

    #[test]
    fn duplicate_edges_keep_only_the_lightest() {
        let graph = Graph::from_edges(2, edges![0 -- 1: 3, 0 -- 1: 1, 0 -- 1: 2]).unwrap();

        let forest = graph.minimum_spanning_forest();
        assert_eq!(forest.edges(), edges![0 -- 1: 1].as_slice());
        assert_eq!(forest.total_weight(), 1);
    }

    #[test]
    fn equal_weights_break_ties_by_input_order() {
        let graph = Graph::from_edges(3, edges![0 -- 1: 1, 1 -- 2: 1, 0 -- 2: 1]).unwrap();

        let forest = graph.minimum_spanning_forest();
        assert_eq!(forest.edges(), edges![0 -- 1: 1, 1 -- 2: 1].as_slice());
    }

    #[test]
    fn totals_on_handpicked_graphs() {
        let dense = Graph::from_edges(
            5,
            edges![0 -- 1: 4, 0 -- 2: 3, 1 -- 2: 1, 1 -- 3: 2, 2 -- 3: 4, 3 -- 4: 2],
        )
        .unwrap();
        assert_eq!(dense.minimum_spanning_forest().total_weight(), 8);

        let sparse = Graph::from_edges(5, edges![0 -- 1: 6, 0 -- 3: 5, 1 -- 2: 1, 3 -- 4: 3]).unwrap();
        assert_eq!(sparse.minimum_spanning_forest().total_weight(), 15);

        let cyclic = Graph::from_edges(
            5,
            edges![0 -- 1: 4, 1 -- 2: 3, 2 -- 3: 2, 3 -- 4: 4, 4 -- 0: 1],
        )
        .unwrap();
        let forest = cyclic.minimum_spanning_forest();
        assert_eq!(forest.total_weight(), 10);
        assert_eq!(forest.edges().len(), 4);
    }

    #[test]
    fn accepted_edges_are_in_ascending_weight_order() {
        let config = RandomGraphConfig {
            vertices: 30,
            edge_probability: 0.3,
            weight_range: 1..=20,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_random_graph(&config, &mut rng);

        let forest = graph.minimum_spanning_forest();
        let weights: Vec<_> = forest.edges().iter().map(|edge| edge.weight).collect();
        let mut sorted = weights.clone();
        sorted.sort();
        assert_eq!(weights, sorted);
    }

    #[test]
    fn accepted_edges_never_form_a_cycle() {
        let config = RandomGraphConfig {
            vertices: 40,
            edge_probability: 0.2,
            weight_range: 1..=9,
        };

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = generate_random_graph(&config, &mut rng);
            let forest = graph.minimum_spanning_forest();

            assert!(forest.edges().len() <= graph.num_vertices().saturating_sub(1));

            // replaying the accepted edges must merge a fresh component each time
            let mut union_find = UnionFind::with_size(graph.num_vertices());
            for edge in forest.edges() {
                assert!(union_find.union(edge.source, edge.destination).did_something());
            }
        }
    }

    #[test]
    fn forest_size_matches_the_component_count() {
        let config = RandomGraphConfig {
            vertices: 25,
            edge_probability: 0.1,
            weight_range: 1..=9,
        };

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = generate_random_graph(&config, &mut rng);
            let components = component_count_of(&graph);

            let forest = graph.minimum_spanning_forest();
            assert_eq!(forest.edges().len(), graph.num_vertices() - components);
            assert_eq!(forest.component_count(), components);
        }
    }

    #[test]
    fn weight_is_optimal_on_small_graphs() {
        let config = RandomGraphConfig {
            vertices: 6,
            edge_probability: 0.6,
            weight_range: 1..=9,
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = generate_random_graph(&config, &mut rng);

            let forest = graph.minimum_spanning_forest();
            assert_eq!(forest.total_weight(), brute_force_forest_weight(&graph));
        }
    }

    #[test]
    fn repeated_computations_agree() {
        let config = RandomGraphConfig {
            vertices: 20,
            edge_probability: 0.4,
            weight_range: 1..=5,
        };
        let mut rng = StdRng::seed_from_u64(11);
        let graph = generate_random_graph(&config, &mut rng);

        let first = graph.minimum_spanning_forest();
        let second = graph.minimum_spanning_forest();
        assert_eq!(first, second);
    }
}
