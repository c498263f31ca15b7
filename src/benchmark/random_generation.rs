use std::ops::RangeInclusive;

use itertools::Itertools;
use rand::Rng;

use crate::graph::{Graph, Weight};

/// Shape of a randomly generated graph.
///
/// Callers pass their own `Rng`; seeding it (e.g. `StdRng::seed_from_u64`)
/// makes generation reproducible across runs.
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    pub vertices: usize,
    /// Probability that any given vertex pair is connected.
    pub edge_probability: f64,
    pub weight_range: RangeInclusive<Weight>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 50,
            edge_probability: 0.5,
            weight_range: 1..=9,
        }
    }
}

/// Generates a graph where each vertex pair is connected with
/// `config.edge_probability`, with weights drawn uniformly from
/// `config.weight_range`.
pub fn generate_random_graph(config: &RandomGraphConfig, rng: &mut impl Rng) -> Graph {
    let mut graph = Graph::new(config.vertices);

    for (source, destination) in (0..config.vertices).tuple_combinations() {
        if rng.gen_bool(config.edge_probability) {
            let weight = rng.gen_range(config.weight_range.clone());
            graph
                .add_edge(source, destination, weight)
                .expect("pair indices are below the vertex count");
        }
    }

    graph
}

/// Generates a complete graph over `vertices`, with weights drawn uniformly
/// from `weight_range`.
pub fn generate_complete_graph(
    vertices: usize,
    weight_range: RangeInclusive<Weight>,
    rng: &mut impl Rng,
) -> Graph {
    let mut graph = Graph::new(vertices);

    for (source, destination) in (0..vertices).tuple_combinations() {
        let weight = rng.gen_range(weight_range.clone());
        graph
            .add_edge(source, destination, weight)
            .expect("pair indices are below the vertex count");
    }

    graph
}
