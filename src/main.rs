use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use arbor::benchmark;
use arbor::benchmark::formatter::{CsvFormatter, PrettyFormatter};
use arbor::benchmark::random_generation::generate_complete_graph;
use arbor::edges;
use arbor::graph::Graph;

fn main() {
    let dense = Graph::from_edges(
        5,
        edges![0 -- 1: 4, 0 -- 2: 3, 1 -- 2: 1, 1 -- 3: 2, 2 -- 3: 4, 3 -- 4: 2],
    )
    .unwrap();
    let sparse = Graph::from_edges(5, edges![0 -- 1: 6, 0 -- 3: 5, 1 -- 2: 1, 3 -- 4: 3]).unwrap();
    let cyclic = Graph::from_edges(
        5,
        edges![0 -- 1: 4, 1 -- 2: 3, 2 -- 3: 2, 3 -- 4: 4, 4 -- 0: 1],
    )
    .unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let large = generate_complete_graph(50, 1..=9, &mut rng);

    let mut groups = BTreeMap::new();
    groups.insert(
        "Handpicked graphs".to_string(),
        benchmark::benchmark(&[dense, sparse, cyclic]),
    );
    groups.insert(
        "Random complete graph".to_string(),
        benchmark::benchmark(std::slice::from_ref(&large)),
    );

    println!("{}", PrettyFormatter::format_grouped(groups.clone()));
    println!("\nCSV Output:\n{}", CsvFormatter::format_grouped(groups));
}
