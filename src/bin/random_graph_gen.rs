//! Binary for generating random weighted graphs and reporting their
//! minimum spanning forests.
//!
//! This binary:
//! 1. Generates a seeded random graph (or loads a previously saved one)
//! 2. Optionally saves the graph as JSON for later runs
//! 3. Benchmarks the spanning-forest computation and prints the outcome

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use arbor::benchmark::benchmark;
use arbor::benchmark::formatter::PrettyFormatter;
use arbor::benchmark::random_generation::{RandomGraphConfig, generate_random_graph};
use arbor::graph::Graph;
use arbor::utils::json::{load_json, save_json};

/// CLI arguments for random graph generation
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random weighted graphs and report their minimum spanning forests", long_about = None)]
struct Args {
    /// Number of vertices (n)
    #[arg(short = 'n', long, default_value_t = 50)]
    vertices: usize,

    /// Probability that any given vertex pair is connected
    #[arg(short = 'p', long, default_value_t = 0.5, value_parser = parse_probability)]
    edge_probability: f64,

    /// Minimum edge weight
    #[arg(long, default_value_t = 1)]
    min_weight: i64,

    /// Maximum edge weight
    #[arg(long, default_value_t = 9)]
    max_weight: i64,

    /// RNG seed, so identical invocations generate identical graphs
    #[arg(short = 's', long, default_value_t = 0)]
    seed: u64,

    /// Load a previously saved graph JSON instead of generating one
    #[arg(short = 'i', long, conflicts_with = "output")]
    input: Option<PathBuf>,

    /// Save the generated graph as JSON
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn parse_probability(text: &str) -> Result<f64, String> {
    let probability: f64 = text.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(format!("probability must lie within [0, 1], got {probability}"))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        args.min_weight <= args.max_weight,
        "min-weight ({}) must not exceed max-weight ({})",
        args.min_weight,
        args.max_weight
    );

    let graph: Graph = match &args.input {
        Some(path) => {
            println!("Loading graph from {:?}...", path);
            load_json(path)?
        }
        None => {
            let config = RandomGraphConfig {
                vertices: args.vertices,
                edge_probability: args.edge_probability,
                weight_range: args.min_weight..=args.max_weight,
            };
            println!(
                "Generating a graph with {} vertices (p = {}, seed = {})...",
                config.vertices, config.edge_probability, args.seed
            );
            let mut rng = StdRng::seed_from_u64(args.seed);
            generate_random_graph(&config, &mut rng)
        }
    };

    if let Some(path) = &args.output {
        println!("Saving graph to {:?}...", path);
        save_json(&graph, path)?;
    }

    let outcomes = benchmark(std::slice::from_ref(&graph));
    println!("{}", PrettyFormatter::format(&outcomes));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_probability;

    #[test]
    fn probabilities_outside_the_unit_interval_are_rejected() {
        assert_eq!(parse_probability("0.5"), Ok(0.5));
        assert_eq!(parse_probability("0"), Ok(0.0));
        assert_eq!(parse_probability("1"), Ok(1.0));

        assert!(parse_probability("1.5").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("half").is_err());
    }
}
