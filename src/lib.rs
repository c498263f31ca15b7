//! Minimum spanning trees of weighted undirected graphs, built with
//! Kruskal's algorithm over a rank-balanced, path-compressing union-find.

pub mod benchmark;
pub mod did;
pub mod graph;
pub mod mst;
pub mod seen;
pub mod union_find;
pub mod utils;

mod macros;
