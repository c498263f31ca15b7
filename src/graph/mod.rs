//! A module for representing weighted undirected graphs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod labeled;

pub use self::labeled::{LabeledGraph, VertexIndexer};

pub type VertexId = usize;
pub type Weight = i64;

/// An undirected edge between two vertices, carrying an integer weight.
///
/// An edge is a plain value; `(u, v, w)` and `(v, u, w)` are equivalent for
/// algorithmic purposes and no canonicalization of endpoint order is
/// performed. Self-loops are representable but can never enter a spanning
/// forest.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, destination: VertexId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of bounds for a graph with {vertices} vertices")]
    VertexOutOfBounds { vertex: VertexId, vertices: usize },
}

/// A weighted undirected graph stored as an edge list over `0..vertices`.
///
/// Every edge is validated on insertion, so a constructed `Graph` always
/// satisfies the invariant that both endpoints of every edge lie in
/// `[0, vertices)`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    vertices: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertices` isolated vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Creates a graph from a complete edge list.
    ///
    /// The whole list is rejected if any edge references a vertex outside
    /// `[0, vertices)`; a bad edge is never silently skipped and never grows
    /// the vertex set implicitly.
    pub fn from_edges(vertices: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        for edge in &edges {
            Self::check_bounds(vertices, edge)?;
        }

        Ok(Self { vertices, edges })
    }

    /// Adds a new isolated vertex to the graph and returns its index.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = self.vertices;
        self.vertices += 1;
        id
    }

    /// Adds an undirected edge between `source` and `destination`.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let edge = Edge::new(source, destination, weight);
        Self::check_bounds(self.vertices, &edge)?;
        self.edges.push(edge);
        Ok(())
    }

    fn check_bounds(vertices: usize, edge: &Edge) -> Result<(), GraphError> {
        for vertex in [edge.source, edge.destination] {
            if vertex >= vertices {
                return Err(GraphError::VertexOutOfBounds { vertex, vertices });
            }
        }

        Ok(())
    }

    /// Returns the number of vertices in the graph.
    pub fn num_vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns a string in DOT format representing the graph.
    pub fn dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("graph G {\n");
        for i in 0..self.vertices {
            dot.push_str(&format!("    {i};\n"));
        }
        for edge in &self.edges {
            dot.push_str(&format!(
                "    {} -- {} [label=\"{}\"];\n",
                edge.source, edge.destination, edge.weight
            ));
        }
        dot.push('}');
        dot
    }
}

/// Serialized form of a [`Graph`]; deserialization re-validates every edge
/// through [`Graph::from_edges`].
#[derive(Serialize, Deserialize)]
struct GraphData {
    vertices: usize,
    edges: Vec<Edge>,
}

impl TryFrom<GraphData> for Graph {
    type Error = GraphError;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        Graph::from_edges(data.vertices, data.edges)
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        Self {
            vertices: graph.vertices,
            edges: graph.edges,
        }
    }
}
