//! A graph over arbitrary vertex labels instead of pre-assigned indices.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::{Graph, VertexId, Weight};
use crate::mst::SpanningForest;
use crate::seen::Seen;

/// A bijective mapping from vertex labels to dense zero-based indices.
///
/// Indices are assigned incrementally in first-seen order and never change
/// once assigned, so a label always resolves to the same index for the
/// lifetime of the indexer.
pub struct VertexIndexer<L> {
    indices: HashMap<L, VertexId>,
    labels: Vec<L>,
}

impl<L> Default for VertexIndexer<L> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            labels: Vec::new(),
        }
    }
}

impl<L: Clone + Eq + Hash> VertexIndexer<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `label`, assigning the next free index if the
    /// label has not been seen before. The [`Seen`] wrapper tells the caller
    /// which of the two happened.
    pub fn intern(&mut self, label: L) -> Seen<VertexId> {
        if let Some(&id) = self.indices.get(&label) {
            return Seen::Old(id);
        }

        let id = self.labels.len();
        self.indices.insert(label.clone(), id);
        self.labels.push(label);
        Seen::New(id)
    }

    /// Returns the index of `label` without assigning one.
    pub fn try_get(&self, label: &L) -> Option<VertexId> {
        self.indices.get(label).copied()
    }

    /// Returns the label assigned to `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never assigned.
    pub fn label(&self, id: VertexId) -> &L {
        &self.labels[id]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A weighted undirected graph whose vertices are named by labels.
///
/// Labels are interned into dense indices through a [`VertexIndexer`]; the
/// spanning-forest computation itself always runs on the index-based
/// [`Graph`].
pub struct LabeledGraph<L> {
    graph: Graph,
    indexer: VertexIndexer<L>,
}

impl<L: Clone + Eq + Hash> Default for LabeledGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Clone + Eq + Hash> LabeledGraph<L> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(0),
            indexer: VertexIndexer::new(),
        }
    }

    /// Returns the index of `label`, adding a vertex for it on first sight.
    pub fn vertex(&mut self, label: L) -> VertexId {
        let seen = self.indexer.intern(label);
        if let Seen::New(id) = seen {
            debug_assert_eq!(id, self.graph.num_vertices());
            self.graph.add_vertex();
        }

        seen.any()
    }

    /// Adds an undirected edge between the vertices labeled `source` and
    /// `destination`, creating either vertex if needed.
    pub fn add_edge(&mut self, source: L, destination: L, weight: Weight) {
        let source = self.vertex(source);
        let destination = self.vertex(destination);
        self.graph
            .add_edge(source, destination, weight)
            .expect("interned vertex indices are always in bounds");
    }

    /// Computes the minimum spanning forest of the underlying graph. Result
    /// edges carry indices; map them back with [`LabeledGraph::labeled_edges`].
    pub fn minimum_spanning_forest(&self) -> SpanningForest {
        self.graph.minimum_spanning_forest()
    }

    /// Resolves the edges of `forest` back to this graph's labels.
    pub fn labeled_edges<'a>(
        &'a self,
        forest: &'a SpanningForest,
    ) -> impl Iterator<Item = (&'a L, &'a L, Weight)> {
        forest.edges().iter().map(|edge| {
            (
                self.indexer.label(edge.source),
                self.indexer.label(edge.destination),
                edge.weight,
            )
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn indexer(&self) -> &VertexIndexer<L> {
        &self.indexer
    }
}
