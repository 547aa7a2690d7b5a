//! Traits that represent an abstract graph upon which the kernel operates.

/// Abstract representation of the edges of a node. Used by the algorithm.
pub trait Edges {
    /// The number of edges
    fn num_edges(&self) -> usize;

    /// Returns the target node of the nth-edge
    fn nth_edge(&self, n: usize) -> Option<usize>;
}

/// The edges of a node, as far as the graph distinguishes edge directions.
///
/// This is the capability the kernel checks to decide between the undirected
/// and the directed refinement. A directed graph exposes predecessors and
/// successors separately, an undirected graph only its neighbors.
#[derive(Debug)]
pub enum Adjacency<'a, E: Edges> {
    Undirected(&'a E),
    Directed {
        predecessors: &'a E,
        successors: &'a E,
    },
}

/// Abstract representation of a Graph. Used by the algorithm.
///
/// Nodes are addressed by dense indices `0..num_nodes()`.
pub trait Graph {
    type EDGE: Edges;

    fn num_nodes(&self) -> usize;

    /// Degree of an undirected node. A self-loop contributes two.
    fn node_degree(&self, node_idx: usize) -> usize;

    fn adjacency_of(&self, node_idx: usize) -> Adjacency<'_, Self::EDGE>;

    fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }
}
