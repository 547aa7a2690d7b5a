use super::error::GraphError;
use super::graph_traits::{Adjacency, Edges, Graph};
use petgraph::graph::IndexType;
use petgraph::{EdgeType, Graph as PetGraph};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// Whether edges of an [`OwnedGraph`] have a direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GraphKind {
    Undirected,
    Directed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Node index type. Our graphs never exceed 4 billion nodes.
    pointing_node: u32,
}

impl Edge {
    pub fn new(node_idx: usize) -> Edge {
        assert!(node_idx <= u32::max_value() as usize);
        Edge {
            pointing_node: node_idx as u32,
        }
    }

    #[inline]
    pub fn pointing_node(&self) -> usize {
        self.pointing_node as usize
    }
}

#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new(edges: Vec<Edge>) -> EdgeList {
        EdgeList { edges }
    }

    fn count(&self, node_idx: usize) -> usize {
        self.edges
            .iter()
            .filter(|e| e.pointing_node() == node_idx)
            .count()
    }
}

impl Edges for EdgeList {
    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn nth_edge(&self, n: usize) -> Option<usize> {
        self.edges.get(n).map(Edge::pointing_node)
    }
}

/// A node with its incoming and outgoing edges.
///
/// Nodes of undirected graphs keep their neighbors in `out_edges` and leave
/// `in_edges` empty.
#[derive(Debug, Clone, Default)]
pub struct Node {
    in_edges: EdgeList,
    out_edges: EdgeList,
}

impl Node {
    pub fn new(in_edges: EdgeList, out_edges: EdgeList) -> Node {
        Node {
            in_edges,
            out_edges,
        }
    }

    pub fn undirected(neighbors: EdgeList) -> Node {
        Node::new(EdgeList::default(), neighbors)
    }

    pub fn add_in_edge(&mut self, edge: Edge) {
        self.in_edges.edges.push(edge);
    }

    pub fn add_out_edge(&mut self, edge: Edge) {
        self.out_edges.edges.push(edge);
    }
}

#[derive(Debug, Clone)]
pub struct OwnedGraph {
    kind: GraphKind,
    nodes: Vec<Node>,
}

impl OwnedGraph {
    pub fn new(kind: GraphKind, nodes: Vec<Node>) -> OwnedGraph {
        OwnedGraph { kind, nodes }
    }

    pub fn empty(kind: GraphKind) -> OwnedGraph {
        OwnedGraph::new(kind, Vec::new())
    }

    /// Builds a graph from an edge list, creating nodes as they are
    /// referenced. Repeated edges are stored once.
    pub fn from_edges<K, I>(kind: GraphKind, edges: I) -> OwnedGraph
    where
        K: Ord + Clone + Debug,
        I: IntoIterator<Item = (K, K)>,
    {
        let mut builder = GraphBuilder::new(kind);
        for (source, target) in edges {
            builder.add_edge(source, target);
        }
        builder.graph()
    }

    /// Converts a petgraph graph. Node `i` of the result corresponds to
    /// `NodeIndex::new(i)` of `pg`. Parallel edges collapse into one.
    pub fn from_petgraph<N, E, Ty, Ix>(pg: &PetGraph<N, E, Ty, Ix>) -> OwnedGraph
    where
        Ty: EdgeType,
        Ix: IndexType,
    {
        let kind = if pg.is_directed() {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        };
        let mut builder = GraphBuilder::new(kind);
        for i in pg.node_indices() {
            let idx = builder.add_or_get_node(i.index());
            debug_assert!(idx == i.index());
        }
        for e in pg.raw_edges() {
            builder.add_edge(e.source().index(), e.target().index());
        }
        builder.graph()
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn push_empty_node(&mut self) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node::default());
        idx
    }

    fn insert_edge(&mut self, source_index: usize, target_index: usize) {
        match self.kind {
            GraphKind::Directed => {
                self.nodes[source_index].add_out_edge(Edge::new(target_index));
                self.nodes[target_index].add_in_edge(Edge::new(source_index));
            }
            GraphKind::Undirected => {
                self.nodes[source_index].add_out_edge(Edge::new(target_index));
                if source_index != target_index {
                    self.nodes[target_index].add_out_edge(Edge::new(source_index));
                }
            }
        }
    }
}

impl Graph for OwnedGraph {
    type EDGE = EdgeList;

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn node_degree(&self, node_idx: usize) -> usize {
        let node = &self.nodes[node_idx];
        match self.kind {
            // a self-loop is listed once but touches the node twice
            GraphKind::Undirected => node.out_edges.num_edges() + node.out_edges.count(node_idx),
            GraphKind::Directed => node.in_edges.num_edges() + node.out_edges.num_edges(),
        }
    }

    #[inline]
    fn adjacency_of(&self, node_idx: usize) -> Adjacency<'_, EdgeList> {
        let node = &self.nodes[node_idx];
        match self.kind {
            GraphKind::Undirected => Adjacency::Undirected(&node.out_edges),
            GraphKind::Directed => Adjacency::Directed {
                predecessors: &node.in_edges,
                successors: &node.out_edges,
            },
        }
    }
}

/// Builds an [`OwnedGraph`] from arbitrary node ids.
pub struct GraphBuilder<K: Ord + Clone + Debug> {
    // maps node_id to index in graph.nodes
    node_map: BTreeMap<K, usize>,
    // edges already inserted, undirected ones with the smaller index first
    edge_set: BTreeSet<(usize, usize)>,
    graph: OwnedGraph,
}

impl<K: Ord + Clone + Debug> GraphBuilder<K> {
    pub fn new(kind: GraphKind) -> GraphBuilder<K> {
        GraphBuilder {
            node_map: BTreeMap::new(),
            edge_set: BTreeSet::new(),
            graph: OwnedGraph::empty(kind),
        }
    }

    pub fn new_directed() -> GraphBuilder<K> {
        GraphBuilder::new(GraphKind::Directed)
    }

    pub fn new_undirected() -> GraphBuilder<K> {
        GraphBuilder::new(GraphKind::Undirected)
    }

    pub fn graph(self) -> OwnedGraph {
        self.graph
    }

    pub fn node_index(&self, node_id: &K) -> Option<usize> {
        self.node_map.get(node_id).copied()
    }

    /// Adds a new node and returns its index.
    pub fn add_node(&mut self, node_id: K) -> Result<usize, GraphError> {
        match self.node_map.entry(node_id) {
            Entry::Vacant(e) => {
                let next_id = self.graph.push_empty_node();
                e.insert(next_id);
                Ok(next_id)
            }
            Entry::Occupied(e) => Err(GraphError::duplicate_node(e.key())),
        }
    }

    // returns node index
    pub fn add_or_get_node(&mut self, node_id: K) -> usize {
        match self.node_map.entry(node_id) {
            Entry::Vacant(e) => {
                let next_id = self.graph.push_empty_node();
                e.insert(next_id);
                next_id
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Adds an edge, creating missing nodes on the fly.
    pub fn add_edge(&mut self, source_node_id: K, target_node_id: K) {
        let source_index = self.add_or_get_node(source_node_id);
        let target_index = self.add_or_get_node(target_node_id);
        self.insert_edge_once(source_index, target_index);
    }

    /// Adds an edge between two nodes that must already exist.
    pub fn add_edge_strict(
        &mut self,
        source_node_id: &K,
        target_node_id: &K,
    ) -> Result<(), GraphError> {
        let source_index = self
            .node_index(source_node_id)
            .ok_or_else(|| GraphError::unknown_node(source_node_id))?;
        let target_index = self
            .node_index(target_node_id)
            .ok_or_else(|| GraphError::unknown_node(target_node_id))?;
        self.insert_edge_once(source_index, target_index);
        Ok(())
    }

    fn insert_edge_once(&mut self, source_index: usize, target_index: usize) {
        let key = match self.graph.kind {
            GraphKind::Directed => (source_index, target_index),
            GraphKind::Undirected => (
                source_index.min(target_index),
                source_index.max(target_index),
            ),
        };
        if self.edge_set.insert(key) {
            self.graph.insert_edge(source_index, target_index);
        }
    }
}
