//! Weisfeiler-Lehman color refinement without node labels.

use crate::color::{Color, ColorHasher};
use crate::graph_traits::{Adjacency, Edges, Graph};
use std::hash::BuildHasher;

/// Colors every node by its local degree information.
///
/// Undirected nodes are colored by their degree, directed nodes by the pair
/// (in-degree, out-degree).
pub fn initial_colors<G, S>(graph: &G, hasher: &ColorHasher<S>) -> Vec<Color>
where
    G: Graph + ?Sized,
    S: BuildHasher,
{
    (0..graph.num_nodes())
        .map(|i| match graph.adjacency_of(i) {
            Adjacency::Undirected(_) => hasher.color_of(&graph.node_degree(i)),
            Adjacency::Directed {
                predecessors,
                successors,
            } => hasher.color_of(&(predecessors.num_edges(), successors.num_edges())),
        })
        .collect()
}

/// Computes the next round of colors from the previous one.
///
/// Keeps a scratch buffer for the neighbor colors, so one refiner should be
/// reused for all rounds of a graph.
#[derive(Debug)]
pub struct ColorRefiner<'h, S> {
    hasher: &'h ColorHasher<S>,
    scratch: Vec<Color>,
}

impl<'h, S: BuildHasher> ColorRefiner<'h, S> {
    pub fn new(hasher: &'h ColorHasher<S>) -> Self {
        ColorRefiner {
            hasher,
            scratch: Vec::new(),
        }
    }

    /// Hash of the ascending sequence of the colors of `edges`' targets.
    fn sorted_sequence_color<E: Edges>(&mut self, edges: &E, colors: &[Color]) -> Color {
        self.scratch.clear();
        self.scratch.extend(
            (0..edges.num_edges())
                .filter_map(|k| edges.nth_edge(k))
                .map(|j| colors[j]),
        );
        self.scratch.sort_unstable();
        self.hasher.color_of(&self.scratch[..])
    }

    /// The color of the neighborhood of `node_idx`, before it is combined
    /// with the node's own color.
    pub fn neighborhood_signature<G>(&mut self, graph: &G, colors: &[Color], node_idx: usize) -> Color
    where
        G: Graph + ?Sized,
    {
        match graph.adjacency_of(node_idx) {
            Adjacency::Undirected(neighbors) => self.sorted_sequence_color(neighbors, colors),
            Adjacency::Directed {
                predecessors,
                successors,
            } => {
                let pred = self.sorted_sequence_color(predecessors, colors);
                let succ = self.sorted_sequence_color(successors, colors);
                self.hasher.color_of(&(pred, succ))
            }
        }
    }

    /// The color of `node_idx` in the round following `colors`.
    pub fn refine_node<G>(&mut self, graph: &G, colors: &[Color], node_idx: usize) -> Color
    where
        G: Graph + ?Sized,
    {
        let signature = self.neighborhood_signature(graph, colors, node_idx);
        let previous = colors[node_idx];
        // the pair is hashed in ascending order, independent of its roles
        let pair = if previous <= signature {
            (previous, signature)
        } else {
            (signature, previous)
        };
        self.hasher.color_of(&pair)
    }

    /// Performs one refinement round. Every node reads the same snapshot
    /// `colors`.
    pub fn refine<G>(&mut self, graph: &G, colors: &[Color]) -> Vec<Color>
    where
        G: Graph + ?Sized,
    {
        assert_eq!(graph.num_nodes(), colors.len());
        (0..graph.num_nodes())
            .map(|i| self.refine_node(graph, colors, i))
            .collect()
    }
}
