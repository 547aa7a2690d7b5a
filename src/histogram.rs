use crate::color::{Color, ColorHasher};
use crate::graph_traits::Graph;
use crate::refine::{initial_colors, ColorRefiner};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::hash::BuildHasher;

/// Number of (node, round) observations per color of one graph.
///
/// Colors are kept in ascending order, so iterating a histogram is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: BTreeMap<Color, usize>,
}

impl ColorHistogram {
    pub fn new() -> Self {
        ColorHistogram::default()
    }

    /// Colors `graph` and refines it `num_iterations` times, counting the
    /// colors of the initial round and of every refinement round.
    pub fn from_graph<G, S>(graph: &G, num_iterations: usize, hasher: &ColorHasher<S>) -> Self
    where
        G: Graph + ?Sized,
        S: BuildHasher,
    {
        let mut histogram = ColorHistogram::new();
        if graph.is_empty() {
            return histogram;
        }

        let mut colors = initial_colors(graph, hasher);
        histogram.accumulate(&colors);

        let mut refiner = ColorRefiner::new(hasher);
        for round in 1..=num_iterations {
            colors = refiner.refine(graph, &colors);
            histogram.accumulate(&colors);
            log::debug!(
                "round {}: {} distinct colors observed so far",
                round,
                histogram.num_colors()
            );
        }

        debug_assert_eq!((num_iterations + 1) * graph.num_nodes(), histogram.total());
        histogram
    }

    /// Counts every entry of `colors` once.
    pub fn accumulate(&mut self, colors: &[Color]) {
        for &color in colors {
            *self.counts.entry(color).or_insert(0) += 1;
        }
    }

    pub fn count(&self, color: Color) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of distinct colors.
    pub fn num_colors(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn colors(&self) -> btree_map::Keys<'_, Color, usize> {
        self.counts.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Color, usize> {
        self.counts.iter()
    }
}
