use crate::color::{Color, ColorHasher};
use crate::graph_traits::Graph;
use crate::histogram::ColorHistogram;
use crate::params::WlParams;
use closed01::Closed01;
use ndarray::Array1;
use std::collections::BTreeSet;
use std::hash::BuildHasher;

fn l2_normalized(counts: Array1<f64>) -> Array1<f64> {
    let norm = counts.dot(&counts).sqrt();
    assert!(
        norm > 0.0,
        "cannot normalize an all-zero color count vector"
    );
    counts / norm
}

/// Cosine similarity of two color histograms.
///
/// Both histograms are embedded into the space spanned by the union of
/// their colors, normalized to unit length and multiplied.
///
/// Panics if either histogram is empty.
pub fn cosine_similarity(a: &ColorHistogram, b: &ColorHistogram) -> f64 {
    let union: BTreeSet<Color> = a.colors().chain(b.colors()).copied().collect();

    let vector = |h: &ColorHistogram| -> Array1<f64> {
        Array1::from(
            union
                .iter()
                .map(|&c| h.count(c) as f64)
                .collect::<Vec<f64>>(),
        )
    };

    let va = l2_normalized(vector(a));
    let vb = l2_normalized(vector(b));
    va.dot(&vb)
}

/// The unlabeled Weisfeiler-Lehman graph kernel.
///
/// Both graphs of a comparison are colored with the same hasher, which
/// makes their histograms comparable.
#[derive(Debug, Clone)]
pub struct WlKernel<S = ahash::RandomState> {
    params: WlParams,
    hasher: ColorHasher<S>,
}

impl WlKernel {
    pub fn new(params: WlParams) -> Self {
        WlKernel::with_hasher(params, ColorHasher::new())
    }
}

impl Default for WlKernel {
    fn default() -> Self {
        WlKernel::new(WlParams::default())
    }
}

impl<S: BuildHasher> WlKernel<S> {
    pub fn with_hasher(params: WlParams, hasher: ColorHasher<S>) -> Self {
        WlKernel { params, hasher }
    }

    pub fn params(&self) -> &WlParams {
        &self.params
    }

    pub fn histogram<G: Graph + ?Sized>(&self, graph: &G) -> ColorHistogram {
        let histogram =
            ColorHistogram::from_graph(graph, self.params.num_iterations, &self.hasher);
        log::trace!(
            "histogram of {} nodes: {} colors",
            graph.num_nodes(),
            histogram.num_colors()
        );
        histogram
    }

    fn empty_graph_score(&self, a_is_empty: bool, b_is_empty: bool) -> Option<f64> {
        if !(a_is_empty || b_is_empty) {
            return None;
        }
        let score = self.params.empty_graph.score(a_is_empty, b_is_empty);
        log::warn!(
            "one or both graphs have no nodes, returning {} by convention ({:?})",
            score,
            self.params.empty_graph
        );
        Some(score)
    }

    /// Similarity of `a` and `b`, nominally in [0, 1] up to rounding.
    pub fn compare<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: Graph + ?Sized,
        B: Graph + ?Sized,
    {
        if let Some(score) = self.empty_graph_score(a.is_empty(), b.is_empty()) {
            return score;
        }
        let ha = self.histogram(a);
        let hb = self.histogram(b);
        cosine_similarity(&ha, &hb)
    }

    /// Same as [`compare`](Self::compare), but colors both graphs in
    /// parallel.
    pub fn compare_par<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: Graph + Sync + ?Sized,
        B: Graph + Sync + ?Sized,
        S: Sync,
    {
        if let Some(score) = self.empty_graph_score(a.is_empty(), b.is_empty()) {
            return score;
        }
        let (ha, hb) = rayon::join(|| self.histogram(a), || self.histogram(b));
        cosine_similarity(&ha, &hb)
    }

    /// Like [`compare`](Self::compare), clamped into [0, 1].
    pub fn similarity<A, B>(&self, a: &A, b: &B) -> Closed01<f64>
    where
        A: Graph + ?Sized,
        B: Graph + ?Sized,
    {
        Closed01::new(self.compare(a, b).max(0.0).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphKind, OwnedGraph};
    use crate::params::EmptyGraphPolicy;
    use approx::assert_abs_diff_eq;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn histogram(pairs: &[(usize, usize)]) -> ColorHistogram {
        let h = ColorHasher::new();
        let mut hist = ColorHistogram::new();
        for &(value, count) in pairs {
            hist.accumulate(&vec![h.color_of(&value); count]);
        }
        hist
    }

    #[test]
    fn test_cosine_of_known_vectors() {
        // (1, 1, 0) and (0, 1, 1): cos = 1 / 2
        let a = histogram(&[(1, 1), (2, 1)]);
        let b = histogram(&[(2, 1), (3, 1)]);
        assert_abs_diff_eq!(0.5, cosine_similarity(&a, &b), epsilon = 1e-12);

        // parallel vectors
        let a = histogram(&[(1, 1), (2, 2)]);
        let b = histogram(&[(1, 3), (2, 6)]);
        assert_abs_diff_eq!(1.0, cosine_similarity(&a, &b), epsilon = 1e-12);

        // disjoint colors
        let a = histogram(&[(1, 4)]);
        let b = histogram(&[(2, 4)]);
        assert_eq!(0.0, cosine_similarity(&a, &b));
    }

    #[test]
    #[should_panic]
    fn test_cosine_of_empty_histogram_panics() {
        let a = histogram(&[(1, 1)]);
        cosine_similarity(&a, &ColorHistogram::new());
    }

    #[test]
    fn test_empty_graph_policies() {
        log_init_test();
        let empty = OwnedGraph::empty(GraphKind::Directed);
        let g = OwnedGraph::from_edges(GraphKind::Directed, vec![(0, 1)]);

        let k = WlKernel::default();
        assert_eq!(1.0, k.compare(&empty, &empty));
        assert_eq!(1.0, k.compare(&empty, &g));
        assert_eq!(1.0, k.compare(&g, &empty));

        let k = WlKernel::new(
            WlParams::default()
                .with_empty_graph_policy(EmptyGraphPolicy::DissimilarUnlessBothEmpty),
        );
        assert_eq!(1.0, k.compare(&empty, &empty));
        assert_eq!(0.0, k.compare(&empty, &g));
        assert_eq!(0.0, k.compare(&g, &empty));
    }

    #[test]
    fn test_similarity_is_clamped() {
        let g = OwnedGraph::from_edges(GraphKind::Undirected, vec![(0, 1), (1, 2), (2, 0)]);
        let k = WlKernel::default();
        let s = k.similarity(&g, &g).get();
        assert!(s >= 0.0 && s <= 1.0);
        assert_abs_diff_eq!(1.0, s, epsilon = 1e-9);
    }

    #[test]
    fn test_default_params() {
        let k = WlKernel::default();
        assert_eq!(5, k.params().num_iterations);
        assert_eq!(EmptyGraphPolicy::MaximallySimilar, k.params().empty_graph);
    }
}
