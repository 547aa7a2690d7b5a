//! A graph similarity score using an unlabeled variant of the
//! Weisfeiler-Lehman graph kernel according to [this paper][1].
//!
//! Every node starts with a color derived from its degree (or its in- and
//! out-degree in directed graphs). Each refinement round recolors a node by
//! hashing its previous color together with the sorted colors of its
//! neighbors. The colors of all rounds are counted per graph, and the two
//! count vectors are compared by cosine similarity.
//!
//! [1]: https://www.jmlr.org/papers/volume12/shervashidze11a/shervashidze11a.pdf
//!      "2011, Shervashidze et al., Weisfeiler-Lehman Graph Kernels"

mod color;
mod error;
pub mod graph;
mod graph_traits;
mod histogram;
mod kernel;
mod params;
mod refine;

pub use {
    color::*, error::*, graph_traits::*, histogram::*, kernel::*, params::*, refine::*,
};

/// Weisfeiler-Lehman similarity of `a` and `b` after `num_iterations`
/// refinement rounds (use [`DEFAULT_NUM_ITERATIONS`] if in doubt).
///
/// Returns 1.0 if either graph has no nodes.
pub fn wlgk<A, B>(a: &A, b: &B, num_iterations: usize) -> f64
where
    A: Graph + ?Sized,
    B: Graph + ?Sized,
{
    WlKernel::new(WlParams::new(num_iterations)).compare(a, b)
}
