/// Number of refinement rounds used when nothing else is specified.
pub const DEFAULT_NUM_ITERATIONS: usize = 5;

/// What to return when at least one of the compared graphs has no nodes.
///
/// Cosine similarity is undefined for an empty histogram, so this is a
/// convention rather than a result of the kernel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EmptyGraphPolicy {
    /// Return 1.0 whenever either graph is empty.
    MaximallySimilar,

    /// Return 1.0 if both graphs are empty and 0.0 if only one of them is.
    DissimilarUnlessBothEmpty,
}

impl Default for EmptyGraphPolicy {
    fn default() -> Self {
        EmptyGraphPolicy::MaximallySimilar
    }
}

impl EmptyGraphPolicy {
    pub(crate) fn score(self, a_is_empty: bool, b_is_empty: bool) -> f64 {
        debug_assert!(a_is_empty || b_is_empty);
        match self {
            EmptyGraphPolicy::MaximallySimilar => 1.0,
            EmptyGraphPolicy::DissimilarUnlessBothEmpty => {
                if a_is_empty && b_is_empty {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WlParams {
    /// Refinement rounds after the initial degree coloring. Zero compares
    /// degree histograms only.
    pub num_iterations: usize,
    pub empty_graph: EmptyGraphPolicy,
}

impl WlParams {
    pub fn new(num_iterations: usize) -> Self {
        WlParams {
            num_iterations,
            ..WlParams::default()
        }
    }

    pub fn with_empty_graph_policy(self, empty_graph: EmptyGraphPolicy) -> Self {
        WlParams {
            empty_graph,
            ..self
        }
    }
}

impl Default for WlParams {
    fn default() -> Self {
        WlParams {
            num_iterations: DEFAULT_NUM_ITERATIONS,
            empty_graph: EmptyGraphPolicy::default(),
        }
    }
}
