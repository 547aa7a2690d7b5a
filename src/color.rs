//! Colors and the hash function that compresses structural signatures into them.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// A compressed structural signature of a node at one refinement round.
///
/// Colors are only meaningful relative to the [`ColorHasher`] that produced
/// them. Two histograms can be compared if and only if they were built with
/// the same hasher.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u64);

impl Color {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

// Arbitrary fixed seeds, so that colors are stable across processes.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Hashes tuples and sequences into [`Color`]s.
///
/// Collisions between distinct structures are possible and accepted.
#[derive(Clone)]
pub struct ColorHasher<S = ahash::RandomState> {
    build_hasher: S,
}

impl ColorHasher {
    /// A hasher with fixed seeds. Results are reproducible between runs.
    pub fn new() -> Self {
        ColorHasher::with_hasher(ahash::RandomState::with_seeds(
            SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3],
        ))
    }
}

impl Default for ColorHasher {
    fn default() -> Self {
        ColorHasher::new()
    }
}

impl<S: BuildHasher> ColorHasher<S> {
    pub fn with_hasher(build_hasher: S) -> Self {
        ColorHasher { build_hasher }
    }

    pub fn color_of<T: Hash + ?Sized>(&self, value: &T) -> Color {
        let mut state = self.build_hasher.build_hasher();
        value.hash(&mut state);
        Color(state.finish())
    }
}

impl<S> fmt::Debug for ColorHasher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorHasher").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_of_is_deterministic() {
        let a = ColorHasher::new();
        let b = ColorHasher::new();
        assert_eq!(a.color_of(&3usize), b.color_of(&3usize));
        assert_eq!(a.color_of(&(1usize, 2usize)), b.color_of(&(1usize, 2usize)));
        assert_eq!(a.color_of(&3usize).get(), b.color_of(&3usize).get());
    }

    #[test]
    fn test_colors_order_by_value() {
        let h = ColorHasher::new();
        let x = h.color_of(&1usize);
        let y = h.color_of(&2usize);
        assert_eq!(x < y, x.get() < y.get());
    }

    #[test]
    fn test_sequences_are_distinguished() {
        let h = ColorHasher::new();
        let empty: &[Color] = &[];
        let one = [h.color_of(&0usize)];
        let two = [h.color_of(&0usize), h.color_of(&0usize)];
        assert_ne!(h.color_of(empty), h.color_of(&one[..]));
        assert_ne!(h.color_of(&one[..]), h.color_of(&two[..]));
        assert_ne!(h.color_of(&(1usize, 2usize)), h.color_of(&(2usize, 1usize)));
    }
}
