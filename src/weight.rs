//! Edge weights and shortest-path distances.

use core::fmt;

use num_traits::{CheckedAdd, Zero};

/// An edge weight usable by [`DirectedWeightedGraph`](crate::DirectedWeightedGraph).
///
/// Implemented for every type that is copyable, totally ordered, has a zero
/// and supports checked addition, which covers all primitive integers.
/// Floating point types are excluded because they are not `Ord`.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + fmt::Debug + fmt::Display {}

impl<T> Weight for T where T: Copy + Ord + Zero + CheckedAdd + fmt::Debug + fmt::Display {}

/// Distance from a shortest-path source.
///
/// Every `Finite` distance orders below `Infinite`, so a slice of distances
/// can be compared, sorted or reduced with `min` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// Reachable at this total weight.
    Finite(W),
    /// Not reachable from the source.
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// Returns `true` if the vertex is reachable.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns `true` if the vertex is unreachable.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }

    /// Returns the weight for a reachable vertex.
    #[inline]
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }
}

impl<W> From<W> for Distance<W> {
    fn from(value: W) -> Self {
        Distance::Finite(value)
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => fmt::Display::fmt(w, f),
            Distance::Infinite => f.pad("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_orders_below_infinite() {
        let mut d = vec![Distance::Infinite, Distance::Finite(7_i64), Distance::Finite(2)];
        d.sort();
        assert_eq!(d, vec![Distance::Finite(2), Distance::Finite(7), Distance::Infinite]);
        assert_eq!(Distance::Finite(i64::MAX).min(Distance::Infinite), Distance::Finite(i64::MAX));
    }

    #[test]
    fn display_and_accessors() {
        let reachable: Distance<u32> = 5.into();
        let unreachable: Distance<u32> = Distance::Infinite;

        assert_eq!(reachable.to_string(), "5");
        assert_eq!(unreachable.to_string(), "inf");
        assert_eq!(reachable.finite(), Some(5));
        assert!(unreachable.is_infinite());
        assert!(!unreachable.is_finite());
    }
}
