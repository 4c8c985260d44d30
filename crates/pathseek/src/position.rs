use std::fmt::Debug;
use std::hash::Hash;

/// The unit of search.
///
/// Equality and hashing must be structural: two values naming the same
/// place compare equal and hash identically.
pub trait Position: Clone + Eq + Hash + Debug {
    /// Estimated remaining cost from `self` to `other`.
    ///
    /// Must be non-negative and `0.0` when `self == other`. The engine
    /// assumes, but does not check, that the estimate never exceeds the
    /// true cost.
    fn heuristic_distance(&self, other: &Self) -> f32;
}
