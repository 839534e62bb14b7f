//! Contract for edge-cost types usable by the shortest-path search

/// Edge cost with a total order, a path composition rule and an
/// unreachability predicate.
///
/// The search accumulates path cost through [`EdgeWeight::combine`], so
/// implementations must keep composition consistent with their ordering:
/// combining two weights yields a weight that compares like the sum of
/// both costs.
pub trait EdgeWeight: Ord + Clone {
    /// Cost of traversing `self` and then `other` as one combined segment
    #[must_use]
    fn combine(&self, other: &Self) -> Self;

    /// Whether this weight marks an edge that cannot be traversed at all
    fn is_unreachable(&self) -> bool;
}
