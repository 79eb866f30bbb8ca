//! The weak-learner contract consumed by tree induction.
//!
//! The crate never looks inside statistics, split points or split statistics;
//! a [`WeakLearnerContext`] computes, compares and applies them.

pub mod aggregation;

use rand::Rng;

/// Result of best-split selection: the chosen candidate and its information gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitChoice {
    pub split_id: usize,
    pub information_gain: f64,
}

impl SplitChoice {
    pub fn new(split_id: usize, information_gain: f64) -> Self {
        Self {
            split_id,
            information_gain,
        }
    }
}

/// Handle over the split candidates sampled for one node.
pub trait SplitPointContext {
    type SplitPoint;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the candidate with id `split_id`, or `None` if no such candidate was sampled.
    fn get_split_point(&self, split_id: usize) -> Option<Self::SplitPoint>;
}

/// Split statistics that can be merged from partial computations.
///
/// Merging the statistics computed over disjoint sample shards must give the
/// same result as computing them over the union.
pub trait Accumulate {
    fn accumulate(&mut self, other: &Self);
}

/// Statistics computation, candidate sampling, split evaluation and partitioning.
///
/// Implementations must fix their tie-break policy in
/// [`select_best_split_point`](WeakLearnerContext::select_best_split_point);
/// training is deterministic only if that policy and candidate sampling are.
pub trait WeakLearnerContext {
    /// Per-node sufficient statistic.
    type Statistics;
    /// Descriptor of how an internal node routes samples.
    type SplitPoint;
    type SplitPoints: SplitPointContext<SplitPoint = Self::SplitPoint>;
    /// Left/right statistics for every candidate of a [`Self::SplitPoints`].
    type SplitStatistics: Accumulate;

    /// Compute the statistics of `sample_indices`. Must not have side effects.
    fn compute_statistics(&self, sample_indices: &[usize]) -> Self::Statistics;

    /// Draw `num_of_features` candidate features with up to `num_of_thresholds`
    /// thresholds each.
    fn sample_split_points<R: Rng + ?Sized>(
        &self,
        sample_indices: &[usize],
        num_of_features: usize,
        num_of_thresholds: usize,
        rng: &mut R,
    ) -> Self::SplitPoints;

    fn compute_split_statistics(
        &self,
        sample_indices: &[usize],
        split_points: &Self::SplitPoints,
    ) -> Self::SplitStatistics;

    /// Pick the best candidate and report its information gain.
    ///
    /// Returns `None` when no candidate is admissible, which training treats
    /// like a gain below every threshold.
    fn select_best_split_point(
        &self,
        node_statistics: &Self::Statistics,
        split_statistics: &Self::SplitStatistics,
    ) -> Option<SplitChoice>;

    /// Reorder `sample_indices` so the samples going left come first.
    ///
    /// Returns the number of samples in the left partition, relative to the
    /// start of the slice.
    fn partition(&self, sample_indices: &mut [usize], split_point: &Self::SplitPoint) -> usize;
}
