//! Hook for sharing split decisions between cooperating training processes.
//!
//! When candidate statistics are spread over several ranks, every rank calls
//! [`SplitAggregator::aggregate`] with its partial statistics and then
//! [`SplitAggregator::broadcast`] with its (possibly meaningless) selection.
//! A coordinator accumulates the partials, selects, and sends the choice back,
//! so that all ranks partition and recurse on the same decision. Both calls
//! are barriers: every rank must reach them for the same node in the same order.

use super::{Accumulate, SplitChoice};

pub trait SplitAggregator<S: Accumulate> {
    /// Combine the local split statistics with those held by other ranks.
    fn aggregate(&self, local: S) -> S;

    /// Agree on the split selected for the current node.
    fn broadcast(&self, choice: Option<SplitChoice>) -> Option<SplitChoice>;
}

/// Single-process aggregator: statistics and decisions pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAggregator;

impl<S: Accumulate> SplitAggregator<S> for LocalAggregator {
    fn aggregate(&self, local: S) -> S {
        local
    }

    fn broadcast(&self, choice: Option<SplitChoice>) -> Option<SplitChoice> {
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Counts(Vec<usize>);

    impl Accumulate for Counts {
        fn accumulate(&mut self, other: &Self) {
            for (a, b) in self.0.iter_mut().zip(&other.0) {
                *a += b;
            }
        }
    }

    #[test]
    fn local_aggregator_passes_through() {
        let aggregated = LocalAggregator.aggregate(Counts(vec![1, 2]));
        assert_eq!(aggregated, Counts(vec![1, 2]));

        let choice = Some(SplitChoice::new(3, 0.25));
        assert_eq!(SplitAggregator::<Counts>::broadcast(&LocalAggregator, choice), choice);
        assert_eq!(SplitAggregator::<Counts>::broadcast(&LocalAggregator, None), None);
    }
}
