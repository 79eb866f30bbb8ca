use rand::Rng;
use tracing::debug;

use crate::{
    error::TrainingError,
    forest::params::TrainingParameters,
    tree::{ArrayTree, NodeIndex},
    weak_learner::{aggregation::SplitAggregator, SplitPointContext, WeakLearnerContext},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    TooFewSamples,
    MaximumDepth,
    InsufficientGain,
}

/// One recursive descent over one tree.
///
/// Everything but the current node and its sample range is fixed for the
/// whole descent and held here: the tree being filled, the sample-index arena
/// it reorders, the weak learner, the parameters, the aggregation hook and the
/// tree's random number generator.
pub struct TrainingOperation<'a, W: WeakLearnerContext, A, R: ?Sized> {
    tree: &'a mut ArrayTree<W::Statistics, W::SplitPoint>,
    sample_indices: &'a mut [usize],
    context: &'a W,
    parameters: &'a TrainingParameters,
    aggregator: &'a A,
    rng: &'a mut R,
}

impl<'a, W, A, R> TrainingOperation<'a, W, A, R>
where
    W: WeakLearnerContext,
    A: SplitAggregator<W::SplitStatistics>,
    R: Rng + ?Sized,
{
    pub fn new(
        tree: &'a mut ArrayTree<W::Statistics, W::SplitPoint>,
        sample_indices: &'a mut [usize],
        context: &'a W,
        parameters: &'a TrainingParameters,
        aggregator: &'a A,
        rng: &'a mut R,
    ) -> Self {
        Self {
            tree,
            sample_indices,
            context,
            parameters,
            aggregator,
            rng,
        }
    }

    /// Train the whole tree from its root over every sample index.
    pub fn train(&mut self) -> Result<(), TrainingError> {
        let root = self.tree.root();
        let i_end = self.sample_indices.len();
        self.train_recursive(root, 0, i_end, None, 1)
    }

    /// Train `node` on the samples `sample_indices[i_start..i_end]`.
    ///
    /// `statistics` may carry the node's statistics if the caller already has
    /// them; otherwise they are computed from the range. The left subtree is
    /// finished before the right one is started.
    ///
    /// # Errors
    ///
    /// | Variant                                | When                                              |
    /// |----------------------------------------|---------------------------------------------------|
    /// | [`TrainingError::InvalidSampleRange`]  | the range is reversed or outside the arena        |
    /// | [`TrainingError::NodeAlreadyTrained`]  | `node` already carries statistics                 |
    /// | [`TrainingError::UnknownSplitPoint`]   | the selected split id was never sampled           |
    /// | [`TrainingError::PartitionOutOfRange`] | the weak learner's partition offset exceeds range |
    pub fn train_recursive(
        &mut self,
        node: NodeIndex,
        i_start: usize,
        i_end: usize,
        statistics: Option<W::Statistics>,
        current_depth: usize,
    ) -> Result<(), TrainingError> {
        if i_start > i_end || i_end > self.sample_indices.len() {
            return Err(TrainingError::InvalidSampleRange {
                start: i_start,
                end: i_end,
                len: self.sample_indices.len(),
            });
        }
        debug_assert!(current_depth <= self.tree.maximum_depth());

        if self.tree.node(node).is_visited() {
            return Err(TrainingError::NodeAlreadyTrained { node: node.index() });
        }

        let num_of_samples = i_end - i_start;
        debug!(node = node.index(), depth = current_depth, num_of_samples, "training node");

        let statistics = match statistics {
            Some(statistics) => statistics,
            None => self
                .context
                .compute_statistics(&self.sample_indices[i_start..i_end]),
        };
        let children = self.tree.children(node);
        let node_statistics = &*self.tree.node_mut(node).statistics.insert(statistics);

        if num_of_samples < self.parameters.minimum_num_of_samples() {
            self.stop(node, current_depth, StopReason::TooFewSamples);
            return Ok(());
        }

        let Some((left, right)) = children else {
            self.stop(node, current_depth, StopReason::MaximumDepth);
            return Ok(());
        };

        let samples = &self.sample_indices[i_start..i_end];
        let split_points = self.context.sample_split_points(
            samples,
            self.parameters.num_of_features(),
            self.parameters.num_of_thresholds(),
            &mut *self.rng,
        );
        let split_statistics = self
            .aggregator
            .aggregate(self.context.compute_split_statistics(samples, &split_points));
        let choice = self
            .context
            .select_best_split_point(node_statistics, &split_statistics);
        let choice = self.aggregator.broadcast(choice);

        let minimum_gain = self.parameters.minimum_information_gain();
        let Some(choice) = choice.filter(|c| {
            !c.information_gain.is_nan() && c.information_gain >= minimum_gain
        }) else {
            self.stop(node, current_depth, StopReason::InsufficientGain);
            return Ok(());
        };

        let split_point = split_points
            .get_split_point(choice.split_id)
            .ok_or_else(|| TrainingError::UnknownSplitPoint {
                split_id: choice.split_id,
                num_of_candidates: split_points.len(),
            })?;
        let offset = self
            .context
            .partition(&mut self.sample_indices[i_start..i_end], &split_point);
        if offset > num_of_samples {
            return Err(TrainingError::PartitionOutOfRange {
                offset,
                num_of_samples,
            });
        }
        self.tree.node_mut(node).split_point = Some(split_point);
        let i_split = i_start + offset;
        debug!(
            node = node.index(),
            depth = current_depth,
            split_id = choice.split_id,
            information_gain = choice.information_gain,
            num_of_left = offset,
            num_of_right = i_end - i_split,
            "split node"
        );

        self.train_recursive(left, i_start, i_split, None, current_depth + 1)?;
        self.train_recursive(right, i_split, i_end, None, current_depth + 1)
    }

    fn stop(&mut self, node: NodeIndex, depth: usize, reason: StopReason) {
        self.tree.node_mut(node).leaf = true;
        debug!(node = node.index(), depth, ?reason, "leaf node");
    }
}
