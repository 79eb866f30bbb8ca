use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::{
    error::TrainingError,
    training::TrainingOperation,
    tree::ArrayTree,
    weak_learner::{
        aggregation::{LocalAggregator, SplitAggregator},
        WeakLearnerContext,
    },
};

use super::{params::TrainingParameters, Forest};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;

/// Bound required of everything shared between trees trained in parallel.
///
/// Without the `use-rayon` feature every type satisfies it.
#[cfg(feature = "use-rayon")]
pub trait ThreadSafe: Send + Sync {}
#[cfg(feature = "use-rayon")]
impl<T: Send + Sync + ?Sized> ThreadSafe for T {}

/// Bound required of everything shared between trees trained in parallel.
///
/// Without the `use-rayon` feature every type satisfies it.
#[cfg(not(feature = "use-rayon"))]
pub trait ThreadSafe {}
#[cfg(not(feature = "use-rayon"))]
impl<T: ?Sized> ThreadSafe for T {}

/// Builds forests one independently trained tree at a time.
///
/// The aggregator is consulted at every split attempt; the default
/// [`LocalAggregator`] keeps training inside the current process.
#[derive(Debug, Clone, Default)]
pub struct RandomForestTrainer<A = LocalAggregator> {
    aggregator: A,
}

impl RandomForestTrainer<LocalAggregator> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A> RandomForestTrainer<A> {
    pub fn with_aggregator(aggregator: A) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Train `parameters.num_of_trees()` trees over `sample_indices`.
    ///
    /// Each tree draws its own seed from a generator seeded with
    /// `parameters.seed()` and trains on its own copy of the indices (bagged
    /// according to `parameters.bagging()`), so the forest is the same whether
    /// trees are trained one after another or in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`TrainingError::TreeTrainingFailed`] for the first tree whose
    /// training fails, wrapping the cause.
    #[instrument(
        skip_all,
        fields(num_of_trees = parameters.num_of_trees(), num_of_samples = sample_indices.len())
    )]
    pub fn train_forest<W>(
        &self,
        sample_indices: &[usize],
        context: &W,
        parameters: &TrainingParameters,
    ) -> Result<Forest<W::Statistics, W::SplitPoint>, TrainingError>
    where
        W: WeakLearnerContext + ThreadSafe,
        W::Statistics: ThreadSafe,
        W::SplitPoint: ThreadSafe,
        A: SplitAggregator<W::SplitStatistics> + ThreadSafe,
    {
        info!(
            num_of_trees = parameters.num_of_trees(),
            num_of_samples = sample_indices.len(),
            maximum_depth = parameters.maximum_depth(),
            bagging = ?parameters.bagging(),
            "training forest"
        );

        let mut master_rng = StdRng::seed_from_u64(parameters.seed());
        let tree_seeds: Vec<u64> = (0..parameters.num_of_trees())
            .map(|_| master_rng.gen())
            .collect();

        let train_member = |(tree, seed): (usize, u64)| {
            self.train_member(sample_indices, context, parameters, seed)
                .map_err(|source| TrainingError::TreeTrainingFailed {
                    tree,
                    source: Box::new(source),
                })
        };

        let trees: Vec<ArrayTree<W::Statistics, W::SplitPoint>>;
        #[cfg(not(feature = "use-rayon"))]
        {
            trees = tree_seeds
                .into_iter()
                .enumerate()
                .map(train_member)
                .collect::<Result<_, _>>()?;
        }
        #[cfg(feature = "use-rayon")]
        {
            trees = tree_seeds
                .into_par_iter()
                .enumerate()
                .map(train_member)
                .collect::<Result<_, _>>()?;
        }

        let mut forest = Forest::new();
        for tree in trees {
            forest.push(tree);
        }
        debug!(num_of_trees = forest.len(), "forest trained");
        Ok(forest)
    }

    /// Train `tree` from its root over all of `sample_indices`, reordering them in place.
    ///
    /// The tree's own pre-allocated depth bounds the descent, whatever
    /// `parameters.maximum_depth()` says.
    ///
    /// # Errors
    ///
    /// Returns [`TrainingError::NodeAlreadyTrained`] if `tree` has been trained
    /// before, and otherwise any error of [`TrainingOperation::train_recursive`].
    #[instrument(
        skip_all,
        fields(num_of_samples = sample_indices.len(), maximum_depth = tree.maximum_depth())
    )]
    pub fn train_tree<W, R>(
        &self,
        tree: &mut ArrayTree<W::Statistics, W::SplitPoint>,
        sample_indices: &mut [usize],
        context: &W,
        parameters: &TrainingParameters,
        rng: &mut R,
    ) -> Result<(), TrainingError>
    where
        W: WeakLearnerContext,
        A: SplitAggregator<W::SplitStatistics>,
        R: Rng + ?Sized,
    {
        info!("training tree");
        TrainingOperation::new(tree, sample_indices, context, parameters, &self.aggregator, rng)
            .train()?;
        info!(
            num_of_nodes = tree.reachable().len(),
            num_of_leaves = tree.num_of_leaves(),
            "tree trained"
        );
        Ok(())
    }

    fn train_member<W>(
        &self,
        sample_indices: &[usize],
        context: &W,
        parameters: &TrainingParameters,
        seed: u64,
    ) -> Result<ArrayTree<W::Statistics, W::SplitPoint>, TrainingError>
    where
        W: WeakLearnerContext,
        A: SplitAggregator<W::SplitStatistics>,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree_indices = parameters.bagging().draw(sample_indices, &mut rng);
        let mut tree = ArrayTree::new(parameters.maximum_depth())?;
        self.train_tree(&mut tree, &mut tree_indices, context, parameters, &mut rng)?;
        Ok(tree)
    }
}
