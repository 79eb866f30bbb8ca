//! Greedy recursive induction of decision trees for random forests.
//!
//! The statistics, split candidates and partitioning rule are supplied by a
//! [`WeakLearnerContext`]; this crate decides, node by node, whether to stop
//! or split, and reorders the sample indices in place as it goes.

pub mod error;
pub mod forest;
pub mod training;
pub mod tree;
pub mod weak_learner;

#[cfg(test)]
mod test_data;

pub use error::TrainingError;
pub use forest::{
    bagging::Bagging,
    params::{TrainingParameters, TrainingParametersBuilder},
    Forest, RandomForestTrainer,
};
pub use tree::{ArrayTree, Node, NodeIndex};
pub use weak_learner::{
    aggregation::{LocalAggregator, SplitAggregator},
    Accumulate, SplitChoice, SplitPointContext, WeakLearnerContext,
};
