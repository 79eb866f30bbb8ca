/// Errors from forest training.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    /// Returned when num_of_trees is zero.
    #[error("num_of_trees must be at least 1, got {num_of_trees}")]
    InvalidTreeCount {
        /// The invalid num_of_trees value provided.
        num_of_trees: usize,
    },

    /// Returned when maximum_depth is zero.
    #[error("maximum_depth must be at least 1, got {maximum_depth}")]
    InvalidMaxDepth {
        /// The invalid maximum_depth value provided.
        maximum_depth: usize,
    },

    /// Returned when a tree of the requested depth cannot be addressed or allocated.
    #[error("maximum_depth {maximum_depth} exceeds the allocatable tree size")]
    TreeTooDeep {
        /// The requested maximum depth.
        maximum_depth: usize,
    },

    /// Returned when num_of_features is zero.
    #[error("num_of_features must be at least 1, got {num_of_features}")]
    InvalidFeatureCount {
        /// The invalid num_of_features value provided.
        num_of_features: usize,
    },

    /// Returned when num_of_thresholds is zero.
    #[error("num_of_thresholds must be at least 1, got {num_of_thresholds}")]
    InvalidThresholdCount {
        /// The invalid num_of_thresholds value provided.
        num_of_thresholds: usize,
    },

    /// Returned when minimum_num_of_samples is zero.
    #[error("minimum_num_of_samples must be at least 1, got {minimum_num_of_samples}")]
    InvalidMinSamples {
        /// The invalid minimum_num_of_samples value provided.
        minimum_num_of_samples: usize,
    },

    /// Returned when minimum_information_gain is NaN.
    #[error("minimum_information_gain must be a number, got {value}")]
    InvalidMinimumInformationGain {
        /// The invalid gain threshold provided.
        value: f64,
    },

    /// Returned when a node is asked to train on a range outside the sample arena.
    #[error("sample range [{start}, {end}) is invalid for {len} samples")]
    InvalidSampleRange {
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        end: usize,
        /// Length of the sample-index arena.
        len: usize,
    },

    /// Returned when training reaches a node that already carries statistics.
    #[error("node {node} has already been trained")]
    NodeAlreadyTrained {
        /// Array position of the node.
        node: usize,
    },

    /// Returned when the weak learner reports a left partition larger than the range.
    #[error("partition offset {offset} exceeds the {num_of_samples} samples of the node")]
    PartitionOutOfRange {
        /// The offset returned by the weak learner.
        offset: usize,
        /// Number of samples in the partitioned range.
        num_of_samples: usize,
    },

    /// Returned when the selected split id does not name a sampled candidate.
    #[error("split point {split_id} not found among {num_of_candidates} candidates")]
    UnknownSplitPoint {
        /// The split id chosen by the weak learner.
        split_id: usize,
        /// Number of candidates that were sampled.
        num_of_candidates: usize,
    },

    /// Returned when training one member of the ensemble fails.
    #[error("failed to train tree {tree}")]
    TreeTrainingFailed {
        /// Zero-based position of the tree in the forest.
        tree: usize,
        /// The error raised while training that tree.
        #[source]
        source: Box<TrainingError>,
    },
}
