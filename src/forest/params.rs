use crate::error::TrainingError;

use super::bagging::Bagging;

/// Parameters of a forest training run.
///
/// Construct via [`TrainingParametersBuilder`] or [`TrainingParameters::default`].
/// Read-only once built.
///
/// # Defaults
///
/// | Parameter                  | Default         |
/// |----------------------------|-----------------|
/// | `num_of_trees`             | 3               |
/// | `maximum_depth`            | 20              |
/// | `num_of_features`          | 100             |
/// | `num_of_thresholds`        | 50              |
/// | `minimum_information_gain` | 0.0             |
/// | `minimum_num_of_samples`   | 100             |
/// | `seed`                     | 42              |
/// | `bagging`                  | `Bagging::None` |
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingParameters {
    num_of_trees: usize,
    maximum_depth: usize,
    num_of_features: usize,
    num_of_thresholds: usize,
    minimum_information_gain: f64,
    minimum_num_of_samples: usize,
    seed: u64,
    bagging: Bagging,
}

impl TrainingParameters {
    pub fn num_of_trees(&self) -> usize {
        self.num_of_trees
    }

    pub fn maximum_depth(&self) -> usize {
        self.maximum_depth
    }

    /// Candidate features sampled per split decision.
    pub fn num_of_features(&self) -> usize {
        self.num_of_features
    }

    /// Candidate thresholds sampled per candidate feature.
    pub fn num_of_thresholds(&self) -> usize {
        self.num_of_thresholds
    }

    /// Splits whose best gain falls below this value are rejected.
    pub fn minimum_information_gain(&self) -> f64 {
        self.minimum_information_gain
    }

    /// Nodes with fewer samples become leaves without a split attempt.
    pub fn minimum_num_of_samples(&self) -> usize {
        self.minimum_num_of_samples
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn bagging(&self) -> Bagging {
        self.bagging
    }

    fn validate(&self) -> Result<(), TrainingError> {
        if self.num_of_trees == 0 {
            return Err(TrainingError::InvalidTreeCount {
                num_of_trees: self.num_of_trees,
            });
        }
        if self.maximum_depth == 0 {
            return Err(TrainingError::InvalidMaxDepth {
                maximum_depth: self.maximum_depth,
            });
        }
        if self.maximum_depth >= usize::BITS as usize {
            return Err(TrainingError::TreeTooDeep {
                maximum_depth: self.maximum_depth,
            });
        }
        if self.num_of_features == 0 {
            return Err(TrainingError::InvalidFeatureCount {
                num_of_features: self.num_of_features,
            });
        }
        if self.num_of_thresholds == 0 {
            return Err(TrainingError::InvalidThresholdCount {
                num_of_thresholds: self.num_of_thresholds,
            });
        }
        if self.minimum_num_of_samples == 0 {
            return Err(TrainingError::InvalidMinSamples {
                minimum_num_of_samples: self.minimum_num_of_samples,
            });
        }
        if self.minimum_information_gain.is_nan() {
            return Err(TrainingError::InvalidMinimumInformationGain {
                value: self.minimum_information_gain,
            });
        }
        Ok(())
    }
}

// Builder for TrainingParameters
#[derive(Debug, Clone)]
pub struct TrainingParametersBuilder {
    params: TrainingParameters,
}

impl TrainingParametersBuilder {
    pub fn new() -> Self {
        Self {
            params: TrainingParameters {
                num_of_trees: 3,
                maximum_depth: 20,
                num_of_features: 100,
                num_of_thresholds: 50,
                minimum_information_gain: 0.0,
                minimum_num_of_samples: 100,
                seed: 42,
                bagging: Bagging::None,
            },
        }
    }

    pub fn num_of_trees(mut self, num_of_trees: usize) -> Self {
        self.params.num_of_trees = num_of_trees;
        self
    }

    pub fn maximum_depth(mut self, maximum_depth: usize) -> Self {
        self.params.maximum_depth = maximum_depth;
        self
    }

    pub fn num_of_features(mut self, num_of_features: usize) -> Self {
        self.params.num_of_features = num_of_features;
        self
    }

    pub fn num_of_thresholds(mut self, num_of_thresholds: usize) -> Self {
        self.params.num_of_thresholds = num_of_thresholds;
        self
    }

    /// Zero or a negative value disables the gain stopping rule.
    pub fn minimum_information_gain(mut self, minimum_information_gain: f64) -> Self {
        self.params.minimum_information_gain = minimum_information_gain;
        self
    }

    pub fn minimum_num_of_samples(mut self, minimum_num_of_samples: usize) -> Self {
        self.params.minimum_num_of_samples = minimum_num_of_samples;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = seed;
        self
    }

    pub fn bagging(mut self, bagging: Bagging) -> Self {
        self.params.bagging = bagging;
        self
    }

    /// Validate and freeze the parameters.
    ///
    /// # Errors
    ///
    /// | Variant                                          | When                                   |
    /// |--------------------------------------------------|----------------------------------------|
    /// | [`TrainingError::InvalidTreeCount`]              | `num_of_trees` is zero                 |
    /// | [`TrainingError::InvalidMaxDepth`]               | `maximum_depth` is zero                |
    /// | [`TrainingError::TreeTooDeep`]                   | `maximum_depth` overflows node indices |
    /// | [`TrainingError::InvalidFeatureCount`]           | `num_of_features` is zero              |
    /// | [`TrainingError::InvalidThresholdCount`]         | `num_of_thresholds` is zero            |
    /// | [`TrainingError::InvalidMinSamples`]             | `minimum_num_of_samples` is zero       |
    /// | [`TrainingError::InvalidMinimumInformationGain`] | `minimum_information_gain` is NaN      |
    pub fn build(self) -> Result<TrainingParameters, TrainingError> {
        self.params.validate()?;
        Ok(self.params)
    }
}

impl Default for TrainingParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TrainingParameters {
    fn default() -> Self {
        TrainingParametersBuilder::new().params
    }
}
