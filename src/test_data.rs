use std::sync::atomic::{AtomicUsize, Ordering};

use itertools::{Itertools, MinMaxResult};
use rand::Rng;

use crate::weak_learner::{Accumulate, SplitChoice, SplitPointContext, WeakLearnerContext};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub num_of_samples: usize,
    pub sum: f64,
}

#[derive(Debug)]
pub struct Thresholds(pub Vec<f64>);

impl SplitPointContext for Thresholds {
    type SplitPoint = f64;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn get_split_point(&self, split_id: usize) -> Option<f64> {
        self.0.get(split_id).copied()
    }
}

/// Left/right sample counts per threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionCounts(pub Vec<(usize, usize)>);

impl Accumulate for PartitionCounts {
    fn accumulate(&mut self, other: &Self) {
        for (mine, theirs) in self.0.iter_mut().zip(&other.0) {
            mine.0 += theirs.0;
            mine.1 += theirs.1;
        }
    }
}

/// One value per sample; samples go left when `value < threshold`.
///
/// Every candidate with two non-empty sides reports the same scripted `gain`;
/// the most balanced one wins, lowest id on ties. Counters record how often
/// statistics are computed and candidates sampled.
#[derive(Debug, Default)]
pub struct ScriptedContext {
    pub values: Vec<f64>,
    pub gain: f64,
    pub partition_bias: usize,
    pub split_id_bias: usize,
    pub statistics_calls: AtomicUsize,
    pub sampling_calls: AtomicUsize,
}

impl ScriptedContext {
    pub fn new(values: Vec<f64>, gain: f64) -> Self {
        Self {
            values,
            gain,
            ..Default::default()
        }
    }

    /// Values `0.0, 1.0, ..` so sample `i` has value `i`.
    pub fn ascending(num_of_samples: usize, gain: f64) -> Self {
        Self::new((0..num_of_samples).map(|i| i as f64).collect(), gain)
    }

    pub fn statistics_calls(&self) -> usize {
        self.statistics_calls.load(Ordering::Relaxed)
    }

    pub fn sampling_calls(&self) -> usize {
        self.sampling_calls.load(Ordering::Relaxed)
    }
}

impl WeakLearnerContext for ScriptedContext {
    type Statistics = Summary;
    type SplitPoint = f64;
    type SplitPoints = Thresholds;
    type SplitStatistics = PartitionCounts;

    fn compute_statistics(&self, sample_indices: &[usize]) -> Summary {
        self.statistics_calls.fetch_add(1, Ordering::Relaxed);
        Summary {
            num_of_samples: sample_indices.len(),
            sum: sample_indices.iter().map(|&i| self.values[i]).sum(),
        }
    }

    fn sample_split_points<R: Rng + ?Sized>(
        &self,
        sample_indices: &[usize],
        _num_of_features: usize,
        num_of_thresholds: usize,
        _rng: &mut R,
    ) -> Thresholds {
        self.sampling_calls.fetch_add(1, Ordering::Relaxed);
        match sample_indices.iter().map(|&i| self.values[i]).minmax() {
            MinMaxResult::MinMax(low, high) if low < high => {
                let step = (high - low) / (num_of_thresholds + 1) as f64;
                Thresholds(
                    (1..=num_of_thresholds)
                        .map(|k| low + step * k as f64)
                        .collect(),
                )
            }
            _ => Thresholds(Vec::new()),
        }
    }

    fn compute_split_statistics(
        &self,
        sample_indices: &[usize],
        split_points: &Thresholds,
    ) -> PartitionCounts {
        PartitionCounts(
            split_points
                .0
                .iter()
                .map(|&threshold| {
                    let left = sample_indices
                        .iter()
                        .filter(|&&i| self.values[i] < threshold)
                        .count();
                    (left, sample_indices.len() - left)
                })
                .collect(),
        )
    }

    fn select_best_split_point(
        &self,
        _node_statistics: &Summary,
        split_statistics: &PartitionCounts,
    ) -> Option<SplitChoice> {
        split_statistics
            .0
            .iter()
            .enumerate()
            .filter(|(_, &(left, right))| left > 0 && right > 0)
            .min_by_key(|(_, &(left, right))| left.abs_diff(right))
            .map(|(id, _)| SplitChoice::new(id + self.split_id_bias, self.gain))
    }

    fn partition(&self, sample_indices: &mut [usize], split_point: &f64) -> usize {
        let mut i_split = 0;
        for i in 0..sample_indices.len() {
            if self.values[sample_indices[i]] < *split_point {
                sample_indices.swap(i, i_split);
                i_split += 1;
            }
        }
        i_split + self.partition_bias
    }
}
