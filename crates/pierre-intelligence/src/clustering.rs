// ABOUTME: Heavy/light session clustering for rep-cycling detection
// ABOUTME: Splits sessions around a floored median, measures alternation, predicts next cluster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are tiny

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::suggestion::RepCyclingConfig;
use crate::data_extractor::ExerciseDataPoint;
use crate::statistics::{median, std_dev};

/// Partition of a session series into heavy (low-rep) and light (high-rep) groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterData {
    /// Sessions at or below the rep threshold, oldest first
    pub heavy: Vec<ExerciseDataPoint>,
    /// Sessions above the rep threshold, oldest first
    pub light: Vec<ExerciseDataPoint>,
    /// Average-reps split point used for the partition
    pub threshold_reps: f64,
    /// Whether the upcoming session is predicted to be heavy
    pub next_is_heavy: bool,
}

impl ClusterData {
    /// Sessions of the cluster predicted for the next workout
    #[must_use]
    pub fn next_cluster(&self) -> &[ExerciseDataPoint] {
        if self.next_is_heavy {
            &self.heavy
        } else {
            &self.light
        }
    }
}

/// Split sessions into heavy and light groups
///
/// The split sits at the median average reps, floored at
/// `light_threshold_floor_reps` so that a low median never pushes ordinary
/// strength sessions into the light group. Returns `None` when either group is
/// smaller than `min_cluster_size`.
#[must_use]
pub fn cluster_sessions(
    points: &[ExerciseDataPoint],
    config: &RepCyclingConfig,
) -> Option<ClusterData> {
    let reps: Vec<f64> = points.iter().map(|p| p.average_reps).collect();
    let threshold_reps = median(&reps).max(config.light_threshold_floor_reps);

    let (light, heavy): (Vec<ExerciseDataPoint>, Vec<ExerciseDataPoint>) = points
        .iter()
        .cloned()
        .partition(|p| p.average_reps > threshold_reps);

    if heavy.len() < config.min_cluster_size || light.len() < config.min_cluster_size {
        return None;
    }

    let next_is_heavy = predict_next_is_heavy(points, threshold_reps, config);

    Some(ClusterData {
        heavy,
        light,
        threshold_reps,
        next_is_heavy,
    })
}

/// Fraction of adjacent-session transitions that cross the median average reps
#[must_use]
pub fn alternation_rate(points: &[ExerciseDataPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let reps: Vec<f64> = points.iter().map(|p| p.average_reps).collect();
    let mid = median(&reps);
    let crossings = reps
        .windows(2)
        .filter(|pair| (pair[0] > mid) != (pair[1] > mid))
        .count();
    crossings as f64 / (reps.len() - 1) as f64
}

/// Detect heavy/light rep cycling
///
/// Requires a valid cluster split, per-session average reps spread above
/// `min_reps_stddev`, and an alternation rate of at least `min_alternation_rate`.
/// Returns the clusters together with the alternation rate.
#[must_use]
pub fn detect_rep_cycling(
    points: &[ExerciseDataPoint],
    config: &RepCyclingConfig,
) -> Option<(ClusterData, f64)> {
    let reps: Vec<f64> = points.iter().map(|p| p.average_reps).collect();
    if std_dev(&reps) <= config.min_reps_stddev {
        return None;
    }

    let rate = alternation_rate(points);
    if rate < config.min_alternation_rate {
        return None;
    }

    cluster_sessions(points, config).map(|clusters| (clusters, rate))
}

/// Predict whether the next session is heavy from the most recent window
///
/// Regular alternation inverts the last session's class. Irregular alternation
/// predicts whichever class is under-represented in the window.
fn predict_next_is_heavy(
    points: &[ExerciseDataPoint],
    threshold_reps: f64,
    config: &RepCyclingConfig,
) -> bool {
    let window_start = points.len().saturating_sub(config.prediction_window);
    let recent: Vec<bool> = points[window_start..]
        .iter()
        .map(|p| p.average_reps <= threshold_reps)
        .collect();

    let Some(&last_is_heavy) = recent.last() else {
        return true;
    };
    if recent.len() < 2 {
        return !last_is_heavy;
    }

    let flips = recent.windows(2).filter(|pair| pair[0] != pair[1]).count();
    let flip_rate = flips as f64 / (recent.len() - 1) as f64;
    if flip_rate >= config.regular_alternation_rate {
        return !last_is_heavy;
    }

    let heavy_count = recent.iter().filter(|&&is_heavy| is_heavy).count();
    let light_count = recent.len() - heavy_count;
    match heavy_count.cmp(&light_count) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => !last_is_heavy,
    }
}
