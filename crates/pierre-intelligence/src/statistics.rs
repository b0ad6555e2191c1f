// ABOUTME: Small statistics toolkit used by the strength suggestion engine
// ABOUTME: Implements index-based linear regression, mean, population stddev, and median
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are tiny

//! Degenerate inputs never fail here: the engine sits on the interactive logging
//! path, so empty or single-point series produce neutral results instead of errors.

use serde::{Deserialize, Serialize};

/// Least-squares fit of `y` against the sample index `0, 1, 2, ...`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Change in `y` per session
    pub slope: f64,
    /// Fitted value at index 0
    pub intercept: f64,
    /// Coefficient of determination (0-1)
    pub r_squared: f64,
}

impl LinearRegression {
    /// Fit a line through `values` ordered oldest first
    ///
    /// Fewer than two points yields a zero slope and zero R².
    #[must_use]
    pub fn fit(values: &[f64]) -> Self {
        if values.len() < 2 {
            return Self {
                slope: 0.0,
                intercept: values.first().copied().unwrap_or(0.0),
                r_squared: 0.0,
            };
        }

        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = mean(values);

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        let mut syy = 0.0;
        for (i, y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        if sxx.abs() < f64::EPSILON {
            return Self {
                slope: 0.0,
                intercept: mean_y,
                r_squared: 0.0,
            };
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);

        // Flat series: correlation is undefined, report no explained variance
        let r_squared = if syy.abs() < f64::EPSILON {
            0.0
        } else {
            ((sxy * sxy) / (sxx * syy)).clamp(0.0, 1.0)
        };

        Self {
            slope,
            intercept,
            r_squared,
        }
    }

    /// Value predicted one step past the last sample
    #[must_use]
    pub fn predict_next(&self, sample_count: usize) -> f64 {
        self.slope.mul_add(sample_count as f64, self.intercept)
    }
}

/// Arithmetic mean; zero for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; zero for fewer than two values
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Median (mean of the two middle values for even lengths); zero when empty
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Relative difference `|actual - reference| / reference`
///
/// A non-positive reference has no scale: any non-zero actual counts as a full
/// (1.0) deviation.
#[must_use]
pub fn relative_difference(actual: f64, reference: f64) -> f64 {
    if reference <= 0.0 {
        return if actual.abs() > f64::EPSILON { 1.0 } else { 0.0 };
    }
    (actual - reference).abs() / reference
}
