// ABOUTME: Equipment catalog mapping equipment identifiers to weight increments
// ABOUTME: Provides WeightIncrement rounding used by every suggestion path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::increments;
use crate::errors::ModelError;

/// Equipment types known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Olympic or standard barbell
    Barbell,
    /// Dumbbells
    Dumbbell,
    /// Kettlebells
    Kettlebell,
    /// Selectorized or plate-loaded machine
    Machine,
    /// Cable station
    Cable,
    /// Smith machine
    SmithMachine,
    /// EZ curl bar
    EzBar,
    /// No external load
    Bodyweight,
    /// Elastic bands
    ResistanceBand,
}

impl Equipment {
    /// Smallest achievable weight adjustment for this equipment
    #[must_use]
    pub const fn increment(self) -> WeightIncrement {
        let step = match self {
            Self::Barbell => increments::BARBELL,
            Self::Dumbbell => increments::DUMBBELL,
            Self::Kettlebell => increments::KETTLEBELL,
            Self::Machine => increments::MACHINE,
            Self::Cable => increments::CABLE,
            Self::SmithMachine => increments::SMITH_MACHINE,
            Self::EzBar => increments::EZ_BAR,
            Self::Bodyweight | Self::ResistanceBand => 0.0,
        };
        WeightIncrement::new(step)
    }

    /// Identifier used in logs and JSON
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Barbell => "barbell",
            Self::Dumbbell => "dumbbell",
            Self::Kettlebell => "kettlebell",
            Self::Machine => "machine",
            Self::Cable => "cable",
            Self::SmithMachine => "smith_machine",
            Self::EzBar => "ez_bar",
            Self::Bodyweight => "bodyweight",
            Self::ResistanceBand => "resistance_band",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Equipment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "barbell" => Ok(Self::Barbell),
            "dumbbell" | "dumbbells" => Ok(Self::Dumbbell),
            "kettlebell" | "kettlebells" => Ok(Self::Kettlebell),
            "machine" => Ok(Self::Machine),
            "cable" | "cables" => Ok(Self::Cable),
            "smith_machine" | "smith" => Ok(Self::SmithMachine),
            "ez_bar" | "ezbar" => Ok(Self::EzBar),
            "bodyweight" | "body_weight" | "none" => Ok(Self::Bodyweight),
            "resistance_band" | "band" | "bands" => Ok(Self::ResistanceBand),
            _ => Err(ModelError::UnknownEquipment(s.to_owned())),
        }
    }
}

/// Equipment-specific minimum weight step used for rounding suggestions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightIncrement(f64);

impl Default for WeightIncrement {
    fn default() -> Self {
        Self(increments::DEFAULT)
    }
}

impl WeightIncrement {
    /// Wrap a raw step size; non-positive steps disable rounding
    #[must_use]
    pub const fn new(step: f64) -> Self {
        Self(step)
    }

    /// Raw step size
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Resolve the increment for an equipment list
    ///
    /// The coarsest positive increment among recognized items wins, since every
    /// piece of equipment used must be able to realize the load. Unrecognized
    /// identifiers are ignored. An empty or fully unrecognized list yields the
    /// default increment; a list of only zero-step equipment disables rounding.
    #[must_use]
    pub fn for_equipment<S: AsRef<str>>(equipment: &[S]) -> Self {
        let known: Vec<Equipment> = equipment
            .iter()
            .filter_map(|id| match id.as_ref().parse::<Equipment>() {
                Ok(item) => Some(item),
                Err(e) => {
                    debug!("Ignoring equipment for rounding: {e}");
                    None
                }
            })
            .collect();

        if known.is_empty() {
            return Self::default();
        }

        let coarsest = known
            .iter()
            .map(|item| item.increment().value())
            .fold(0.0_f64, f64::max);
        Self(coarsest)
    }

    /// Round `value` onto the increment grid
    ///
    /// Rounds down unless `allow_round_up`, in which case it rounds to the nearest
    /// step. Never returns a negative weight. Non-positive increments leave the
    /// value untouched apart from the zero floor.
    #[must_use]
    pub fn round(self, value: f64, allow_round_up: bool) -> f64 {
        if !value.is_finite() || value <= 0.0 {
            return 0.0;
        }
        if self.0 <= 0.0 || !self.0.is_finite() {
            return value;
        }
        let steps = value / self.0;
        // Guard against 102.49999 landing one step low from float noise
        let steps = if allow_round_up {
            steps.round()
        } else {
            (steps + 1e-9).floor()
        };
        (steps * self.0).max(0.0)
    }

    /// Round down onto the grid
    #[must_use]
    pub fn round_down(self, value: f64) -> f64 {
        self.round(value, false)
    }

    /// Round onto the grid while staying inside `[lower, upper]` when possible
    ///
    /// Prefers the regular rounding result; if that escapes the band, picks the
    /// nearest grid point inside it. When no grid point fits the band, the
    /// rounded-down value is returned.
    #[must_use]
    pub fn round_within(self, value: f64, allow_round_up: bool, lower: f64, upper: f64) -> f64 {
        let rounded = self.round(value, allow_round_up);
        if self.0 <= 0.0 || (rounded >= lower - 1e-9 && rounded <= upper + 1e-9) {
            return rounded;
        }
        let highest_inside = self.round_down(upper);
        if highest_inside >= lower - 1e-9 {
            if rounded > upper {
                return highest_inside;
            }
            let lowest_inside = (lower / self.0 - 1e-9).ceil() * self.0;
            if lowest_inside <= upper + 1e-9 {
                return lowest_inside;
            }
        }
        self.round_down(value)
    }
}
