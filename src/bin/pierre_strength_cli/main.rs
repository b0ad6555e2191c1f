// ABOUTME: Pierre Strength CLI - run the suggestion engine against a JSON workout history
// ABOUTME: Handles pattern analysis, next-session planning, and next-set adaptation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify the training pattern for an exercise
//! pierre-strength analyze --history history.json --exercise "Bench Press" --compound
//!
//! # Plan the next session's sets
//! pierre-strength suggest --history history.json --exercise "Bench Press" --sets 4 --equipment barbell
//!
//! # Adapt the next set after logging one
//! pierre-strength adapt --suggested-weight 100 --suggested-reps 8 --actual-weight 100 --actual-reps 11
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use pierre_strength::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-strength",
    about = "Pierre Strength training-load suggestion CLI",
    long_about = "Runs the strength suggestion engine against a JSON export of workout sessions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify the training pattern used for an exercise
    Analyze {
        #[command(flatten)]
        target: ExerciseArgs,
    },

    /// Plan per-set targets for the next session
    Suggest {
        #[command(flatten)]
        target: ExerciseArgs,

        /// Number of sets to plan
        #[arg(long, default_value = "3")]
        sets: usize,

        /// Equipment identifiers used for rounding (comma-separated)
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,
    },

    /// Compute the next set's target from the set just performed
    Adapt {
        /// Weight that was suggested for the completed set
        #[arg(long)]
        suggested_weight: f64,

        /// Reps that were suggested for the completed set
        #[arg(long)]
        suggested_reps: u32,

        /// Weight actually lifted
        #[arg(long)]
        actual_weight: f64,

        /// Reps actually performed
        #[arg(long)]
        actual_reps: u32,

        /// Equipment identifiers used for rounding (comma-separated)
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,

        /// Treat the exercise as a compound movement
        #[arg(long)]
        compound: bool,
    },
}

/// Arguments selecting one exercise from a history file
#[derive(Args)]
struct ExerciseArgs {
    /// Path to a JSON array of workout sessions
    #[arg(long)]
    history: PathBuf,

    /// Exercise name (case-insensitive)
    #[arg(long)]
    exercise: String,

    /// Treat the exercise as a compound movement
    #[arg(long)]
    compound: bool,

    /// Session id to ignore (e.g. the one currently in progress)
    #[arg(long)]
    exclude_session: Option<String>,

    /// Analysis instant in RFC 3339 (defaults to now)
    #[arg(long)]
    as_of: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let output = match cli.command {
        Command::Analyze { target } => commands::analyze(&target)?,
        Command::Suggest {
            target,
            sets,
            equipment,
        } => commands::suggest(&target, sets, &equipment)?,
        Command::Adapt {
            suggested_weight,
            suggested_reps,
            actual_weight,
            actual_reps,
            equipment,
            compound,
        } => commands::adapt(
            suggested_weight,
            suggested_reps,
            actual_weight,
            actual_reps,
            &equipment,
            compound,
        )?,
    };

    debug!("Command completed");
    println!("{output}");
    Ok(())
}
