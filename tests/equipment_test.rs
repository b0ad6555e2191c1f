// ABOUTME: Integration tests for the equipment catalog and weight rounding
// ABOUTME: Covers identifier parsing, increment resolution, and grid rounding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_strength::errors::ModelError;
use pierre_strength::models::{Equipment, WeightIncrement};

#[test]
fn test_equipment_parsing_accepts_aliases() {
    assert_eq!("Barbell".parse::<Equipment>().unwrap(), Equipment::Barbell);
    assert_eq!("dumbbells".parse::<Equipment>().unwrap(), Equipment::Dumbbell);
    assert_eq!("Smith Machine".parse::<Equipment>().unwrap(), Equipment::SmithMachine);
    assert_eq!("ez-bar".parse::<Equipment>().unwrap(), Equipment::EzBar);
    assert!(matches!(
        "sandbag".parse::<Equipment>(),
        Err(ModelError::UnknownEquipment(name)) if name == "sandbag"
    ));
}

#[test]
fn test_equipment_display_round_trips() {
    for item in [Equipment::Kettlebell, Equipment::Cable, Equipment::ResistanceBand] {
        assert_eq!(item.to_string().parse::<Equipment>().unwrap(), item);
    }
}

#[test]
fn test_increment_resolution() {
    assert!((WeightIncrement::for_equipment(&["dumbbell"]).value() - 2.0).abs() < f64::EPSILON);
    assert!((WeightIncrement::for_equipment(&["machine"]).value() - 5.0).abs() < f64::EPSILON);
    // Coarsest step wins when several items are combined
    assert!(
        (WeightIncrement::for_equipment(&["dumbbell", "kettlebell"]).value() - 4.0).abs()
            < f64::EPSILON
    );
    let none: [&str; 0] = [];
    assert!((WeightIncrement::for_equipment(&none).value() - 2.5).abs() < f64::EPSILON);
    assert!((WeightIncrement::for_equipment(&["sandbag"]).value() - 2.5).abs() < f64::EPSILON);
    assert!(WeightIncrement::for_equipment(&["bodyweight"]).value().abs() < f64::EPSILON);
}

#[test]
fn test_round_down_and_nearest() {
    let barbell = WeightIncrement::new(2.5);

    assert!((barbell.round_down(103.9) - 102.5).abs() < 1e-9);
    assert!((barbell.round(103.9, true) - 105.0).abs() < 1e-9);
    assert!((barbell.round(103.6, true) - 102.5).abs() < 1e-9);
    // Float noise just under a grid point still lands on it
    assert!((barbell.round_down(102.499_999_999_99) - 102.5).abs() < 1e-9);
}

#[test]
fn test_rounding_never_goes_negative() {
    let barbell = WeightIncrement::default();

    assert!(barbell.round_down(-5.0).abs() < f64::EPSILON);
    assert!(barbell.round(f64::NAN, true).abs() < f64::EPSILON);
    assert!(barbell.round_down(1.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_increment_disables_rounding() {
    let bands = WeightIncrement::new(0.0);

    assert!((bands.round_down(12.3) - 12.3).abs() < f64::EPSILON);
}

#[test]
fn test_round_within_prefers_grid_point_inside_band() {
    let machine = WeightIncrement::new(5.0);

    // Nearest is 110 but the band tops out at 108
    assert!((machine.round_within(108.0, true, 97.2, 108.0) - 105.0).abs() < 1e-9);
    // Floor is 95 but the band starts at 96
    assert!((machine.round_within(99.0, false, 96.0, 104.0) - 100.0).abs() < 1e-9);
    // No grid point fits: plain round down
    assert!((machine.round_within(101.0, false, 101.0, 103.0) - 100.0).abs() < 1e-9);
}
