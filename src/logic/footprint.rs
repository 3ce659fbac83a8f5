// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Footprint computation: conversion factors, per-category emissions,
//! totals, and the severity ratio.

use crate::models::category::{CategoryKey, UnitSystem};
use crate::models::inputs::InputSet;

/// Emission factor (kg or lb CO2 per input unit) for one category.
///
/// The factors are fixed constants per unit system, not derived from the
/// input unit labels: electricity and gas keep their input unit across
/// systems yet still use system-specific factors, while gas and flights
/// share one factor in both systems even though the output mass unit
/// switches to lbs.
pub fn conversion_factor(unit: UnitSystem, category: CategoryKey) -> f64 {
    match (unit, category) {
        (UnitSystem::Metric, CategoryKey::Electricity) => 0.92,
        (UnitSystem::Metric, CategoryKey::Gas) => 5.3,
        (UnitSystem::Metric, CategoryKey::Water) => 0.00007,
        (UnitSystem::Metric, CategoryKey::Kilometers) => 0.245,
        (UnitSystem::Metric, CategoryKey::Flights) => 900.0,
        (UnitSystem::Metric, CategoryKey::Food) => 2.5,
        (UnitSystem::Imperial, CategoryKey::Electricity) => 0.42,
        (UnitSystem::Imperial, CategoryKey::Gas) => 5.3,
        (UnitSystem::Imperial, CategoryKey::Water) => 0.00026,
        (UnitSystem::Imperial, CategoryKey::Kilometers) => 0.394,
        (UnitSystem::Imperial, CategoryKey::Flights) => 900.0,
        (UnitSystem::Imperial, CategoryKey::Food) => 1.13,
    }
}

/// Monthly total at which the severity indicator saturates.
pub fn reference_ceiling(unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Metric => 5000.0,
        UnitSystem::Imperial => 11000.0,
    }
}

/// Immutable result of one footprint computation.
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintReport {
    /// Unit system the factors were taken from.
    pub unit: UnitSystem,
    /// Per-category emissions in [`CategoryKey::ALL`] order.
    pub entries: Vec<(CategoryKey, f64)>,
    /// Sum of all six emissions.
    pub total: f64,
    /// Total over the reference ceiling, clamped to [0, 1].
    pub severity: f64,
}

impl FootprintReport {
    /// Unit label for every value in this report.
    pub fn emission_label(&self) -> &'static str {
        self.unit.emission_label()
    }

    /// Breakdown rows as (label, value-to-two-decimals), ending with a
    /// Total row. The on-screen breakdown and the CSV export both render
    /// from these rows so ordering and formatting cannot drift apart.
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.label().to_string(), format!("{value:.2}")))
            .collect();
        rows.push(("Total".to_string(), format!("{:.2}", self.total)));
        rows
    }
}

/// Compute per-category and total emissions for validated inputs.
///
/// Pure and unrounded; two-decimal formatting happens in
/// [`FootprintReport::rows`] at the presentation boundary.
pub fn compute(inputs: &InputSet, unit: UnitSystem) -> FootprintReport {
    let entries: Vec<(CategoryKey, f64)> = CategoryKey::ALL
        .iter()
        .map(|&key| (key, inputs.get(key) * conversion_factor(unit, key)))
        .collect();
    let total: f64 = entries.iter().map(|(_, value)| value).sum();
    let severity = (total / reference_ceiling(unit)).clamp(0.0, 1.0);

    FootprintReport {
        unit,
        entries,
        total,
        severity,
    }
}
