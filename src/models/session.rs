// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Saved session snapshot: raw inputs, unit system, and timestamp.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::category::{CategoryKey, UnitSystem};
use crate::models::inputs::RawInputs;

/// One saved calculator session.
///
/// Field order matches the on-disk key order; every field defaults so a
/// partial or older file still loads (missing inputs come back blank,
/// a missing unit system comes back metric).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub electricity: String,
    #[serde(default)]
    pub gas: String,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub kilometers: String,
    #[serde(default)]
    pub flights: String,
    #[serde(default)]
    pub food: String,
    /// `"metric"` or `"imperial"`.
    #[serde(default)]
    pub unit_system: String,
    /// ISO-8601 local time of the save.
    #[serde(default)]
    pub timestamp: String,
}

impl SessionRecord {
    /// Snapshot the current inputs. The clock is injected so record
    /// construction stays pure.
    pub fn new(raw: &RawInputs, unit: UnitSystem, saved_at: DateTime<Local>) -> Self {
        Self {
            electricity: raw.get(CategoryKey::Electricity).to_string(),
            gas: raw.get(CategoryKey::Gas).to_string(),
            water: raw.get(CategoryKey::Water).to_string(),
            kilometers: raw.get(CategoryKey::Kilometers).to_string(),
            flights: raw.get(CategoryKey::Flights).to_string(),
            food: raw.get(CategoryKey::Food).to_string(),
            unit_system: unit.key().to_string(),
            timestamp: saved_at.to_rfc3339(),
        }
    }

    /// Restore the raw input strings exactly as saved.
    pub fn raw_inputs(&self) -> RawInputs {
        let mut raw = RawInputs::default();
        raw.set(CategoryKey::Electricity, self.electricity.clone());
        raw.set(CategoryKey::Gas, self.gas.clone());
        raw.set(CategoryKey::Water, self.water.clone());
        raw.set(CategoryKey::Kilometers, self.kilometers.clone());
        raw.set(CategoryKey::Flights, self.flights.clone());
        raw.set(CategoryKey::Food, self.food.clone());
        raw
    }

    /// Saved unit system; unknown or missing values fall back to metric.
    pub fn unit(&self) -> UnitSystem {
        UnitSystem::from_key(&self.unit_system)
    }
}
