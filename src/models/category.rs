// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Consumption categories and unit systems (UI-agnostic).

use std::fmt;

/// The six consumption categories, in display and export order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Electricity,
    Gas,
    Water,
    Kilometers,
    Flights,
    Food,
}

impl CategoryKey {
    pub const COUNT: usize = 6;

    /// Fixed category order used for the breakdown, the chart, and CSV rows.
    pub const ALL: [CategoryKey; Self::COUNT] = [
        CategoryKey::Electricity,
        CategoryKey::Gas,
        CategoryKey::Water,
        CategoryKey::Kilometers,
        CategoryKey::Flights,
        CategoryKey::Food,
    ];

    /// Position within [`CategoryKey::ALL`].
    pub fn index(self) -> usize {
        match self {
            CategoryKey::Electricity => 0,
            CategoryKey::Gas => 1,
            CategoryKey::Water => 2,
            CategoryKey::Kilometers => 3,
            CategoryKey::Flights => 4,
            CategoryKey::Food => 5,
        }
    }

    /// Stable field key used in the session file.
    pub fn key(self) -> &'static str {
        match self {
            CategoryKey::Electricity => "electricity",
            CategoryKey::Gas => "gas",
            CategoryKey::Water => "water",
            CategoryKey::Kilometers => "kilometers",
            CategoryKey::Flights => "flights",
            CategoryKey::Food => "food",
        }
    }

    /// Short label shown in the breakdown and CSV export.
    ///
    /// Note that the `kilometers` input surfaces as "Driving": the input is
    /// a distance, the emission line is the activity.
    pub fn label(self) -> &'static str {
        match self {
            CategoryKey::Electricity => "Electricity",
            CategoryKey::Gas => "Gas",
            CategoryKey::Water => "Water",
            CategoryKey::Kilometers => "Driving",
            CategoryKey::Flights => "Flights",
            CategoryKey::Food => "Food",
        }
    }

    /// Long label for the input form.
    pub fn form_label(self) -> &'static str {
        match self {
            CategoryKey::Electricity => "Monthly Electricity Usage",
            CategoryKey::Gas => "Monthly Natural Gas Usage",
            CategoryKey::Water => "Monthly Water Usage",
            CategoryKey::Kilometers => "Monthly Distance Driven",
            CategoryKey::Flights => "Number of Flights per Year",
            CategoryKey::Food => "Monthly Meat Consumption",
        }
    }

    /// Typical-usage hover hint for the input form.
    pub fn typical_usage(self) -> &'static str {
        match self {
            CategoryKey::Electricity => "Avg US: 900 kWh/month",
            CategoryKey::Gas => "Avg US: 50 therms/month",
            CategoryKey::Water => "Avg: 300 liters/day",
            CategoryKey::Kilometers => "Avg US: 1,600 km/month",
            CategoryKey::Flights => "Avg US: 2 flights/year",
            CategoryKey::Food => "Avg US: 7 kg/month",
        }
    }

    /// Input unit suffix for the given unit system.
    ///
    /// Only water, distance, and food change their input unit between
    /// systems; electricity, gas, and flights are entered in the same unit
    /// either way (their conversion factors differ instead).
    pub fn input_unit(self, unit: UnitSystem) -> &'static str {
        match (self, unit) {
            (CategoryKey::Electricity, _) => "kWh",
            (CategoryKey::Gas, _) => "therms",
            (CategoryKey::Water, UnitSystem::Metric) => "liters",
            (CategoryKey::Water, UnitSystem::Imperial) => "gallons",
            (CategoryKey::Kilometers, UnitSystem::Metric) => "km",
            (CategoryKey::Kilometers, UnitSystem::Imperial) => "miles",
            (CategoryKey::Flights, _) => "flights",
            (CategoryKey::Food, UnitSystem::Metric) => "kg",
            (CategoryKey::Food, UnitSystem::Imperial) => "lbs",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measurement system selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Stable value stored in the session file.
    pub fn key(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse a stored value; anything other than `"imperial"` is metric.
    pub fn from_key(key: &str) -> Self {
        if key == "imperial" {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        }
    }

    /// Unit label attached to every emission value.
    pub fn emission_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg CO2/month",
            UnitSystem::Imperial => "lbs CO2/month",
        }
    }

    /// Mass unit used in the CSV header.
    pub fn mass_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}
