// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Raw and validated consumption inputs.

use thiserror::Error;

use crate::models::category::CategoryKey;

/// Why a set of raw inputs failed validation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A field contains text that does not parse as a number.
    #[error("{0} must be a number.")]
    InvalidNumber(CategoryKey),
    /// A field parsed to a negative value.
    #[error("{0} cannot be negative.")]
    NegativeValue(CategoryKey),
}

/// The six consumption fields exactly as typed by the user.
///
/// This is the form that round-trips through the session file; parsing
/// happens on demand and never mutates the raw text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputs {
    values: [String; CategoryKey::COUNT],
}

impl RawInputs {
    pub fn get(&self, key: CategoryKey) -> &str {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: CategoryKey, value: String) {
        self.values[key.index()] = value;
    }

    /// Blank every field.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }
}

/// Validated numeric inputs, one value per category.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSet {
    values: [f64; CategoryKey::COUNT],
}

impl InputSet {
    /// Parse and validate raw input text.
    ///
    /// Blank fields count as 0. All six fields are parsed before negatives
    /// are checked, so a non-numeric field is reported ahead of a negative
    /// one regardless of field order.
    pub fn parse(raw: &RawInputs) -> Result<Self, InputError> {
        let mut values = [0.0; CategoryKey::COUNT];
        for key in CategoryKey::ALL {
            let text = raw.get(key).trim();
            if text.is_empty() {
                continue;
            }
            values[key.index()] = text
                .parse::<f64>()
                .map_err(|_| InputError::InvalidNumber(key))?;
        }

        for key in CategoryKey::ALL {
            if values[key.index()] < 0.0 {
                return Err(InputError::NegativeValue(key));
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, key: CategoryKey) -> f64 {
        self.values[key.index()]
    }

    pub fn set(&mut self, key: CategoryKey, value: f64) {
        self.values[key.index()] = value;
    }
}
