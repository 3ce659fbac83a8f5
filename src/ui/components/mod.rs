// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Reusable egui components structured for MVU-style updates.

pub mod chart;
pub mod inputs;
pub mod results;
