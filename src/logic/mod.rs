// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Business logic: footprint computation, session persistence, CSV export.

pub mod export;
pub mod footprint;
pub mod session;
