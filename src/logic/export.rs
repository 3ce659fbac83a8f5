// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! CSV report export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::logic::footprint::FootprintReport;

/// Default export filename, stamped with the current local time.
pub fn suggested_export_name(now: DateTime<Local>) -> String {
    format!("carbon_footprint_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps an existing matching extension (case-insensitive); otherwise
/// replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

/// Render the report as CSV text: a header naming the mass unit, one row
/// per category, and a final Total row.
///
/// The body comes from [`FootprintReport::rows`], so row order and the
/// two-decimal formatting are identical to the on-screen breakdown.
pub fn render_csv(report: &FootprintReport) -> String {
    let mut out = format!("Category,CO2 ({})\n", report.unit.mass_unit());
    for (label, value) in report.rows() {
        out.push_str(&label);
        out.push(',');
        out.push_str(&value);
        out.push('\n');
    }
    out
}

/// Write the report to `output` as CSV, creating parent directories as
/// needed.
pub fn write_csv(output: &Path, report: &FootprintReport) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory {:?}", parent))?;
    }

    fs::write(output, render_csv(report))
        .with_context(|| format!("Failed to write CSV export {:?}", output))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;
    use crate::logic::footprint::compute;
    use crate::models::category::{CategoryKey, UnitSystem};
    use crate::models::inputs::InputSet;

    fn sample_report(unit: UnitSystem) -> FootprintReport {
        let mut inputs = InputSet::default();
        inputs.set(CategoryKey::Electricity, 900.0);
        inputs.set(CategoryKey::Gas, 50.0);
        inputs.set(CategoryKey::Water, 9000.0);
        inputs.set(CategoryKey::Kilometers, 1600.0);
        inputs.set(CategoryKey::Flights, 2.0);
        inputs.set(CategoryKey::Food, 7.0);
        compute(&inputs, unit)
    }

    #[test]
    fn suggested_name_carries_a_compact_timestamp() {
        let now = Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(
            suggested_export_name(now),
            "carbon_footprint_20260314_150926.csv"
        );
    }

    #[test]
    fn csv_rows_follow_the_fixed_category_order() {
        let csv = render_csv(&sample_report(UnitSystem::Metric));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            [
                "Category,CO2 (kg)",
                "Electricity,828.00",
                "Gas,265.00",
                "Water,0.63",
                "Driving,392.00",
                "Flights,1800.00",
                "Food,17.50",
                "Total,3303.13",
            ]
        );
    }

    #[test]
    fn csv_header_names_lbs_for_imperial() {
        let csv = render_csv(&sample_report(UnitSystem::Imperial));
        assert!(csv.starts_with("Category,CO2 (lbs)\n"));
    }

    #[test]
    fn write_csv_round_trips_through_disk() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("report.csv");
        let report = sample_report(UnitSystem::Metric);

        write_csv(&output, &report).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), render_csv(&report));
    }

    #[test]
    fn write_csv_creates_missing_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("exports").join("report.csv");

        write_csv(&output, &sample_report(UnitSystem::Metric)).unwrap();

        assert!(output.exists());
    }

    #[test]
    fn ensure_extension_preserves_matching_extension_case_insensitive() {
        let path = PathBuf::from("/tmp/report.CSV");
        assert_eq!(ensure_extension(path.clone(), "csv"), path);
    }

    #[test]
    fn ensure_extension_replaces_when_different() {
        let result = ensure_extension(PathBuf::from("report.txt"), "csv");
        assert_eq!(result.extension().and_then(|e| e.to_str()), Some("csv"));
    }
}
