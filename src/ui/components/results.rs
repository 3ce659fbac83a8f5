// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Breakdown table and severity indicator for a computed report.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::logic::footprint::FootprintReport;

/// Render the total, the per-category breakdown, and the severity bar.
///
/// Rows come from [`FootprintReport::rows`], the same source the CSV
/// export uses.
pub fn view(ui: &mut egui::Ui, report: &FootprintReport) {
    ui.label(
        egui::RichText::new(format!(
            "Total Carbon Footprint: {:.2} {}",
            report.total,
            report.emission_label()
        ))
        .heading()
        .color(egui::Color32::from_rgb(0x26, 0xa6, 0x9a)),
    );
    ui.add_space(8.0);

    let rows = report.rows();
    let Some((total_row, category_rows)) = rows.split_last() else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Category");
            });
            header.col(|ui| {
                ui.strong(format!("CO2 ({})", report.unit.mass_unit()));
            });
        })
        .body(|mut body| {
            for (label, value) in category_rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(label.as_str());
                    });
                    row.col(|ui| {
                        ui.label(value.as_str());
                    });
                });
            }
            body.row(20.0, |mut row| {
                row.col(|ui| {
                    ui.strong(total_row.0.as_str());
                });
                row.col(|ui| {
                    ui.strong(total_row.1.as_str());
                });
            });
        });

    ui.add_space(10.0);
    ui.label("Compared to a high-footprint household:");
    ui.add(
        egui::ProgressBar::new(report.severity as f32)
            .desired_width(ui.available_width().min(560.0)),
    )
    .on_hover_text(format!("{:.0}% of the reference ceiling", report.severity * 100.0));
}
