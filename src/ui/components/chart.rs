// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Pie and bar chart rendering for the per-category breakdown, drawn
//! directly with the egui painter.

use eframe::egui;

use crate::logic::footprint::FootprintReport;
use crate::models::category::CategoryKey;

/// Chart style selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Pie, ChartKind::Bar];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Pie => "Pie Chart",
            ChartKind::Bar => "Bar Chart",
        }
    }
}

/// One fixed color per category so both chart styles and the legend agree.
fn category_color(key: CategoryKey) -> egui::Color32 {
    match key {
        CategoryKey::Electricity => egui::Color32::from_rgb(0x26, 0xa6, 0x9a), // teal
        CategoryKey::Gas => egui::Color32::from_rgb(0xef, 0x53, 0x50),         // red
        CategoryKey::Water => egui::Color32::from_rgb(0x42, 0xa5, 0xf5),       // blue
        CategoryKey::Kilometers => egui::Color32::from_rgb(0xff, 0xee, 0x58), // yellow
        CategoryKey::Flights => egui::Color32::from_rgb(0xab, 0x47, 0xbc),    // purple
        CategoryKey::Food => egui::Color32::from_rgb(0xff, 0xa7, 0x26),       // orange
    }
}

/// Render the selected chart for the report's per-category values.
pub fn view(ui: &mut egui::Ui, report: &FootprintReport, kind: ChartKind) {
    let width = ui.available_width().clamp(240.0, 560.0);
    let size = egui::vec2(width, 300.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    match kind {
        ChartKind::Pie => draw_pie(ui, &painter, rect, report),
        ChartKind::Bar => draw_bars(ui, &painter, rect, report),
    }
}

fn draw_pie(ui: &egui::Ui, painter: &egui::Painter, rect: egui::Rect, report: &FootprintReport) {
    // Floor each slice so empty categories stay visible as slivers.
    let weights: Vec<f64> = report.entries.iter().map(|(_, v)| v.max(0.001)).collect();
    let sum: f64 = weights.iter().sum();

    let center = rect.center();
    let radius = (rect.height() * 0.5 - 10.0).min(rect.width() * 0.5 - 10.0);
    let mut angle = -std::f32::consts::FRAC_PI_2;

    for ((key, value), weight) in report.entries.iter().zip(&weights) {
        let sweep = (weight / sum) as f32 * std::f32::consts::TAU;
        let color = category_color(*key);

        // Triangle fan: stays correct for slices wider than a half turn.
        let steps = ((sweep / 0.1).ceil() as usize).max(1);
        let step = sweep / steps as f32;
        for i in 0..steps {
            let a0 = angle + step * i as f32;
            let a1 = a0 + step;
            painter.add(egui::Shape::convex_polygon(
                vec![
                    center,
                    center + radius * egui::vec2(a0.cos(), a0.sin()),
                    center + radius * egui::vec2(a1.cos(), a1.sin()),
                ],
                color,
                egui::Stroke::NONE,
            ));
        }

        let mid = angle + sweep * 0.5;
        let label_pos = center + radius * 0.65 * egui::vec2(mid.cos(), mid.sin());
        painter.text(
            label_pos,
            egui::Align2::CENTER_CENTER,
            format!("{key}\n{value:.1}"),
            egui::FontId::proportional(11.0),
            ui.visuals().strong_text_color(),
        );

        angle += sweep;
    }
}

fn draw_bars(ui: &egui::Ui, painter: &egui::Painter, rect: egui::Rect, report: &FootprintReport) {
    let max = report
        .entries
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);

    let label_band = 18.0;
    let value_band = 16.0;
    let plot = egui::Rect::from_min_max(
        rect.min + egui::vec2(8.0, value_band),
        rect.max - egui::vec2(8.0, label_band),
    );
    let slot = plot.width() / report.entries.len() as f32;
    let bar_width = slot * 0.6;

    for (i, (key, value)) in report.entries.iter().enumerate() {
        let frac = if max > 0.0 { (value / max) as f32 } else { 0.0 };
        let height = plot.height() * frac;
        let center_x = plot.left() + slot * (i as f32 + 0.5);
        let bar = egui::Rect::from_min_max(
            egui::pos2(center_x - bar_width * 0.5, plot.bottom() - height),
            egui::pos2(center_x + bar_width * 0.5, plot.bottom()),
        );

        painter.rect_filled(bar, 2.0, category_color(*key));
        painter.text(
            egui::pos2(center_x, bar.top() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{value:.1}"),
            egui::FontId::proportional(10.0),
            ui.visuals().text_color(),
        );
        painter.text(
            egui::pos2(center_x, rect.bottom() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            key.label(),
            egui::FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_kinds_have_distinct_labels() {
        assert_eq!(ChartKind::Pie.label(), "Pie Chart");
        assert_eq!(ChartKind::Bar.label(), "Bar Chart");
    }

    #[test]
    fn every_category_has_its_own_color() {
        let mut seen = Vec::new();
        for key in CategoryKey::ALL {
            let color = category_color(key);
            assert!(!seen.contains(&color), "{key} reuses a color");
            seen.push(color);
        }
    }
}
