// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Consumption input form as an MVU-style model/update/view component.

use eframe::egui;

use crate::models::category::{CategoryKey, UnitSystem};
use crate::models::inputs::RawInputs;

/// State of the six input fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputsModel {
    raw: RawInputs,
}

impl InputsModel {
    /// Raw field text as typed.
    pub fn raw(&self) -> &RawInputs {
        &self.raw
    }

    /// Replace all fields at once (used when a session is loaded).
    pub fn restore(&mut self, raw: RawInputs) {
        self.raw = raw;
    }

    /// Blank every field.
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputsMsg {
    /// One field's text changed.
    ValueChanged(CategoryKey, String),
}

/// Apply a message to the input model.
pub fn update(model: &mut InputsModel, msg: InputsMsg) {
    match msg {
        InputsMsg::ValueChanged(key, value) => model.raw.set(key, value),
    }
}

/// Render the input grid (two fields per row) and return any edits.
///
/// Each field shows its unit suffix for the active unit system and a
/// typical-usage hint on hover.
pub fn view(ui: &mut egui::Ui, model: &InputsModel, unit: UnitSystem) -> Vec<InputsMsg> {
    let mut msgs = Vec::new();

    egui::Grid::new("inputs_grid")
        .num_columns(2)
        .spacing(egui::vec2(24.0, 14.0))
        .show(ui, |ui| {
            for pair in CategoryKey::ALL.chunks(2) {
                for &key in pair {
                    ui.vertical(|ui| {
                        ui.label(key.form_label());
                        ui.horizontal(|ui| {
                            let mut text = model.raw.get(key).to_string();
                            let suffix = key.input_unit(unit);
                            let response = ui
                                .add(
                                    egui::TextEdit::singleline(&mut text)
                                        .desired_width(140.0)
                                        .hint_text(format!("Enter {suffix}")),
                                )
                                .on_hover_text(key.typical_usage());
                            if response.changed() {
                                msgs.push(InputsMsg::ValueChanged(key, text));
                            }
                            ui.label(
                                egui::RichText::new(suffix)
                                    .small()
                                    .color(egui::Color32::from_gray(110)),
                            );
                        });
                    });
                }
                ui.end_row();
            }
        });

    msgs
}
