// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Top-level egui application shell for the footprint calculator.
//! Handles layout, form controls, and wiring to the MVU kernel.

pub mod components;

use chrono::Local;
use eframe::egui;

use crate::logic::export::{ensure_extension, suggested_export_name};
use crate::models::category::UnitSystem;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::chart::{self, ChartKind};
use crate::ui::components::{inputs, results};

/// Stateful egui application for estimating household emissions.
pub struct CarbonTallyApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for CarbonTallyApp {
    fn default() -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Storage commands are rare and short-lived; two workers are plenty.
        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for CarbonTallyApp {
    // Rendering is driven entirely from `update` (below), which the eframe runner
    // still invokes alongside `ui`. This required method is intentionally empty.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!(
                    "{} Carbon Footprint Calculator",
                    egui_phosphor::regular::LEAF
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_about_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);
        self.render_about_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_settings_row(ui);
                ui.add_space(12.0);

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let input_msgs =
                        inputs::view(ui, &self.model.inputs, self.model.unit_system);
                    self.inbox.extend(input_msgs.into_iter().map(Msg::Inputs));
                });
                ui.add_space(12.0);

                self.render_action_buttons(ui);
                ui.add_space(12.0);

                if let Some(report) = &self.model.report {
                    results::view(ui, report);
                    ui.add_space(12.0);
                    chart::view(ui, report, self.model.chart_kind);
                    ui.add_space(8.0);
                }
            });
        });
    }
}

impl CarbonTallyApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    fn render_about_button(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(egui_phosphor::regular::INFO)
            .on_hover_text("About")
            .clicked()
        {
            self.inbox.push(Msg::ShowAbout);
        }
    }

    /// Unit-system selector and chart-type picker.
    fn render_settings_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Units");
            let metric = egui::Button::new("Metric")
                .selected(matches!(self.model.unit_system, UnitSystem::Metric));
            if ui.add(metric).clicked() {
                self.inbox.push(Msg::SetUnitSystem(UnitSystem::Metric));
            }
            let imperial = egui::Button::new("Imperial")
                .selected(matches!(self.model.unit_system, UnitSystem::Imperial));
            if ui.add(imperial).clicked() {
                self.inbox.push(Msg::SetUnitSystem(UnitSystem::Imperial));
            }

            ui.add_space(16.0);

            ui.label("Chart");
            let mut kind = self.model.chart_kind;
            egui::ComboBox::from_id_salt("chart_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for option in ChartKind::ALL {
                        ui.selectable_value(&mut kind, option, option.label());
                    }
                });
            if kind != self.model.chart_kind {
                self.inbox.push(Msg::SetChartKind(kind));
            }
        });
    }

    /// Calculate, Reset, Save, Load, and Export CSV buttons.
    fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(format!(
                    "{} Calculate",
                    egui_phosphor::regular::CALCULATOR
                ))
                .clicked()
            {
                self.inbox.push(Msg::CalculateRequested);
            }
            if ui
                .button(format!(
                    "{} Reset",
                    egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                ))
                .clicked()
            {
                self.inbox.push(Msg::ResetRequested);
            }
            if ui
                .button(format!("{} Save", egui_phosphor::regular::FLOPPY_DISK))
                .on_hover_text("Save the entered values for next time")
                .clicked()
            {
                self.inbox.push(Msg::SaveRequested);
            }
            if ui
                .button(format!("{} Load", egui_phosphor::regular::FOLDER_OPEN))
                .on_hover_text("Restore the previously saved values")
                .clicked()
            {
                self.inbox.push(Msg::LoadRequested);
            }
            if ui
                .button(format!(
                    "{} Export CSV",
                    egui_phosphor::regular::FILE_CSV
                ))
                .clicked()
            {
                let default_name = suggested_export_name(Local::now());
                let dialog = rfd::FileDialog::new()
                    .set_title("Export CSV report")
                    .add_filter("CSV", &["csv"])
                    .set_file_name(&default_name);

                if let Some(path) = dialog.save_file() {
                    self.inbox
                        .push(Msg::ExportRequested(ensure_extension(path, "csv")));
                } else {
                    self.inbox.push(Msg::ExportCancelled);
                }
            }
        });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Invalid input")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    fn render_about_modal(&mut self, ctx: &egui::Context) {
        if self.model.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(format!(
                        "CarbonTally {}\nEstimates monthly household CO2 emissions\nfrom utility and travel usage.",
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.add_space(8.0);
                    if ui.button("Close").clicked() {
                        self.inbox.push(Msg::DismissAbout);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(110)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}
