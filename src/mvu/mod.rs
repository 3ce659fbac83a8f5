// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Root Model-View-Update kernel wiring application state, messages, and
//! commands.

use std::path::PathBuf;

use chrono::Local;
use tracing::{error, info};

use crate::logic::export::write_csv;
use crate::logic::footprint::{FootprintReport, compute};
use crate::logic::session::{default_session_path, read_session, write_session};
use crate::models::category::UnitSystem;
use crate::models::inputs::{InputSet, RawInputs};
use crate::models::session::SessionRecord;
use crate::ui::components::chart::ChartKind;
use crate::ui::components::inputs::{self, InputsModel, InputsMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Raw consumption input fields.
    pub inputs: InputsModel,
    /// Active measurement system.
    pub unit_system: UnitSystem,
    /// Selected chart style.
    pub chart_kind: ChartKind,
    /// Last computed report, if any.
    pub report: Option<FootprintReport>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Whether the about dialog is open.
    pub show_about: bool,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    Inputs(InputsMsg),
    SetUnitSystem(UnitSystem),
    SetChartKind(ChartKind),
    CalculateRequested,
    ResetRequested,
    SaveRequested,
    LoadRequested,
    ExportRequested(PathBuf),
    ExportCancelled,
    SaveCompleted(Result<PathBuf, String>),
    LoadCompleted(Result<SessionRecord, String>),
    ExportCompleted(Result<PathBuf, String>),
    ShowAbout,
    DismissAbout,
    DismissError,
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SaveSession {
        output: PathBuf,
        raw: RawInputs,
        unit: UnitSystem,
    },
    LoadSession {
        path: PathBuf,
    },
    ExportCsv {
        output: PathBuf,
        report: FootprintReport,
    },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Inputs(m) => inputs::update(&mut model.inputs, m),
        Msg::SetUnitSystem(unit) => {
            model.unit_system = unit;
            // Inputs are kept verbatim; only factors and labels change.
            if model.report.is_some() {
                recompute(model);
            }
        }
        Msg::SetChartKind(kind) => model.chart_kind = kind,
        Msg::CalculateRequested => recompute(model),
        Msg::ResetRequested => {
            model.inputs.clear();
            model.report = None;
            model.status = None;
            model.error = None;
        }
        Msg::SaveRequested => cmds.push(Command::SaveSession {
            output: default_session_path(),
            raw: model.inputs.raw().clone(),
            unit: model.unit_system,
        }),
        Msg::LoadRequested => cmds.push(Command::LoadSession {
            path: default_session_path(),
        }),
        Msg::ExportRequested(output) => match validate_inputs(model) {
            Ok(input_set) => cmds.push(Command::ExportCsv {
                output,
                report: compute(&input_set, model.unit_system),
            }),
            Err(err) => surface_event(model, err, true),
        },
        Msg::ExportCancelled => surface_event(model, "Export cancelled.".to_string(), false),
        Msg::SaveCompleted(result) => match result {
            Ok(_) => surface_event(model, "Data saved successfully!".to_string(), false),
            Err(_) => surface_event(model, "Error saving data.".to_string(), true),
        },
        Msg::LoadCompleted(result) => match result {
            Ok(record) => {
                let loaded_at = if record.timestamp.is_empty() {
                    "unknown time".to_string()
                } else {
                    record.timestamp.clone()
                };
                model.inputs.restore(record.raw_inputs());
                model.unit_system = record.unit();
                recompute(model);
                surface_event(model, format!("Data loaded from {loaded_at}"), false);
            }
            // Expected when nothing was ever saved; not an error modal.
            Err(_) => surface_event(model, "No saved data found.".to_string(), false),
        },
        Msg::ExportCompleted(result) => match result {
            Ok(path) => surface_event(
                model,
                format!(
                    "Exported to {}",
                    path.file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                ),
                false,
            ),
            Err(_) => surface_event(model, "Error exporting data.".to_string(), true),
        },
        Msg::ShowAbout => model.show_about = true,
        Msg::DismissAbout => model.show_about = false,
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::SaveSession { output, raw, unit } => {
            let record = SessionRecord::new(&raw, unit, Local::now());
            let result = write_session(&output, &record).map(|_| output);
            match &result {
                Ok(path) => info!(path = %path.display(), "session saved"),
                Err(err) => error!("save failed: {err:#}"),
            }
            Msg::SaveCompleted(result.map_err(|e| e.to_string()))
        }
        Command::LoadSession { path } => {
            let result = read_session(&path);
            match &result {
                Ok(record) => info!(timestamp = %record.timestamp, "session loaded"),
                Err(err) => error!("load failed: {err:#}"),
            }
            Msg::LoadCompleted(result.map_err(|e| e.to_string()))
        }
        Command::ExportCsv { output, report } => {
            let result = write_csv(&output, &report).map(|_| output);
            match &result {
                Ok(path) => info!(path = %path.display(), "report exported"),
                Err(err) => error!("export failed: {err:#}"),
            }
            Msg::ExportCompleted(result.map_err(|e| e.to_string()))
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Parse the raw input fields, mapping failures to user-facing text.
fn validate_inputs(model: &AppModel) -> Result<InputSet, String> {
    InputSet::parse(model.inputs.raw()).map_err(|e| e.to_string())
}

/// Validate and recompute the report. On failure the previous report is
/// left on screen and the error is surfaced instead.
fn recompute(model: &mut AppModel) {
    match validate_inputs(model) {
        Ok(input_set) => {
            model.report = Some(compute(&input_set, model.unit_system));
            info!(unit = model.unit_system.key(), "footprint computed");
        }
        Err(err) => surface_event(model, err, true),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::category::CategoryKey;

    fn model_with_inputs(pairs: &[(CategoryKey, &str)]) -> AppModel {
        let mut model = AppModel::default();
        for (key, value) in pairs {
            update(
                &mut model,
                Msg::Inputs(InputsMsg::ValueChanged(*key, (*value).to_string())),
                &mut Vec::new(),
            );
        }
        model
    }

    #[test]
    fn calculate_with_valid_inputs_sets_report() {
        let mut model = model_with_inputs(&[(CategoryKey::Electricity, "900")]);
        let mut cmds = Vec::new();

        update(&mut model, Msg::CalculateRequested, &mut cmds);

        assert!(cmds.is_empty());
        let report = model.report.expect("report computed");
        assert_eq!(report.total, 828.0);
        assert!(model.error.is_none());
    }

    #[test]
    fn calculate_failure_keeps_previous_report() {
        let mut model = model_with_inputs(&[(CategoryKey::Electricity, "900")]);
        update(&mut model, Msg::CalculateRequested, &mut Vec::new());
        let before = model.report.clone();

        update(
            &mut model,
            Msg::Inputs(InputsMsg::ValueChanged(CategoryKey::Gas, "lots".into())),
            &mut Vec::new(),
        );
        update(&mut model, Msg::CalculateRequested, &mut Vec::new());

        assert_eq!(model.report, before);
        assert_eq!(model.error.as_deref(), Some("Gas must be a number."));
    }

    #[test]
    fn unit_switch_keeps_inputs_and_recomputes_visible_report() {
        let mut model = model_with_inputs(&[(CategoryKey::Electricity, "900")]);
        update(&mut model, Msg::CalculateRequested, &mut Vec::new());

        update(
            &mut model,
            Msg::SetUnitSystem(UnitSystem::Imperial),
            &mut Vec::new(),
        );

        assert_eq!(model.inputs.raw().get(CategoryKey::Electricity), "900");
        let report = model.report.expect("still reported");
        assert_eq!(report.unit, UnitSystem::Imperial);
        assert_eq!(report.total, 900.0 * 0.42);
    }

    #[test]
    fn unit_switch_without_report_does_not_compute_one() {
        let mut model = model_with_inputs(&[(CategoryKey::Electricity, "900")]);

        update(
            &mut model,
            Msg::SetUnitSystem(UnitSystem::Imperial),
            &mut Vec::new(),
        );

        assert!(model.report.is_none());
    }

    #[test]
    fn reset_clears_inputs_report_and_messages() {
        let mut model = model_with_inputs(&[(CategoryKey::Food, "7")]);
        update(&mut model, Msg::CalculateRequested, &mut Vec::new());

        update(&mut model, Msg::ResetRequested, &mut Vec::new());

        assert_eq!(model.inputs.raw().get(CategoryKey::Food), "");
        assert!(model.report.is_none());
        assert!(model.status.is_none());
    }

    #[test]
    fn save_request_enqueues_one_session_command() {
        let mut model = model_with_inputs(&[(CategoryKey::Flights, "2")]);
        let mut cmds = Vec::new();

        update(&mut model, Msg::SaveRequested, &mut cmds);

        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            Command::SaveSession { raw, unit, .. } => {
                assert_eq!(raw.get(CategoryKey::Flights), "2");
                assert_eq!(*unit, UnitSystem::Metric);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn save_then_load_round_trips_through_run_command() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("footprint_data.json");
        let mut raw = RawInputs::default();
        raw.set(CategoryKey::Water, "9000".into());

        let saved = run_command(Command::SaveSession {
            output: path.clone(),
            raw: raw.clone(),
            unit: UnitSystem::Imperial,
        });
        assert!(matches!(saved, Msg::SaveCompleted(Ok(_))));

        let loaded = run_command(Command::LoadSession { path });
        match loaded {
            Msg::LoadCompleted(Ok(record)) => {
                assert_eq!(record.raw_inputs(), raw);
                assert_eq!(record.unit(), UnitSystem::Imperial);
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn load_completion_restores_state_and_recomputes() {
        let mut raw = RawInputs::default();
        raw.set(CategoryKey::Electricity, "900".into());
        let record = SessionRecord::new(&raw, UnitSystem::Imperial, chrono::Local::now());

        let mut model = AppModel::default();
        update(&mut model, Msg::LoadCompleted(Ok(record)), &mut Vec::new());

        assert_eq!(model.inputs.raw().get(CategoryKey::Electricity), "900");
        assert_eq!(model.unit_system, UnitSystem::Imperial);
        let report = model.report.expect("recomputed after load");
        assert_eq!(report.total, 900.0 * 0.42);
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.starts_with("Data loaded from"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn load_failure_reads_as_no_saved_data() {
        let mut model = AppModel::default();

        update(
            &mut model,
            Msg::LoadCompleted(Err("boom".into())),
            &mut Vec::new(),
        );

        assert_eq!(model.status.as_deref(), Some("No saved data found."));
        assert!(model.error.is_none());
    }

    #[test]
    fn export_with_invalid_inputs_enqueues_nothing() {
        let mut model = model_with_inputs(&[(CategoryKey::Kilometers, "-5")]);
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::ExportRequested(std::path::PathBuf::from("out.csv")),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert_eq!(model.error.as_deref(), Some("Driving cannot be negative."));
    }

    #[test]
    fn export_command_writes_csv_and_reports_filename() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("carbon_footprint_20260314_150926.csv");
        let mut model = model_with_inputs(&[(CategoryKey::Gas, "50")]);
        let mut cmds = Vec::new();

        update(&mut model, Msg::ExportRequested(output.clone()), &mut cmds);
        assert_eq!(cmds.len(), 1);

        let msg = run_command(cmds.pop().unwrap());
        update(&mut model, msg, &mut Vec::new());

        assert!(output.exists());
        assert_eq!(
            model.status.as_deref(),
            Some("Exported to carbon_footprint_20260314_150926.csv")
        );
    }

    #[test]
    fn save_failure_surfaces_error() {
        let mut model = AppModel::default();

        update(
            &mut model,
            Msg::SaveCompleted(Err("disk full".into())),
            &mut Vec::new(),
        );

        assert_eq!(model.error.as_deref(), Some("Error saving data."));
    }
}
