//! Application entry point wiring egui/eframe to launch the calculator UI.

use eframe::egui;
use egui_phosphor::Variant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ui::CarbonTallyApp;

/// Bootstrap logging and the desktop application, then run the main egui
/// event loop.
pub fn run() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("starting carbontally");

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CarbonTally",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(CarbonTallyApp::default()))
        }),
    )
}
