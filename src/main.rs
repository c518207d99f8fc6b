//! Entry point for the egui-based Gumin UI.

use eframe::egui;
use gumin::config;
use gumin::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use gumin::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Falling back to default configuration: {err}");
            config::AppConfig::default()
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1180.0, 760.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Gumin",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(config)))),
    )?;
    Ok(())
}
